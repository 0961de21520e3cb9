//! Interprets a parsed RTF token tree into styled HTML.
//!
//! The upstream parser hands over a [`Document`]; [`interpret`] walks it and
//! reports styled content to any [`OutputSink`]. [`to_html`] wires the walk to
//! the writer that suits the document.

pub mod interpret;
pub mod io;
pub mod model;
pub mod settings;
pub mod sink;

pub use interpret::{FormatContext, Interpreter, interpret};
pub use io::*;
pub use model::Document;
pub use settings::RenderSettings;
pub use sink::{DeencapsulationWriter, Event, HtmlWriter, OutputSink, RecordingSink};

/// Renders `doc` as HTML.
///
/// Documents that encapsulate HTML get their original markup back; anything
/// else goes through the full renderer.
pub fn to_html(doc: &Document, settings: &RenderSettings) -> String {
    if doc.has_html {
        let mut writer = DeencapsulationWriter::new(settings.clone());
        interpret(doc, &mut writer);
        writer.into_html()
    } else {
        let mut writer = HtmlWriter::new(doc, settings.clone());
        interpret(doc, &mut writer);
        writer.into_html()
    }
}
