//! # Output Sinks
//!
//! The interpreter reports what it finds as an ordered stream of calls on an
//! [`OutputSink`]. Every content call carries the [`FormatContext`] in effect
//! for that content, already resolved against the document's list styles.
//!
//! ## Strategies
//!
//! - **`html`**: `HtmlWriter`, a full renderer for ordinary documents
//! - **`passthrough`**: `DeencapsulationWriter`, for documents that already
//!   embed their own markup
//! - **`recording`**: `RecordingSink`, which keeps every call as an `Event`

use crate::interpret::FormatContext;
use crate::model::{BreakKind, Font, Picture};

pub mod html;
pub mod passthrough;
pub mod recording;

pub use html::HtmlWriter;
pub use passthrough::DeencapsulationWriter;
pub use recording::{Event, RecordingSink};

/// Receives the event stream produced by the interpreter.
///
/// Document defaults arrive before any content; `close` arrives exactly once,
/// last.
pub trait OutputSink {
    fn set_default_font(&mut self, font: Option<Font>);

    /// Default tab stop width in twips.
    fn set_default_tab_width(&mut self, twips: i32);

    fn add_text(&mut self, style: &FormatContext, text: &str);

    /// `count` is greater than one only for a run of batched tabs.
    fn add_break(&mut self, style: &FormatContext, kind: BreakKind, count: usize);

    fn add_picture(&mut self, style: &FormatContext, picture: &Picture);

    fn close(&mut self);
}
