use crate::interpret::FormatContext;
use crate::model::{BreakKind, Font, Picture};

use super::OutputSink;

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DefaultFont(Option<Font>),
    DefaultTabWidth(i32),
    Text {
        style: FormatContext,
        text: String,
    },
    Break {
        style: FormatContext,
        kind: BreakKind,
        count: usize,
    },
    Picture {
        style: FormatContext,
        picture: Picture,
    },
    Close,
}

impl Event {
    /// A compact form without styles, handy for asserting on event order.
    pub fn summary(&self) -> String {
        match self {
            Event::DefaultFont(font) => format!(
                "font {}",
                font.as_ref().map_or("-", |font| font.name.as_str())
            ),
            Event::DefaultTabWidth(twips) => format!("tabwidth {twips}"),
            Event::Text { text, .. } => format!("text {text:?}"),
            Event::Break { kind, count, .. } => format!("break {kind:?} x{count}"),
            Event::Picture { picture, .. } => format!("picture {:?}", picture.format),
            Event::Close => "close".to_string(),
        }
    }
}

/// Keeps every call it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Vec<String> {
        self.events.iter().map(Event::summary).collect()
    }
}

impl OutputSink for RecordingSink {
    fn set_default_font(&mut self, font: Option<Font>) {
        self.events.push(Event::DefaultFont(font));
    }

    fn set_default_tab_width(&mut self, twips: i32) {
        self.events.push(Event::DefaultTabWidth(twips));
    }

    fn add_text(&mut self, style: &FormatContext, text: &str) {
        self.events.push(Event::Text {
            style: style.clone(),
            text: text.to_string(),
        });
    }

    fn add_break(&mut self, style: &FormatContext, kind: BreakKind, count: usize) {
        self.events.push(Event::Break {
            style: style.clone(),
            kind,
            count,
        });
    }

    fn add_picture(&mut self, style: &FormatContext, picture: &Picture) {
        self.events.push(Event::Picture {
            style: style.clone(),
            picture: picture.clone(),
        });
    }

    fn close(&mut self) {
        self.events.push(Event::Close);
    }
}
