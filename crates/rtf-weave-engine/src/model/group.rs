use serde::{Deserialize, Serialize};

use super::category::TokenCategory;
use super::token::Token;

/// Semantic role of a group, taken from its leading destination token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// `\fldinst`
    FieldInstructions,
    /// `\fldrslt`
    FieldResult,
    /// `\pict`
    Picture,
    /// `\bkmkstart`
    BookmarkStart,
    /// `\bkmkend`
    BookmarkEnd,
    /// `\header`, `\headerl`, `\headerf`, ...
    Header,
    /// `\footer`, `\footerl`, `\footerf`, ...
    Footer,
    /// `\listtext`
    ListTextFallback,
    /// `\pntext`
    NumberingTextFallback,
    /// `\htmltag`: literal markup embedded by an HTML-to-RTF encapsulation.
    HtmlTag,
    /// Any other destination the parser recognized by name.
    Other(String),
}

impl Destination {
    pub fn category(&self) -> TokenCategory {
        match self {
            Destination::Header | Destination::Footer => {
                TokenCategory::DESTINATION | TokenCategory::HEADER_TAG
            }
            // Recorded into the format context so a writer can tell literal
            // markup from text.
            Destination::HtmlTag => TokenCategory::DESTINATION | TokenCategory::FORMAT,
            _ => TokenCategory::DESTINATION,
        }
    }

    pub fn is_header(&self) -> bool {
        self.category().contains(TokenCategory::HEADER_TAG)
    }
}

/// An RTF group: `{ ... }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub contents: Vec<Token>,
}

impl Group {
    pub fn new(contents: Vec<Token>) -> Self {
        Self { contents }
    }

    /// The destination of this group, if any.
    ///
    /// A destination is the first child, or the second when the first is the
    /// `\*` ignore marker.
    pub fn destination(&self) -> Option<&Destination> {
        let mut leading = self.contents.iter().take(2);
        match leading.next()? {
            Token::Destination(dest) => Some(dest),
            Token::IgnoreUnrecognized => match leading.next()? {
                Token::Destination(dest) => Some(dest),
                _ => None,
            },
            _ => None,
        }
    }

    /// Nested child groups, in order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.contents.iter().filter_map(Token::as_group)
    }

    /// Direct text children, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.contents.iter().filter_map(Token::as_text)
    }
}
