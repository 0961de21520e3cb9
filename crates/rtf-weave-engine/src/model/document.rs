use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Nil,
    Roman,
    Swiss,
    Modern,
    Script,
    Decor,
    Tech,
    Bidi,
}

impl FontFamily {
    /// Generic CSS family used as the last fallback.
    pub fn css_generic(self) -> Option<&'static str> {
        match self {
            FontFamily::Roman => Some("serif"),
            FontFamily::Swiss => Some("sans-serif"),
            FontFamily::Modern => Some("monospace"),
            FontFamily::Script => Some("cursive"),
            FontFamily::Decor => Some("fantasy"),
            FontFamily::Nil | FontFamily::Tech | FontFamily::Bidi => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub family: FontFamily,
}

/// The document font table, in declaration order.
///
/// Ids are unique; the first declared font is the fallback when a default
/// font reference does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontTable {
    fonts: Vec<Font>,
}

impl FontTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a font, replacing any earlier font with the same id in place.
    pub fn insert(&mut self, font: Font) {
        match self.fonts.iter_mut().find(|f| f.id == font.id) {
            Some(existing) => *existing = font,
            None => self.fonts.push(font),
        }
    }

    pub fn get(&self, id: i32) -> Option<&Font> {
        self.fonts.iter().find(|f| f.id == id)
    }

    pub fn first(&self) -> Option<&Font> {
        self.fonts.first()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl FromIterator<Font> for FontTable {
    fn from_iter<I: IntoIterator<Item = Font>>(iter: I) -> Self {
        let mut table = FontTable::new();
        for font in iter {
            table.insert(font);
        }
        table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Formatting for one level of a list style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListLevel {
    #[serde(default)]
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListStyle {
    #[serde(default)]
    pub levels: Vec<ListLevel>,
}

impl ListStyle {
    pub fn level(&self, number: usize) -> Option<&ListLevel> {
        self.levels.get(number)
    }
}

/// A parsed RTF document, ready for interpretation.
///
/// Everything here is produced upstream and stays read-only while the
/// interpreter runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub contents: Vec<Token>,
    #[serde(default)]
    pub fonts: FontTable,
    /// Color table; index 0 is conventionally the "auto" color.
    #[serde(default)]
    pub colors: Vec<Option<Color>>,
    /// List styles keyed by `\ls` id.
    #[serde(default)]
    pub list_styles: HashMap<i32, ListStyle>,
    /// Set when the content is an encapsulated HTML document (`\fromhtml`).
    #[serde(default)]
    pub has_html: bool,
}

impl Document {
    pub fn new(contents: Vec<Token>) -> Self {
        Self {
            contents,
            ..Self::default()
        }
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied().flatten()
    }
}
