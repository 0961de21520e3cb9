//! Capability categories carried by every token.
//!
//! Categories are a bitmask. The composite format categories all include the
//! [`TokenCategory::FORMAT`] bit, so "is this any kind of format token" is a
//! single [`TokenCategory::contains`] test while "is this exactly a paragraph
//! format token" is plain equality.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Bitmask describing what a token is for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenCategory(u32);

impl TokenCategory {
    /// Tokens with no dispatch capability (structural markers, toggles).
    pub const NONE: Self = Self(0);
    /// Anything that changes the active formatting.
    pub const FORMAT: Self = Self(1);
    pub const CHARACTER_FORMAT: Self = Self(Self::FORMAT.0 | 1 << 1);
    pub const PARAGRAPH_FORMAT: Self = Self(Self::FORMAT.0 | 1 << 2);
    pub const CELL_FORMAT: Self = Self(Self::FORMAT.0 | 1 << 3);
    pub const ROW_FORMAT: Self = Self(Self::FORMAT.0 | 1 << 4);
    /// Paragraph, line, page, cell and row breaks plus tabs.
    pub const BREAK_TAG: Self = Self(1 << 5);
    /// Header and footer related tokens, stripped before interpretation.
    pub const HEADER_TAG: Self = Self(1 << 6);
    /// Group destination markers.
    pub const DESTINATION: Self = Self(1 << 7);
    pub const TEXT: Self = Self(1 << 8);
    pub const GROUP: Self = Self(1 << 9);
    /// Document-level defaults (default font, default tab width).
    pub const DOCUMENT: Self = Self(1 << 10);
    pub const PICTURE: Self = Self(1 << 11);
    pub const BORDER_PROPERTY: Self = Self(1 << 12);

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for TokenCategory {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for TokenCategory {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMED: [(TokenCategory, &str); 12] = [
            (TokenCategory::CHARACTER_FORMAT, "CharacterFormat"),
            (TokenCategory::PARAGRAPH_FORMAT, "ParagraphFormat"),
            (TokenCategory::CELL_FORMAT, "CellFormat"),
            (TokenCategory::ROW_FORMAT, "RowFormat"),
            (TokenCategory::BREAK_TAG, "BreakTag"),
            (TokenCategory::HEADER_TAG, "HeaderTag"),
            (TokenCategory::DESTINATION, "Destination"),
            (TokenCategory::TEXT, "Text"),
            (TokenCategory::GROUP, "Group"),
            (TokenCategory::DOCUMENT, "Document"),
            (TokenCategory::PICTURE, "Picture"),
            (TokenCategory::BORDER_PROPERTY, "BorderProperty"),
        ];

        let mut remaining = *self;
        let mut names = Vec::new();
        for (category, name) in NAMED {
            if remaining.contains(category) {
                names.push(name);
                remaining = Self(remaining.0 & !category.0);
            }
        }
        if remaining.contains(Self::FORMAT) && remaining != Self::NONE {
            names.push("Format");
        }
        if names.is_empty() {
            return write!(f, "None");
        }
        write!(f, "{}", names.join(" | "))
    }
}
