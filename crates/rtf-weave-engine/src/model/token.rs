//! The token sum type consumed by the interpreter.
//!
//! Tokens arrive from an upstream RTF parser already grouped into a tree
//! ([`Group`]). Every token reports a [`TokenCategory`] for categorical
//! dispatch and a [`TokenKind`] used by [`FormatContext`] to decide which
//! entries replace each other.
//!
//! The composite variants at the end of [`Token`] (cells, borders, links,
//! bookmarks) are synthesized by the interpreter and are never part of the
//! serialized input format.
//!
//! [`FormatContext`]: crate::interpret::FormatContext

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::category::TokenCategory;
use super::composite::{BookmarkToken, BorderToken, CellToken, HyperlinkToken};
use super::group::{Destination, Group};

/// An unrecognized control word, preserved by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlWord {
    pub name: String,
    #[serde(default)]
    pub value: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakKind {
    Paragraph,
    Line,
    Page,
    Section,
    Cell,
    Row,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptPosition {
    Baseline,
    Superscript,
    Subscript,
}

/// Numbering style of a list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberingType {
    Bullet,
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
    None,
}

impl NumberingType {
    pub fn is_ordered(self) -> bool {
        !matches!(self, NumberingType::Bullet | NumberingType::None)
    }
}

/// Which edge a border applies to.
///
/// Paragraph sides (`\brdrt` and friends) and cell sides (`\clbrdrt` and
/// friends) are distinct because they dispatch differently: cell sides are
/// cell formatting and end up inside a [`CellToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderSide {
    Top,
    Bottom,
    Left,
    Right,
    Between,
    Box,
    CellTop,
    CellBottom,
    CellLeft,
    CellRight,
}

impl BorderSide {
    pub fn is_cell(self) -> bool {
        matches!(
            self,
            BorderSide::CellTop | BorderSide::CellBottom | BorderSide::CellLeft | BorderSide::CellRight
        )
    }

    /// Whether `token` describes a property of a border on this side.
    ///
    /// Cell borders have no spacing, so `\brsp` ends a cell border run.
    pub fn accepts(self, token: &Token) -> bool {
        match token {
            Token::BorderStyle(_) | Token::BorderWidth(_) | Token::BorderColor(_) => true,
            Token::BorderSpacing(_) => !self.is_cell(),
            _ => false,
        }
    }

    pub fn category(self) -> TokenCategory {
        if self.is_cell() {
            TokenCategory::CELL_FORMAT
        } else {
            TokenCategory::PARAGRAPH_FORMAT
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderStyle {
    None,
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PictureFormat {
    Png,
    Jpeg,
    Emf,
    Wmf,
    Bmp,
}

impl PictureFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            PictureFormat::Png => "image/png",
            PictureFormat::Jpeg => "image/jpeg",
            PictureFormat::Emf => "image/emf",
            PictureFormat::Wmf => "image/wmf",
            PictureFormat::Bmp => "image/bmp",
        }
    }
}

/// A single node of the parsed RTF tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    // Content and structure
    Text(String),
    Group(Group),
    Destination(Destination),
    /// `\*`: the following destination may be ignored if not understood.
    IgnoreUnrecognized,
    Unrecognized(ControlWord),
    /// `\htmlrtf` (true) / `\htmlrtf0` (false).
    HtmlRtf(bool),
    /// Raw picture bytes (`\bin`).
    Binary(Vec<u8>),

    // Document defaults
    DefaultFontRef(i32),
    DefaultTabWidth(i32),
    HeaderDistance(i32),
    FooterDistance(i32),

    Break(BreakKind),

    // Character formatting
    PlainText,
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Strike(bool),
    Hidden(bool),
    FontRef(i32),
    /// Font size in half points.
    FontSize(u16),
    ForegroundColor(usize),
    BackgroundColor(usize),
    Script(ScriptPosition),

    // Paragraph formatting. Lengths are in twips.
    ParagraphDefault,
    InTable,
    Alignment(TextAlign),
    LeftIndent(i32),
    RightIndent(i32),
    FirstLineIndent(i32),
    SpaceBefore(i32),
    SpaceAfter(i32),
    ListStyleId(i32),
    ListLevelNumber(usize),
    NumberingType(NumberingType),
    /// `\pn`: marks an old-style paragraph numbering group.
    ParagraphNumbering,

    // Borders
    BorderPosition(BorderSide),
    BorderStyle(BorderStyle),
    BorderWidth(i32),
    BorderColor(usize),
    BorderSpacing(i32),

    // Cell formatting
    CellVerticalAlign(VerticalAlign),
    CellBackground(usize),
    CellMergeFirst,
    CellMerge,
    RightCellBoundary(i32),

    // Row formatting
    RowDefaults,
    RowHeight(i32),
    RowLeftOffset(i32),

    // Picture properties
    PictureFormat(PictureFormat),
    PictureWidth(i32),
    PictureHeight(i32),
    PictureGoalWidth(i32),
    PictureGoalHeight(i32),

    // Synthesized by the interpreter
    #[serde(skip)]
    Cell(Rc<CellToken>),
    #[serde(skip)]
    Border(BorderToken),
    #[serde(skip)]
    Hyperlink(HyperlinkToken),
    #[serde(skip)]
    Bookmark(BookmarkToken),
}

/// Identity of a token for replacement purposes in a format context.
///
/// Two tokens of the same kind describe the same property; the newer one
/// wins. Borders are keyed by side so a top border never hides a bottom one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Group,
    Destination,
    IgnoreUnrecognized,
    Unrecognized,
    HtmlRtf,
    Binary,
    DefaultFontRef,
    DefaultTabWidth,
    HeaderDistance,
    FooterDistance,
    Break,
    PlainText,
    Bold,
    Italic,
    Underline,
    Strike,
    Hidden,
    FontRef,
    FontSize,
    ForegroundColor,
    BackgroundColor,
    Script,
    ParagraphDefault,
    InTable,
    Alignment,
    LeftIndent,
    RightIndent,
    FirstLineIndent,
    SpaceBefore,
    SpaceAfter,
    ListStyleId,
    ListLevelNumber,
    NumberingType,
    ParagraphNumbering,
    BorderPosition(BorderSide),
    BorderStyle,
    BorderWidth,
    BorderColor,
    BorderSpacing,
    CellVerticalAlign,
    CellBackground,
    CellMerge,
    RightCellBoundary,
    RowDefaults,
    RowHeight,
    RowLeftOffset,
    PictureFormat,
    PictureWidth,
    PictureHeight,
    PictureGoalWidth,
    PictureGoalHeight,
    Cell,
    Border(BorderSide),
    Hyperlink,
    Bookmark,
}

impl Token {
    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(value.into())
    }

    pub fn group(contents: Vec<Token>) -> Self {
        Token::Group(Group::new(contents))
    }

    pub fn category(&self) -> TokenCategory {
        match self {
            Token::Text(_) => TokenCategory::TEXT,
            Token::Group(_) => TokenCategory::GROUP,
            Token::Destination(dest) => dest.category(),
            Token::IgnoreUnrecognized | Token::Unrecognized(_) | Token::HtmlRtf(_) => {
                TokenCategory::NONE
            }
            Token::ParagraphNumbering => TokenCategory::NONE,
            Token::Binary(_)
            | Token::PictureFormat(_)
            | Token::PictureWidth(_)
            | Token::PictureHeight(_)
            | Token::PictureGoalWidth(_)
            | Token::PictureGoalHeight(_) => TokenCategory::PICTURE,
            Token::DefaultFontRef(_) | Token::DefaultTabWidth(_) => TokenCategory::DOCUMENT,
            Token::HeaderDistance(_) | Token::FooterDistance(_) => TokenCategory::HEADER_TAG,
            Token::Break(_) => TokenCategory::BREAK_TAG,
            Token::PlainText
            | Token::Bold(_)
            | Token::Italic(_)
            | Token::Underline(_)
            | Token::Strike(_)
            | Token::Hidden(_)
            | Token::FontRef(_)
            | Token::FontSize(_)
            | Token::ForegroundColor(_)
            | Token::BackgroundColor(_)
            | Token::Script(_) => TokenCategory::CHARACTER_FORMAT,
            Token::ParagraphDefault
            | Token::InTable
            | Token::Alignment(_)
            | Token::LeftIndent(_)
            | Token::RightIndent(_)
            | Token::FirstLineIndent(_)
            | Token::SpaceBefore(_)
            | Token::SpaceAfter(_)
            | Token::ListStyleId(_)
            | Token::ListLevelNumber(_)
            | Token::NumberingType(_) => TokenCategory::PARAGRAPH_FORMAT,
            Token::BorderPosition(side) => side.category(),
            Token::BorderStyle(_)
            | Token::BorderWidth(_)
            | Token::BorderColor(_)
            | Token::BorderSpacing(_) => TokenCategory::BORDER_PROPERTY,
            Token::CellVerticalAlign(_)
            | Token::CellBackground(_)
            | Token::CellMergeFirst
            | Token::CellMerge
            | Token::RightCellBoundary(_)
            | Token::Cell(_) => TokenCategory::CELL_FORMAT,
            Token::RowDefaults | Token::RowHeight(_) | Token::RowLeftOffset(_) => {
                TokenCategory::ROW_FORMAT
            }
            Token::Border(border) => border.side.category(),
            Token::Hyperlink(_) | Token::Bookmark(_) => TokenCategory::FORMAT,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::Group(_) => TokenKind::Group,
            Token::Destination(_) => TokenKind::Destination,
            Token::IgnoreUnrecognized => TokenKind::IgnoreUnrecognized,
            Token::Unrecognized(_) => TokenKind::Unrecognized,
            Token::HtmlRtf(_) => TokenKind::HtmlRtf,
            Token::Binary(_) => TokenKind::Binary,
            Token::DefaultFontRef(_) => TokenKind::DefaultFontRef,
            Token::DefaultTabWidth(_) => TokenKind::DefaultTabWidth,
            Token::HeaderDistance(_) => TokenKind::HeaderDistance,
            Token::FooterDistance(_) => TokenKind::FooterDistance,
            Token::Break(_) => TokenKind::Break,
            Token::PlainText => TokenKind::PlainText,
            Token::Bold(_) => TokenKind::Bold,
            Token::Italic(_) => TokenKind::Italic,
            Token::Underline(_) => TokenKind::Underline,
            Token::Strike(_) => TokenKind::Strike,
            Token::Hidden(_) => TokenKind::Hidden,
            Token::FontRef(_) => TokenKind::FontRef,
            Token::FontSize(_) => TokenKind::FontSize,
            Token::ForegroundColor(_) => TokenKind::ForegroundColor,
            Token::BackgroundColor(_) => TokenKind::BackgroundColor,
            Token::Script(_) => TokenKind::Script,
            Token::ParagraphDefault => TokenKind::ParagraphDefault,
            Token::InTable => TokenKind::InTable,
            Token::Alignment(_) => TokenKind::Alignment,
            Token::LeftIndent(_) => TokenKind::LeftIndent,
            Token::RightIndent(_) => TokenKind::RightIndent,
            Token::FirstLineIndent(_) => TokenKind::FirstLineIndent,
            Token::SpaceBefore(_) => TokenKind::SpaceBefore,
            Token::SpaceAfter(_) => TokenKind::SpaceAfter,
            Token::ListStyleId(_) => TokenKind::ListStyleId,
            Token::ListLevelNumber(_) => TokenKind::ListLevelNumber,
            Token::NumberingType(_) => TokenKind::NumberingType,
            Token::ParagraphNumbering => TokenKind::ParagraphNumbering,
            Token::BorderPosition(side) => TokenKind::BorderPosition(*side),
            Token::BorderStyle(_) => TokenKind::BorderStyle,
            Token::BorderWidth(_) => TokenKind::BorderWidth,
            Token::BorderColor(_) => TokenKind::BorderColor,
            Token::BorderSpacing(_) => TokenKind::BorderSpacing,
            Token::CellVerticalAlign(_) => TokenKind::CellVerticalAlign,
            Token::CellBackground(_) => TokenKind::CellBackground,
            // First-of-merge and continuation are the same property.
            Token::CellMergeFirst | Token::CellMerge => TokenKind::CellMerge,
            Token::RightCellBoundary(_) => TokenKind::RightCellBoundary,
            Token::RowDefaults => TokenKind::RowDefaults,
            Token::RowHeight(_) => TokenKind::RowHeight,
            Token::RowLeftOffset(_) => TokenKind::RowLeftOffset,
            Token::PictureFormat(_) => TokenKind::PictureFormat,
            Token::PictureWidth(_) => TokenKind::PictureWidth,
            Token::PictureHeight(_) => TokenKind::PictureHeight,
            Token::PictureGoalWidth(_) => TokenKind::PictureGoalWidth,
            Token::PictureGoalHeight(_) => TokenKind::PictureGoalHeight,
            Token::Cell(_) => TokenKind::Cell,
            Token::Border(border) => TokenKind::Border(border.side),
            Token::Hyperlink(_) => TokenKind::Hyperlink,
            Token::Bookmark(_) => TokenKind::Bookmark,
        }
    }

    /// True for control words the upstream parser did not understand.
    ///
    /// Paired with a leading [`Token::IgnoreUnrecognized`] this marks a group
    /// the interpreter drops wholesale.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Token::Unrecognized(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Token::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Row breaks end a table row; a group that directly holds one does too.
    pub fn ends_row(&self) -> bool {
        match self {
            Token::Break(BreakKind::Row) => true,
            Token::Group(group) => group
                .contents
                .iter()
                .any(|t| matches!(t, Token::Break(BreakKind::Row))),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Token::Bold(true), TokenCategory::CHARACTER_FORMAT)]
    #[case(Token::LeftIndent(720), TokenCategory::PARAGRAPH_FORMAT)]
    #[case(Token::RightCellBoundary(2000), TokenCategory::CELL_FORMAT)]
    #[case(Token::BorderPosition(BorderSide::CellTop), TokenCategory::CELL_FORMAT)]
    #[case(Token::BorderPosition(BorderSide::Top), TokenCategory::PARAGRAPH_FORMAT)]
    #[case(Token::RowDefaults, TokenCategory::ROW_FORMAT)]
    #[case(Token::Break(BreakKind::Tab), TokenCategory::BREAK_TAG)]
    #[case(Token::HeaderDistance(720), TokenCategory::HEADER_TAG)]
    #[case(Token::BorderWidth(10), TokenCategory::BORDER_PROPERTY)]
    #[case(Token::ParagraphNumbering, TokenCategory::NONE)]
    fn categories(#[case] token: Token, #[case] expected: TokenCategory) {
        assert_eq!(token.category(), expected);
    }

    #[test]
    fn merge_markers_share_a_kind() {
        assert_eq!(Token::CellMergeFirst.kind(), Token::CellMerge.kind());
    }

    #[test]
    fn border_kinds_are_keyed_by_side() {
        assert_ne!(
            Token::BorderPosition(BorderSide::Top).kind(),
            Token::BorderPosition(BorderSide::Bottom).kind()
        );
    }

    #[test]
    fn cell_sides_reject_spacing() {
        assert!(BorderSide::Top.accepts(&Token::BorderSpacing(20)));
        assert!(!BorderSide::CellTop.accepts(&Token::BorderSpacing(20)));
        assert!(BorderSide::CellTop.accepts(&Token::BorderWidth(15)));
        assert!(!BorderSide::Left.accepts(&Token::Bold(true)));
    }

    #[test]
    fn group_ends_row_when_it_directly_holds_row_break() {
        let trailer = Token::group(vec![Token::RowDefaults, Token::Break(BreakKind::Row)]);
        let nested = Token::group(vec![trailer.clone()]);
        assert!(trailer.ends_row());
        assert!(!nested.ends_row());
        assert!(Token::Break(BreakKind::Row).ends_row());
        assert!(!Token::Break(BreakKind::Cell).ends_row());
    }

    #[test]
    fn deserializes_externally_tagged_json() {
        let token: Token = serde_json::from_str(r#"{"Group":{"contents":[{"Text":"hi"},{"Bold":true},"InTable"]}}"#)
            .unwrap();
        assert_eq!(
            token,
            Token::group(vec![Token::text("hi"), Token::Bold(true), Token::InTable])
        );
    }
}
