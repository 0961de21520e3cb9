//! Composite tokens synthesized by the interpreter from runs of primitive
//! tokens or from whole destination groups.

use std::rc::Rc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::group::Group;
use super::table::Row;
use super::token::{BorderSide, BorderStyle, PictureFormat, Token, VerticalAlign};

/// One border edge with its collected properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderToken {
    pub side: BorderSide,
    pub style: Option<BorderStyle>,
    /// Width in twips.
    pub width: Option<i32>,
    /// Index into the document color table.
    pub color: Option<usize>,
    pub spacing: Option<i32>,
}

impl BorderToken {
    pub fn new(side: BorderSide) -> Self {
        Self {
            side,
            style: None,
            width: None,
            color: None,
            spacing: None,
        }
    }

    /// Absorbs `token` if it is a property of this border.
    ///
    /// Returns `false`, leaving the border untouched, when the token is not.
    pub fn add(&mut self, token: &Token) -> bool {
        if !self.side.accepts(token) {
            return false;
        }
        match token {
            Token::BorderStyle(style) => self.style = Some(*style),
            Token::BorderWidth(width) => self.width = Some(*width),
            Token::BorderColor(color) => self.color = Some(*color),
            Token::BorderSpacing(spacing) => self.spacing = Some(*spacing),
            _ => return false,
        }
        true
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.style, None | Some(BorderStyle::None))
    }
}

/// Vertical merge state of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellMerge {
    #[default]
    None,
    /// `\clvmgf`: first cell of a vertically merged range.
    First,
    /// `\clvmrg`: continuation of the range above.
    Continue,
}

/// A table cell definition, assembled from a `\cl...` run ending at `\cellx`.
///
/// Cells of a row form a chain through [`CellToken::previous`]; the last cell
/// of the chain reaches every cell to its left.
#[derive(Debug, Clone, PartialEq)]
pub struct CellToken {
    pub row: Option<Rc<Row>>,
    pub previous: Option<Rc<CellToken>>,
    /// Right edge of the cell in twips (`\cellx`).
    pub right_boundary: Option<i32>,
    pub vertical_align: Option<VerticalAlign>,
    /// Index into the document color table.
    pub background: Option<usize>,
    pub merge: CellMerge,
    pub borders: Vec<BorderToken>,
}

impl CellToken {
    pub fn new(row: Option<Rc<Row>>, previous: Option<Rc<CellToken>>) -> Self {
        Self {
            row,
            previous,
            right_boundary: None,
            vertical_align: None,
            background: None,
            merge: CellMerge::None,
            borders: Vec::new(),
        }
    }

    /// Zero-based column of this cell within its row.
    pub fn index(&self) -> usize {
        let mut index = 0;
        let mut cursor = self.previous.as_ref();
        while let Some(cell) = cursor {
            index += 1;
            cursor = cell.previous.as_ref();
        }
        index
    }

    /// Every cell of the chain ending at `self`, left to right.
    pub fn chain(self: &Rc<Self>) -> Vec<Rc<CellToken>> {
        let mut cells = vec![Rc::clone(self)];
        let mut cursor = self.previous.clone();
        while let Some(cell) = cursor {
            cursor = cell.previous.clone();
            cells.push(cell);
        }
        cells.reverse();
        cells
    }

    /// Left edge in twips: the previous cell's right edge, else the row offset.
    pub fn left_boundary(&self) -> i32 {
        match &self.previous {
            Some(previous) => previous.right_boundary.unwrap_or_else(|| previous.left_boundary()),
            None => self.row.as_ref().map_or(0, |row| row.left_offset()),
        }
    }

    /// Width in twips, when the right boundary is known.
    pub fn width(&self) -> Option<i32> {
        self.right_boundary
            .map(|right| right.saturating_sub(self.left_boundary()).max(0))
    }

    pub fn border(&self, side: BorderSide) -> Option<&BorderToken> {
        self.borders.iter().rev().find(|b| b.side == side)
    }
}

/// A `HYPERLINK` field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HyperlinkToken {
    pub url: Option<String>,
    /// `\l`: bookmark inside the current document.
    pub anchor: Option<String>,
    /// `\o`: screen tip.
    pub title: Option<String>,
    /// `\t`: target frame.
    pub target: Option<String>,
}

impl HyperlinkToken {
    /// Builds a link from the field arguments following `HYPERLINK`.
    pub fn from_arguments<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut link = HyperlinkToken::default();
        let mut arguments = arguments.into_iter().map(Into::into);
        while let Some(argument) = arguments.next() {
            if !argument.starts_with('\\') {
                if link.url.is_none() {
                    link.url = Some(argument);
                }
                continue;
            }
            match argument.as_str() {
                "\\l" => link.anchor = arguments.next(),
                "\\o" => link.title = arguments.next(),
                "\\t" => link.target = arguments.next(),
                // \h, \m, \n take no argument
                _ => {}
            }
        }
        link
    }

    /// The `href` this link points at, combining url and local anchor.
    pub fn href(&self) -> Option<String> {
        match (&self.url, &self.anchor) {
            (Some(url), Some(anchor)) => Some(format!("{url}#{anchor}")),
            (Some(url), None) => Some(url.clone()),
            (None, Some(anchor)) => Some(format!("#{anchor}")),
            (None, None) => None,
        }
    }
}

/// Start or end of a named bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkToken {
    pub start: bool,
    pub id: Option<String>,
}

/// An embedded picture. The payload is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Picture {
    pub format: Option<PictureFormat>,
    /// Native size (`\picw`, `\pich`), in pixels for bitmaps.
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Desired display size (`\picwgoal`, `\pichgoal`) in twips.
    pub goal_width: Option<i32>,
    pub goal_height: Option<i32>,
    pub data: Vec<u8>,
}

impl Picture {
    pub fn from_group(group: &Group) -> Self {
        let mut picture = Picture::default();
        let mut hex = String::new();
        for token in &group.contents {
            match token {
                Token::PictureFormat(format) => picture.format = Some(*format),
                Token::PictureWidth(width) => picture.width = Some(*width),
                Token::PictureHeight(height) => picture.height = Some(*height),
                Token::PictureGoalWidth(width) => picture.goal_width = Some(*width),
                Token::PictureGoalHeight(height) => picture.goal_height = Some(*height),
                Token::Binary(bytes) => picture.data.extend_from_slice(bytes),
                Token::Text(text) => hex.push_str(text),
                _ => {}
            }
        }
        picture.data.extend(decode_hex(&hex));
        picture
    }

    pub fn mime_type(&self) -> &'static str {
        self.format
            .map_or("application/octet-stream", PictureFormat::mime_type)
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.data))
    }

    /// Display size in points, from the goal size when present.
    pub fn display_size_pt(&self) -> (Option<f32>, Option<f32>) {
        let to_pt = |twips: i32| twips as f32 / 20.0;
        (self.goal_width.map(to_pt), self.goal_height.map(to_pt))
    }
}

/// Decodes hex digit pairs, skipping whitespace and any stray characters.
fn decode_hex(text: &str) -> Vec<u8> {
    let digits: Vec<u8> = text
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();
    digits
        .chunks_exact(2)
        .map(|pair| pair[0] << 4 | pair[1])
        .collect()
}
