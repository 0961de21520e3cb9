//! # Document Model
//!
//! The token tree handed to the interpreter by an upstream RTF parser, plus
//! the composite tokens the interpreter synthesizes while walking it.
//!
//! ## Modules
//!
//! - **`category`**: `TokenCategory` capability bitmask used for dispatch
//! - **`token`**: the `Token` sum type, `TokenKind`, and payload enums
//! - **`group`**: `Group` and its `Destination`
//! - **`document`**: `Document` with its font, color and list-style tables
//! - **`composite`**: cells, borders, hyperlinks, bookmarks and pictures
//! - **`table`**: `Table` and `Row` produced by table reassembly

pub mod category;
pub mod composite;
pub mod document;
pub mod group;
pub mod table;
pub mod token;

pub use category::TokenCategory;
pub use composite::{BookmarkToken, BorderToken, CellMerge, CellToken, HyperlinkToken, Picture};
pub use document::{Color, Document, Font, FontFamily, FontTable, ListLevel, ListStyle};
pub use group::{Destination, Group};
pub use table::{Row, Table};
pub use token::{
    BorderSide, BorderStyle, BreakKind, ControlWord, NumberingType, PictureFormat, ScriptPosition,
    TextAlign, Token, TokenKind, VerticalAlign,
};
