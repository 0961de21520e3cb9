//! The ledger of formatting active at one nesting scope.

use std::rc::Rc;

use crate::model::{
    BookmarkToken, BorderSide, BorderToken, CellToken, Destination, HyperlinkToken, Token,
    TokenCategory, TokenKind,
};

/// Formatting tokens active in one scope, oldest first.
///
/// Scanning from the newest entry, the first token of a kind is the one in
/// effect. A child scope starts as a clone of its parent and never shares
/// storage with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatContext {
    tokens: Vec<Token>,
}

impl FormatContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `token`, replacing any entry of the same kind.
    ///
    /// Reset tokens are not stored; they clear a whole category instead:
    /// `\pard` clears paragraph formatting, `\plain` clears character
    /// formatting, `\trowd` clears row and cell formatting.
    pub fn add(&mut self, token: Token) {
        match token {
            Token::ParagraphDefault => {
                self.remove_category(TokenCategory::PARAGRAPH_FORMAT);
            }
            Token::PlainText => {
                self.remove_category(TokenCategory::CHARACTER_FORMAT);
            }
            Token::RowDefaults => {
                self.remove_category(TokenCategory::ROW_FORMAT);
                self.remove_category(TokenCategory::CELL_FORMAT);
            }
            token => {
                let kind = token.kind();
                self.tokens.retain(|t| t.kind() != kind);
                self.tokens.push(token);
            }
        }
    }

    /// Merges `tokens`, skipping any whose kind is already present or listed
    /// in `excluded`.
    pub fn add_new<I>(&mut self, tokens: I, excluded: &[TokenKind])
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            let kind = token.kind();
            if excluded.contains(&kind) || self.contains(kind) {
                continue;
            }
            self.add(token);
        }
    }

    /// Removes and returns the newest entry of `kind`.
    pub fn remove_last(&mut self, kind: TokenKind) -> Option<Token> {
        let index = self.tokens.iter().rposition(|t| t.kind() == kind)?;
        Some(self.tokens.remove(index))
    }

    pub fn last(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens.iter().rev().find(|t| t.kind() == kind)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.last(kind).is_some()
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn remove_category(&mut self, category: TokenCategory) {
        self.tokens.retain(|t| t.category() != category);
    }

    pub fn in_table(&self) -> bool {
        self.contains(TokenKind::InTable)
    }

    pub fn set_in_table(&mut self, in_table: bool) {
        if in_table {
            self.add(Token::InTable);
        } else {
            self.tokens.retain(|t| !matches!(t, Token::InTable));
        }
    }

    /// The newest assembled table cell, the tail of the current row's chain.
    pub fn last_cell(&self) -> Option<&Rc<CellToken>> {
        self.tokens.iter().rev().find_map(|t| match t {
            Token::Cell(cell) => Some(cell),
            _ => None,
        })
    }

    pub fn hyperlink(&self) -> Option<&HyperlinkToken> {
        self.tokens.iter().rev().find_map(|t| match t {
            Token::Hyperlink(link) => Some(link),
            _ => None,
        })
    }

    pub fn bookmark(&self) -> Option<&BookmarkToken> {
        self.tokens.iter().rev().find_map(|t| match t {
            Token::Bookmark(bookmark) => Some(bookmark),
            _ => None,
        })
    }

    pub fn border(&self, side: BorderSide) -> Option<&BorderToken> {
        self.tokens.iter().rev().find_map(|t| match t {
            Token::Border(border) if border.side == side => Some(border),
            _ => None,
        })
    }

    /// True inside an embedded `\htmltag` group.
    pub fn is_html_tag(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, Token::Destination(Destination::HtmlTag)))
    }

    pub fn list_style_id(&self) -> Option<i32> {
        self.tokens.iter().rev().find_map(|t| match t {
            Token::ListStyleId(id) => Some(*id),
            _ => None,
        })
    }

    pub fn list_level(&self) -> usize {
        self.tokens
            .iter()
            .rev()
            .find_map(|t| match t {
                Token::ListLevelNumber(level) => Some(*level),
                _ => None,
            })
            .unwrap_or(0)
    }
}
