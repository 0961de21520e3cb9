use std::rc::Rc;

use super::token::Token;

/// One table row: the flat token run from `\trowd` through `\row`.
///
/// Rows are interpreted as scopes of their own, like groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Position of the row within its table.
    pub index: usize,
    pub contents: Vec<Token>,
}

impl Row {
    /// `\trleft` of this row in twips, 0 when unset.
    pub fn left_offset(&self) -> i32 {
        self.contents
            .iter()
            .rev()
            .find_map(|token| match token {
                Token::RowLeftOffset(offset) => Some(*offset),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Number of `\cellx` boundaries declared by the row.
    pub fn declared_cells(&self) -> usize {
        self.contents
            .iter()
            .filter(|token| matches!(token, Token::RightCellBoundary(_)))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub rows: Vec<Rc<Row>>,
}
