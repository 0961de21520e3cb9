use std::rc::Rc;

use crate::model::{Row, Table, Token, TokenCategory};

use super::cursor::TokenCursor;

/// Reassembles a flat run of table tokens into rows.
///
/// `tokens` must start at a `\trowd` marker. Each row runs from its `\trowd`
/// through the token that ends it: a `\row` break, or a group directly
/// holding one. Another row follows only when a `\trowd` can be reached
/// through format tokens alone; those format tokens open the next row.
///
/// Returns the table and the number of tokens consumed.
pub fn build_table(tokens: &[Token]) -> (Table, usize) {
    let mut cursor = TokenCursor::new(tokens);
    let mut table = Table::default();

    loop {
        let row_start = cursor.consumed();
        let Some(row_defaults) = next_row_start(&cursor) else {
            break;
        };
        cursor.reset(row_defaults);
        // The `\trowd` itself, then everything through the row end.
        cursor.bump();
        cursor.bump_through(Token::ends_row);
        table.rows.push(Rc::new(Row {
            index: table.rows.len(),
            contents: cursor.consumed_since(row_start).to_vec(),
        }));
    }

    log::trace!(
        "assembled table with {} rows from {} tokens",
        table.rows.len(),
        cursor.consumed()
    );
    (table, cursor.consumed())
}

/// Local index of the `\trowd` opening the next row, if one is reachable.
fn next_row_start(cursor: &TokenCursor<'_>) -> Option<usize> {
    let mut ahead = cursor.clone();
    ahead.bump_while(|token| {
        !matches!(token, Token::RowDefaults) && token.category().contains(TokenCategory::FORMAT)
    });
    match ahead.peek() {
        Some(Token::RowDefaults) => Some(ahead.consumed()),
        _ => None,
    }
}
