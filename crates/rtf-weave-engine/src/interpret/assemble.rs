//! Assemblers turning a run of primitive tokens into one composite token.
//!
//! Both take the run starting at the token that triggered them and return the
//! composite together with the number of tokens consumed, so callers advance
//! their own cursor explicitly.

use std::rc::Rc;

use crate::model::{BorderToken, CellMerge, CellToken, Row, Token};

use super::cursor::TokenCursor;

/// Builds a border from a border-position token and the property tokens that
/// follow it.
///
/// Consumption stops at the first token the side does not accept; that token
/// is left for the caller. Returns `None` when `tokens` does not start with a
/// border position.
pub fn assemble_border(tokens: &[Token]) -> Option<(BorderToken, usize)> {
    let mut cursor = TokenCursor::new(tokens);
    let Some(Token::BorderPosition(side)) = cursor.bump() else {
        return None;
    };
    let mut border = BorderToken::new(*side);
    cursor.bump_while(|token| border.add(token));
    Some((border, cursor.consumed()))
}

/// Builds a cell from the run beginning at a cell-format token and ending at
/// its `\cellx` boundary, inclusive. A run with no boundary extends to the end
/// of `tokens`.
pub fn assemble_cell(
    tokens: &[Token],
    row: Option<&Rc<Row>>,
    previous: Option<&Rc<CellToken>>,
) -> (CellToken, usize) {
    let mut cell = CellToken::new(row.cloned(), previous.cloned());
    let mut cursor = TokenCursor::new(tokens);

    while let Some(token) = cursor.peek() {
        if let Some((border, consumed)) = assemble_border(&tokens[cursor.consumed()..]) {
            cell.borders.push(border);
            cursor.reset(cursor.consumed() + consumed);
            continue;
        }
        cursor.bump();
        match token {
            Token::CellVerticalAlign(align) => cell.vertical_align = Some(*align),
            Token::CellBackground(color) => cell.background = Some(*color),
            Token::CellMergeFirst => cell.merge = CellMerge::First,
            Token::CellMerge => cell.merge = CellMerge::Continue,
            Token::RightCellBoundary(boundary) => {
                cell.right_boundary = Some(*boundary);
                break;
            }
            _ => {}
        }
    }

    (cell, cursor.consumed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderSide, BorderStyle, VerticalAlign};
    use pretty_assertions::assert_eq;

    #[test]
    fn border_consumes_accepted_properties_only() {
        let tokens = vec![
            Token::BorderPosition(BorderSide::Bottom),
            Token::BorderStyle(BorderStyle::Single),
            Token::BorderWidth(15),
            Token::BorderSpacing(40),
            Token::text("after"),
        ];
        let (border, consumed) = assemble_border(&tokens).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(border.side, BorderSide::Bottom);
        assert_eq!(border.width, Some(15));
        assert_eq!(border.spacing, Some(40));
    }

    #[test]
    fn cell_border_stops_at_spacing() {
        let tokens = vec![
            Token::BorderPosition(BorderSide::CellLeft),
            Token::BorderWidth(10),
            Token::BorderSpacing(40),
        ];
        let (_, consumed) = assemble_border(&tokens).unwrap();
        assert_eq!(consumed, 2);
    }

    #[test]
    fn border_without_properties_consumes_position() {
        let tokens = vec![Token::BorderPosition(BorderSide::Box), Token::Bold(true)];
        let (border, consumed) = assemble_border(&tokens).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(border, BorderToken::new(BorderSide::Box));
        assert!(assemble_border(&tokens[1..]).is_none());
    }

    #[test]
    fn cell_run_ends_at_boundary_inclusive() {
        let tokens = vec![
            Token::CellVerticalAlign(VerticalAlign::Center),
            Token::BorderPosition(BorderSide::CellTop),
            Token::BorderStyle(BorderStyle::Single),
            Token::BorderWidth(10),
            Token::CellBackground(3),
            Token::RightCellBoundary(2880),
            Token::RightCellBoundary(5760),
        ];
        let (cell, consumed) = assemble_cell(&tokens, None, None);

        assert_eq!(consumed, 6);
        assert_eq!(cell.vertical_align, Some(VerticalAlign::Center));
        assert_eq!(cell.background, Some(3));
        assert_eq!(cell.right_boundary, Some(2880));
        assert_eq!(cell.borders.len(), 1);
        assert_eq!(cell.borders[0].width, Some(10));
    }

    #[test]
    fn cell_links_previous_and_row() {
        let row = Rc::new(Row::default());
        let first = Rc::new(assemble_cell(&[Token::RightCellBoundary(1000)], Some(&row), None).0);
        let (second, consumed) = assemble_cell(
            &[Token::CellMergeFirst, Token::RightCellBoundary(2000)],
            Some(&row),
            Some(&first),
        );

        assert_eq!(consumed, 2);
        assert_eq!(second.previous.as_ref(), Some(&first));
        assert_eq!(second.row.as_ref(), Some(&row));
        assert_eq!(second.merge, CellMerge::First);
        assert_eq!(second.index(), 1);
        assert_eq!(second.width(), Some(1000));
    }

    #[test]
    fn unterminated_cell_run_takes_the_rest() {
        let tokens = vec![Token::CellMerge, Token::text("x")];
        let (cell, consumed) = assemble_cell(&tokens, None, None);
        assert_eq!(consumed, 2);
        assert_eq!(cell.right_boundary, None);
        assert_eq!(cell.merge, CellMerge::Continue);
    }
}
