use crate::model::{Document, Token, TokenCategory, TokenKind};

use super::context::FormatContext;

/// Kinds a list level never contributes: indentation stays with the
/// paragraph that references the list.
const DEFERRED_TO_PARAGRAPH: [TokenKind; 2] = [TokenKind::FirstLineIndent, TokenKind::LeftIndent];

/// Resolves a pending list-style reference in `style` against `doc`.
///
/// The paragraph formatting of the referenced level is merged in (local
/// entries win), and the `\ls` / `\ilvl` references are put back so later
/// content in the same scope resolves the same way.
pub fn resolve_list_style<'c>(doc: &Document, style: &'c mut FormatContext) -> &'c mut FormatContext {
    let Some(style_id) = style.remove_last(TokenKind::ListStyleId) else {
        return style;
    };
    let Token::ListStyleId(id) = style_id else {
        style.add(style_id);
        return style;
    };
    let Some(list_style) = doc.list_styles.get(&id) else {
        log::debug!("list style {id} is not defined; leaving paragraph unnumbered");
        style.add(style_id);
        return style;
    };

    let level_number = style
        .remove_last(TokenKind::ListLevelNumber)
        .unwrap_or(Token::ListLevelNumber(0));
    let level = match level_number {
        Token::ListLevelNumber(level) => level,
        _ => 0,
    };

    match list_style.level(level) {
        Some(definition) => style.add_new(
            definition
                .tokens
                .iter()
                .filter(|t| t.category() == TokenCategory::PARAGRAPH_FORMAT)
                .cloned(),
            &DEFERRED_TO_PARAGRAPH,
        ),
        None => log::debug!("list style {id} has no level {level}"),
    }

    style.add(style_id);
    style.add(level_number);
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListLevel, ListStyle, NumberingType, TextAlign};
    use pretty_assertions::assert_eq;

    fn doc_with_style(id: i32, levels: Vec<Vec<Token>>) -> Document {
        let mut doc = Document::default();
        doc.list_styles.insert(
            id,
            ListStyle {
                levels: levels.into_iter().map(|tokens| ListLevel { tokens }).collect(),
            },
        );
        doc
    }

    fn context(tokens: Vec<Token>) -> FormatContext {
        let mut ctx = FormatContext::new();
        for token in tokens {
            ctx.add(token);
        }
        ctx
    }

    #[test]
    fn merges_level_paragraph_format_and_keeps_references() {
        let doc = doc_with_style(
            5,
            vec![
                vec![],
                vec![],
                vec![
                    Token::NumberingType(NumberingType::Decimal),
                    Token::Alignment(TextAlign::Justify),
                    Token::FirstLineIndent(-360),
                    Token::LeftIndent(1440),
                    Token::Bold(true),
                ],
            ],
        );
        let mut ctx = context(vec![Token::ListStyleId(5), Token::ListLevelNumber(2)]);

        resolve_list_style(&doc, &mut ctx);

        assert_eq!(ctx.list_style_id(), Some(5));
        assert_eq!(ctx.list_level(), 2);
        assert_eq!(
            ctx.last(TokenKind::NumberingType),
            Some(&Token::NumberingType(NumberingType::Decimal))
        );
        assert!(ctx.contains(TokenKind::Alignment));
        assert!(!ctx.contains(TokenKind::FirstLineIndent));
        assert!(!ctx.contains(TokenKind::LeftIndent));
        // Character formatting in a level definition is not paragraph formatting.
        assert!(!ctx.contains(TokenKind::Bold));
    }

    #[test]
    fn local_paragraph_settings_win() {
        let doc = doc_with_style(1, vec![vec![Token::Alignment(TextAlign::Right)]]);
        let mut ctx = context(vec![Token::Alignment(TextAlign::Center), Token::ListStyleId(1)]);

        resolve_list_style(&doc, &mut ctx);

        assert_eq!(
            ctx.last(TokenKind::Alignment),
            Some(&Token::Alignment(TextAlign::Center))
        );
    }

    #[test]
    fn missing_level_number_defaults_to_zero() {
        let doc = doc_with_style(1, vec![vec![Token::NumberingType(NumberingType::Bullet)]]);
        let mut ctx = context(vec![Token::ListStyleId(1)]);

        resolve_list_style(&doc, &mut ctx);

        assert_eq!(ctx.list_level(), 0);
        assert_eq!(ctx.last(TokenKind::ListLevelNumber), Some(&Token::ListLevelNumber(0)));
        assert!(ctx.contains(TokenKind::NumberingType));
    }

    #[test]
    fn unknown_style_passes_through() {
        let doc = Document::default();
        let mut ctx = context(vec![Token::ListStyleId(9), Token::ListLevelNumber(1)]);
        let before = ctx.clone();

        resolve_list_style(&doc, &mut ctx);

        assert_eq!(ctx.list_style_id(), Some(9));
        assert_eq!(ctx.list_level(), 1);
        assert_eq!(ctx.len(), before.len());
    }

    #[test]
    fn out_of_range_level_merges_nothing() {
        let doc = doc_with_style(1, vec![vec![Token::NumberingType(NumberingType::Bullet)]]);
        let mut ctx = context(vec![Token::ListStyleId(1), Token::ListLevelNumber(4)]);

        resolve_list_style(&doc, &mut ctx);

        assert!(!ctx.contains(TokenKind::NumberingType));
        assert_eq!(ctx.list_level(), 4);
    }

    #[test]
    fn resolution_is_repeatable() {
        let doc = doc_with_style(1, vec![vec![Token::SpaceAfter(120)]]);
        let mut ctx = context(vec![Token::ListStyleId(1)]);

        resolve_list_style(&doc, &mut ctx);
        let once = ctx.clone();
        resolve_list_style(&doc, &mut ctx);

        assert_eq!(ctx, once);
    }

    #[test]
    fn no_reference_leaves_context_alone() {
        let doc = doc_with_style(1, vec![vec![Token::SpaceAfter(120)]]);
        let mut ctx = context(vec![Token::Bold(true)]);
        resolve_list_style(&doc, &mut ctx);
        assert_eq!(ctx, context(vec![Token::Bold(true)]));
    }
}
