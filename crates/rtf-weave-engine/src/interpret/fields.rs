//! Field instructions, bookmarks and the tokens synthesized from them.

use crate::model::{BookmarkToken, Group, HyperlinkToken, Token, TokenCategory};

const HYPERLINK: &str = "HYPERLINK";

/// The instruction text of a `\fldinst` group.
///
/// Word usually wraps the instruction in a nested plain group, so the last
/// such group carrying text wins. A bare `{\*\fldinst TEXT}` has no nested
/// group and exactly three children; its third child is the text.
pub fn instruction_text(group: &Group) -> Option<String> {
    let nested = group
        .groups()
        .filter(|g| g.destination().is_none())
        .filter_map(|g| g.texts().next())
        .last()
        .map(str::trim)
        .filter(|text| !text.is_empty());
    if let Some(text) = nested {
        return Some(text.to_string());
    }

    if group.groups().next().is_none() && group.contents.len() == 3 {
        return group.contents[2]
            .as_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
    }
    None
}

/// Splits field arguments on whitespace; double quotes group words.
pub fn split_arguments(text: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in text.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    arguments.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        arguments.push(current);
    }
    arguments
}

/// A hyperlink for a field-instructions group, if it holds a `HYPERLINK` field.
pub fn hyperlink(group: &Group) -> Option<HyperlinkToken> {
    let Some(text) = instruction_text(group) else {
        log::debug!("field instructions without text; no hyperlink");
        return None;
    };
    let mut arguments = split_arguments(&text).into_iter();
    match arguments.next() {
        Some(word) if word == HYPERLINK => Some(HyperlinkToken::from_arguments(arguments)),
        other => {
            log::trace!("ignoring field {other:?}");
            None
        }
    }
}

/// A bookmark boundary; the id is the group's first text, trimmed.
pub fn bookmark(group: &Group, start: bool) -> BookmarkToken {
    let id = group
        .texts()
        .next()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);
    BookmarkToken { start, id }
}

/// Paragraph-format children of an old-style `\pn` numbering group.
pub fn numbering_formats(group: &Group) -> impl Iterator<Item = &Token> {
    group
        .contents
        .iter()
        .filter(|t| t.category() == TokenCategory::PARAGRAPH_FORMAT)
}
