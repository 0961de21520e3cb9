//! Recovers HTML that was encapsulated into RTF (`\fromhtml`).
//!
//! Such documents carry the original markup in `\htmltag` groups, with the
//! RTF-only rendering fenced off by `\htmlrtf`. The interpreter already skips
//! the fenced parts, so this writer only has to tell markup from text.

use crate::interpret::FormatContext;
use crate::model::{BreakKind, Font, Picture, Token, TokenKind};
use crate::settings::RenderSettings;

use super::OutputSink;

#[derive(Debug, Default)]
pub struct DeencapsulationWriter {
    settings: RenderSettings,
    out: String,
}

impl DeencapsulationWriter {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            out: String::new(),
        }
    }

    pub fn html(&self) -> &str {
        &self.out
    }

    pub fn into_html(self) -> String {
        self.out
    }
}

impl OutputSink for DeencapsulationWriter {
    fn set_default_font(&mut self, _font: Option<Font>) {}

    fn set_default_tab_width(&mut self, _twips: i32) {}

    fn add_text(&mut self, style: &FormatContext, text: &str) {
        if style.is_html_tag() {
            self.out.push_str(text);
        } else if !matches!(style.last(TokenKind::Hidden), Some(Token::Hidden(true))) {
            html_escape::encode_text_to_string(text, &mut self.out);
        }
    }

    fn add_break(&mut self, _style: &FormatContext, kind: BreakKind, count: usize) {
        match kind {
            BreakKind::Paragraph | BreakKind::Line => self.out.push('\n'),
            BreakKind::Tab => self.out.extend(std::iter::repeat_n('\t', count)),
            _ => {}
        }
    }

    fn add_picture(&mut self, _style: &FormatContext, picture: &Picture) {
        if self.settings.embed_pictures {
            self.out.push_str("<img src=\"");
            self.out.push_str(&picture.data_uri());
            self.out.push_str("\">");
        }
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::interpret;
    use crate::model::{Destination, Document};
    use pretty_assertions::assert_eq;

    fn html_tag(markup: &str) -> Token {
        Token::group(vec![
            Token::IgnoreUnrecognized,
            Token::Destination(Destination::HtmlTag),
            Token::text(markup),
        ])
    }

    fn render(contents: Vec<Token>) -> String {
        let doc = Document {
            has_html: true,
            ..Document::new(contents)
        };
        let mut writer = DeencapsulationWriter::new(RenderSettings::default());
        interpret(&doc, &mut writer);
        writer.into_html()
    }

    #[test]
    fn markup_is_verbatim_and_text_is_escaped() {
        let html = render(vec![
            html_tag("<p class=\"x\">"),
            Token::text("a < b"),
            html_tag("</p>"),
        ]);
        assert_eq!(html, "<p class=\"x\">a &lt; b</p>");
    }

    #[test]
    fn rtf_only_content_is_skipped() {
        let html = render(vec![
            html_tag("<br>"),
            Token::HtmlRtf(true),
            Token::Break(BreakKind::Paragraph),
            Token::text("rtf only"),
            Token::HtmlRtf(false),
            Token::text("kept"),
            Token::Break(BreakKind::Line),
            Token::Break(BreakKind::Tab),
            Token::Break(BreakKind::Tab),
            Token::text("x"),
        ]);
        assert_eq!(html, "<br>kept\n\t\tx");
    }
}
