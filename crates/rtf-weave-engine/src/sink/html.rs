//! Renders the event stream as HTML with inline CSS.
//!
//! Paragraph properties are taken from the first content of a paragraph.
//! Character runs become `<span>`s only when they carry formatting, and a
//! hyperlink stays open across consecutive runs that share it.

use std::collections::HashSet;

use crate::interpret::FormatContext;
use crate::model::{
    BookmarkToken, BorderSide, BorderStyle, BorderToken, BreakKind, CellToken, Document, Font,
    HyperlinkToken, NumberingType, Picture, ScriptPosition, TextAlign, Token, TokenKind,
    VerticalAlign,
};
use crate::settings::RenderSettings;

use super::OutputSink;

/// `\deftab` when the document does not set one.
const DEFAULT_TAB_TWIPS: i32 = 720;

const PARAGRAPH_BORDERS: [(BorderSide, &str); 5] = [
    (BorderSide::Box, "border"),
    (BorderSide::Top, "border-top"),
    (BorderSide::Bottom, "border-bottom"),
    (BorderSide::Left, "border-left"),
    (BorderSide::Right, "border-right"),
];

const CELL_BORDERS: [(BorderSide, &str); 4] = [
    (BorderSide::CellTop, "border-top"),
    (BorderSide::CellBottom, "border-bottom"),
    (BorderSide::CellLeft, "border-left"),
    (BorderSide::CellRight, "border-right"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Paragraph,
    ListItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenList {
    numbering: NumberingType,
    style_id: i32,
    level: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct OpenTable {
    row_open: bool,
    cell_open: bool,
    cell_index: usize,
}

pub struct HtmlWriter<'d> {
    doc: &'d Document,
    settings: RenderSettings,
    out: String,
    default_font: Option<Font>,
    tab_width: i32,
    table: Option<OpenTable>,
    list: Option<OpenList>,
    block: Option<Block>,
    block_empty: bool,
    /// `href` of the open anchor.
    link: Option<String>,
    /// CSS of the open span.
    span: Option<String>,
    bookmarks: HashSet<String>,
    closed: bool,
}

impl<'d> HtmlWriter<'d> {
    /// The document supplies the font and color tables.
    pub fn new(doc: &'d Document, settings: RenderSettings) -> Self {
        Self {
            doc,
            settings,
            out: String::new(),
            default_font: None,
            tab_width: DEFAULT_TAB_TWIPS,
            table: None,
            list: None,
            block: None,
            block_empty: true,
            link: None,
            span: None,
            bookmarks: HashSet::new(),
            closed: false,
        }
    }

    pub fn html(&self) -> &str {
        &self.out
    }

    pub fn into_html(self) -> String {
        self.out
    }

    fn open_block(&mut self, style: &FormatContext) {
        let in_table = style.in_table();
        if in_table {
            self.open_cell(style);
        } else {
            self.close_table();
        }
        if self.block.is_some() {
            return;
        }

        let list = list_of(style).filter(|_| !in_table);
        match list {
            Some(list) => {
                self.open_list(list);
                self.out.push_str("<li");
                self.block = Some(Block::ListItem);
            }
            None => {
                self.close_list();
                self.out.push_str("<p");
                self.block = Some(Block::Paragraph);
            }
        }
        let css = self.paragraph_css(style);
        self.out.push_str(&style_attribute(&css));
        self.out.push('>');
        self.block_empty = true;
    }

    fn close_block(&mut self) {
        self.close_inline();
        match self.block.take() {
            Some(Block::Paragraph) => self.out.push_str("</p>"),
            Some(Block::ListItem) => self.out.push_str("</li>"),
            None => {}
        }
    }

    fn open_list(&mut self, list: OpenList) {
        if self.list == Some(list) {
            return;
        }
        self.close_list();
        let tag = if list.numbering.is_ordered() { "ol" } else { "ul" };
        let css = vec![format!("list-style-type:{}", list_style_type(list.numbering))];
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(&style_attribute(&css));
        self.out.push('>');
        self.list = Some(list);
    }

    fn close_list(&mut self) {
        let Some(list) = self.list else {
            return;
        };
        self.close_block();
        self.out
            .push_str(if list.numbering.is_ordered() { "</ol>" } else { "</ul>" });
        self.list = None;
    }

    /// Makes sure a table, row and cell are open for `style`.
    fn open_cell(&mut self, style: &FormatContext) {
        let mut table = match self.table {
            Some(table) => table,
            None => {
                self.close_block();
                self.close_list();
                self.out.push_str("<table style=\"border-collapse:collapse\">");
                OpenTable::default()
            }
        };

        if !table.row_open {
            let css = match style.last(TokenKind::RowHeight) {
                Some(Token::RowHeight(height)) if *height != 0 => {
                    vec![format!("height:{}", points(height.saturating_abs()))]
                }
                _ => Vec::new(),
            };
            self.out.push_str("<tr");
            self.out.push_str(&style_attribute(&css));
            self.out.push('>');
            table.row_open = true;
            table.cell_open = false;
            table.cell_index = 0;
        }

        if !table.cell_open {
            let chain = style.last_cell().map(|cell| cell.chain()).unwrap_or_default();
            let css = match chain.get(table.cell_index) {
                Some(cell) => self.cell_css(cell),
                None => Vec::new(),
            };
            self.out.push_str("<td");
            self.out.push_str(&style_attribute(&css));
            self.out.push('>');
            table.cell_open = true;
        }

        self.table = Some(table);
    }

    fn close_table(&mut self) {
        let Some(table) = self.table else {
            return;
        };
        self.close_block();
        if table.cell_open {
            self.out.push_str("</td>");
        }
        if table.row_open {
            self.out.push_str("</tr>");
        }
        self.out.push_str("</table>");
        self.table = None;
    }

    fn set_link(&mut self, link: Option<&HyperlinkToken>) {
        let href = link.and_then(HyperlinkToken::href);
        if self.link == href {
            return;
        }
        self.close_inline();
        if let (Some(link), Some(href)) = (link, &href) {
            self.out.push_str("<a href=\"");
            self.out.push_str(&html_escape::encode_double_quoted_attribute(href));
            self.out.push('"');
            if let Some(title) = &link.title {
                self.out.push_str(" title=\"");
                self.out.push_str(&html_escape::encode_double_quoted_attribute(title));
                self.out.push('"');
            }
            if let Some(target) = &link.target {
                self.out.push_str(" target=\"");
                self.out.push_str(&html_escape::encode_double_quoted_attribute(target));
                self.out.push('"');
            }
            self.out.push('>');
        }
        self.link = href;
    }

    fn set_span(&mut self, css: Vec<String>) {
        let wanted = (!css.is_empty()).then(|| css.join(";"));
        if self.span == wanted {
            return;
        }
        self.close_span();
        if let Some(css) = &wanted {
            self.out.push_str("<span style=\"");
            self.out.push_str(&html_escape::encode_double_quoted_attribute(css));
            self.out.push_str("\">");
        }
        self.span = wanted;
    }

    fn close_span(&mut self) {
        if self.span.take().is_some() {
            self.out.push_str("</span>");
        }
    }

    fn close_inline(&mut self) {
        self.close_span();
        if self.link.take().is_some() {
            self.out.push_str("</a>");
        }
    }

    fn bookmark(&mut self, style: &FormatContext) {
        if !self.settings.emit_bookmarks {
            return;
        }
        let Some(BookmarkToken {
            start: true,
            id: Some(id),
        }) = style.bookmark()
        else {
            return;
        };
        if !self.bookmarks.insert(id.clone()) {
            return;
        }
        self.close_inline();
        self.out.push_str("<a id=\"");
        self.out.push_str(&html_escape::encode_double_quoted_attribute(id));
        self.out.push_str("\"></a>");
    }

    /// Opens everything inline content of `style` needs.
    fn inline(&mut self, style: &FormatContext) {
        self.open_block(style);
        self.bookmark(style);
        self.set_link(style.hyperlink());
        let css = self.span_css(style);
        self.set_span(css);
    }

    fn paragraph_css(&self, style: &FormatContext) -> Vec<String> {
        let mut css = Vec::new();
        for token in style.iter() {
            match token {
                Token::Alignment(align) => css.push(format!("text-align:{}", text_align(*align))),
                Token::LeftIndent(twips) => css.push(format!("margin-left:{}", points(*twips))),
                Token::RightIndent(twips) => css.push(format!("margin-right:{}", points(*twips))),
                Token::FirstLineIndent(twips) => {
                    css.push(format!("text-indent:{}", points(*twips)))
                }
                Token::SpaceBefore(twips) => css.push(format!("margin-top:{}", points(*twips))),
                Token::SpaceAfter(twips) => css.push(format!("margin-bottom:{}", points(*twips))),
                _ => {}
            }
        }
        for (side, property) in PARAGRAPH_BORDERS {
            if let Some(border) = style.border(side).filter(|b| b.is_visible()) {
                css.push(format!("{property}:{}", self.border_css(border)));
            }
        }
        css
    }

    fn span_css(&self, style: &FormatContext) -> Vec<String> {
        let mut css = Vec::new();
        let mut decorations = Vec::new();
        for token in style.iter() {
            match token {
                Token::Bold(true) => css.push("font-weight:bold".to_string()),
                Token::Italic(true) => css.push("font-style:italic".to_string()),
                Token::Underline(true) => decorations.push("underline"),
                Token::Strike(true) => decorations.push("line-through"),
                Token::FontRef(id) => {
                    let font = self.doc.fonts.get(*id);
                    if font.is_some() && font != self.default_font.as_ref() {
                        css.extend(font.map(|font| format!("font-family:{}", font_family(font))));
                    }
                }
                Token::FontSize(half_points) => {
                    css.push(format!("font-size:{}pt", f32::from(*half_points) / 2.0))
                }
                Token::ForegroundColor(index) => {
                    css.extend(self.doc.color(*index).map(|c| format!("color:{}", c.to_css())))
                }
                Token::BackgroundColor(index) => css.extend(
                    self.doc
                        .color(*index)
                        .map(|c| format!("background-color:{}", c.to_css())),
                ),
                Token::Script(ScriptPosition::Superscript) => {
                    css.push("vertical-align:super".to_string())
                }
                Token::Script(ScriptPosition::Subscript) => {
                    css.push("vertical-align:sub".to_string())
                }
                _ => {}
            }
        }
        if !decorations.is_empty() {
            css.push(format!("text-decoration:{}", decorations.join(" ")));
        }
        css
    }

    fn cell_css(&self, cell: &CellToken) -> Vec<String> {
        let mut css = Vec::new();
        if let Some(width) = cell.width() {
            css.push(format!("width:{}", points(width)));
        }
        if let Some(color) = cell.background.and_then(|index| self.doc.color(index)) {
            css.push(format!("background-color:{}", color.to_css()));
        }
        if let Some(align) = cell.vertical_align {
            let align = match align {
                VerticalAlign::Top => "top",
                VerticalAlign::Center => "middle",
                VerticalAlign::Bottom => "bottom",
            };
            css.push(format!("vertical-align:{align}"));
        }
        for (side, property) in CELL_BORDERS {
            if let Some(border) = cell.border(side).filter(|b| b.is_visible()) {
                css.push(format!("{property}:{}", self.border_css(border)));
            }
        }
        css
    }

    fn border_css(&self, border: &BorderToken) -> String {
        let style = match border.style {
            Some(BorderStyle::Double) => "double",
            Some(BorderStyle::Dotted) => "dotted",
            Some(BorderStyle::Dashed) => "dashed",
            _ => "solid",
        };
        let mut width = border.width.unwrap_or(15).max(1);
        if border.style == Some(BorderStyle::Thick) {
            width = width.saturating_mul(2);
        }
        let color = border
            .color
            .and_then(|index| self.doc.color(index))
            .map_or_else(|| "black".to_string(), |c| c.to_css());
        format!("{} {style} {color}", points(width))
    }
}

impl OutputSink for HtmlWriter<'_> {
    fn set_default_font(&mut self, font: Option<Font>) {
        self.default_font = font;
    }

    fn set_default_tab_width(&mut self, twips: i32) {
        if twips > 0 {
            self.tab_width = twips;
        }
    }

    fn add_text(&mut self, style: &FormatContext, text: &str) {
        if text.is_empty() || matches!(style.last(TokenKind::Hidden), Some(Token::Hidden(true))) {
            return;
        }
        self.inline(style);
        html_escape::encode_text_to_string(text, &mut self.out);
        self.block_empty = false;
    }

    fn add_break(&mut self, style: &FormatContext, kind: BreakKind, count: usize) {
        match kind {
            BreakKind::Tab => {
                self.inline(style);
                let count = i32::try_from(count).unwrap_or(i32::MAX);
                let width = self.tab_width.saturating_mul(count);
                self.out.push_str(&format!(
                    "<span style=\"display:inline-block;width:{}\"></span>",
                    points(width)
                ));
                self.block_empty = false;
            }
            BreakKind::Line => {
                self.open_block(style);
                self.out.push_str("<br>");
                self.block_empty = false;
            }
            BreakKind::Paragraph => {
                self.open_block(style);
                if self.block_empty {
                    self.out.push_str("<br>");
                }
                self.close_block();
            }
            BreakKind::Section => self.close_block(),
            BreakKind::Page => {
                self.close_block();
                self.close_list();
                self.close_table();
                self.out
                    .push_str("<div style=\"page-break-after:always\"></div>");
            }
            BreakKind::Cell => {
                if !style.in_table() && self.table.is_none() {
                    self.close_block();
                    return;
                }
                self.open_cell(style);
                self.close_block();
                if let Some(table) = self.table.as_mut() {
                    self.out.push_str("</td>");
                    table.cell_open = false;
                    table.cell_index += 1;
                }
            }
            BreakKind::Row => {
                self.close_block();
                if let Some(table) = self.table.as_mut() {
                    if table.cell_open {
                        self.out.push_str("</td>");
                    }
                    if table.row_open {
                        self.out.push_str("</tr>");
                    }
                    *table = OpenTable::default();
                }
            }
        }
    }

    fn add_picture(&mut self, style: &FormatContext, picture: &Picture) {
        if !self.settings.embed_pictures {
            log::debug!("dropping {} picture", picture.mime_type());
            return;
        }
        self.open_block(style);
        self.bookmark(style);
        self.set_link(style.hyperlink());
        self.close_span();

        let (width, height) = picture.display_size_pt();
        let mut css = Vec::new();
        css.extend(width.map(|w| format!("width:{w}pt")));
        css.extend(height.map(|h| format!("height:{h}pt")));
        self.out.push_str("<img src=\"");
        self.out.push_str(&picture.data_uri());
        self.out.push('"');
        self.out.push_str(&style_attribute(&css));
        self.out.push('>');
        self.block_empty = false;
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.close_block();
        self.close_list();
        self.close_table();

        if self.settings.wrap_in_div {
            let css: Vec<String> = self
                .default_font
                .iter()
                .map(|font| format!("font-family:{}", font_family(font)))
                .collect();
            let body = std::mem::take(&mut self.out);
            self.out = format!("<div{}>{body}</div>", style_attribute(&css));
        }
    }
}

/// The list a paragraph belongs to, once its numbering is resolved.
fn list_of(style: &FormatContext) -> Option<OpenList> {
    let style_id = style.list_style_id()?;
    let numbering = match style.last(TokenKind::NumberingType) {
        Some(Token::NumberingType(NumberingType::None)) | None => return None,
        Some(Token::NumberingType(numbering)) => *numbering,
        Some(_) => return None,
    };
    Some(OpenList {
        numbering,
        style_id,
        level: style.list_level(),
    })
}

fn list_style_type(numbering: NumberingType) -> &'static str {
    match numbering {
        NumberingType::Bullet => "disc",
        NumberingType::Decimal => "decimal",
        NumberingType::LowerAlpha => "lower-alpha",
        NumberingType::UpperAlpha => "upper-alpha",
        NumberingType::LowerRoman => "lower-roman",
        NumberingType::UpperRoman => "upper-roman",
        NumberingType::None => "none",
    }
}

fn text_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justify => "justify",
    }
}

fn font_family(font: &Font) -> String {
    match font.family.css_generic() {
        Some(generic) => format!("'{}', {generic}", font.name),
        None => format!("'{}'", font.name),
    }
}

/// Twips as CSS points.
fn points(twips: i32) -> String {
    format!("{}pt", twips as f32 / 20.0)
}

fn style_attribute(css: &[String]) -> String {
    if css.is_empty() {
        return String::new();
    }
    format!(
        " style=\"{}\"",
        html_escape::encode_double_quoted_attribute(&css.join(";"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::interpret;
    use crate::model::{Color, Destination, FontFamily, ListLevel, ListStyle, PictureFormat};
    use insta::assert_snapshot;

    fn plain() -> RenderSettings {
        RenderSettings {
            wrap_in_div: false,
            ..RenderSettings::default()
        }
    }

    fn render(doc: &Document, settings: RenderSettings) -> String {
        let mut writer = HtmlWriter::new(doc, settings);
        interpret(doc, &mut writer);
        writer.into_html()
    }

    fn render_tokens(contents: Vec<Token>) -> String {
        render(&Document::new(contents), plain())
    }

    #[test]
    fn paragraphs_and_character_runs() {
        let html = render_tokens(vec![
            Token::Alignment(TextAlign::Center),
            Token::text("Hello "),
            Token::group(vec![Token::Bold(true), Token::text("bold")]),
            Token::text(" & more"),
            Token::Break(BreakKind::Paragraph),
            Token::ParagraphDefault,
            Token::text("next"),
        ]);
        assert_snapshot!(html, @r#"<p style="text-align:center">Hello <span style="font-weight:bold">bold</span> &amp; more</p><p>next</p>"#);
    }

    #[test]
    fn empty_paragraph_keeps_its_line() {
        let html = render_tokens(vec![
            Token::Break(BreakKind::Paragraph),
            Token::text("x"),
        ]);
        assert_eq!(html, "<p><br></p><p>x</p>");
    }

    #[test]
    fn hidden_text_is_suppressed() {
        let html = render_tokens(vec![
            Token::group(vec![Token::Hidden(true), Token::text("secret")]),
            Token::text("shown"),
        ]);
        assert_eq!(html, "<p>shown</p>");
    }

    #[test]
    fn colors_fonts_and_sizes() {
        let mut doc = Document::new(vec![
            Token::DefaultFontRef(0),
            Token::FontRef(1),
            Token::FontSize(24),
            Token::ForegroundColor(1),
            Token::Underline(true),
            Token::Strike(true),
            Token::text("styled"),
        ]);
        doc.fonts = vec![
            Font {
                id: 0,
                name: "Times New Roman".to_string(),
                family: FontFamily::Roman,
            },
            Font {
                id: 1,
                name: "Arial".to_string(),
                family: FontFamily::Swiss,
            },
        ]
        .into_iter()
        .collect();
        doc.colors = vec![None, Some(Color::new(255, 0, 0))];

        let html = render(&doc, RenderSettings::default());

        assert!(html.starts_with("<div style=\"font-family:'Times New Roman', serif\"><p>"));
        assert!(html.contains("font-family:'Arial', sans-serif"));
        assert!(html.contains("font-size:12pt"));
        assert!(html.contains("color:#ff0000"));
        assert!(html.contains("text-decoration:underline line-through"));
        assert!(html.ends_with("styled</span></p></div>"));
    }

    #[test]
    fn tabs_become_spacers() {
        let html = render(
            &Document::new(vec![
                Token::DefaultTabWidth(360),
                Token::Break(BreakKind::Tab),
                Token::Break(BreakKind::Tab),
                Token::text("x"),
            ]),
            plain(),
        );
        assert_eq!(
            html,
            "<p><span style=\"display:inline-block;width:36pt\"></span>x</p>"
        );
    }

    #[test]
    fn hyperlink_spans_consecutive_runs() {
        let html = render_tokens(vec![
            Token::group(vec![
                Token::group(vec![
                    Token::IgnoreUnrecognized,
                    Token::Destination(Destination::FieldInstructions),
                    Token::text("HYPERLINK \"https://example.com/?a=1&b=2\""),
                ]),
                Token::group(vec![
                    Token::Destination(Destination::FieldResult),
                    Token::text("click "),
                    Token::group(vec![Token::Italic(true), Token::text("here")]),
                ]),
            ]),
            Token::text(" now"),
        ]);
        assert_snapshot!(html, @r#"<p><a href="https://example.com/?a=1&amp;b=2">click <span style="font-style:italic">here</span></a> now</p>"#);
    }

    #[test]
    fn bookmark_anchor_is_emitted_once() {
        let bookmark = Token::group(vec![
            Token::IgnoreUnrecognized,
            Token::Destination(Destination::BookmarkStart),
            Token::text("top"),
        ]);
        let html = render_tokens(vec![
            bookmark,
            Token::text("a"),
            Token::Break(BreakKind::Paragraph),
            Token::text("b"),
        ]);
        assert_eq!(html, "<p><a id=\"top\"></a>a</p><p>b</p>");

        let settings = RenderSettings {
            emit_bookmarks: false,
            ..plain()
        };
        let doc = Document::new(vec![
            Token::group(vec![
                Token::IgnoreUnrecognized,
                Token::Destination(Destination::BookmarkStart),
                Token::text("top"),
            ]),
            Token::text("a"),
        ]);
        assert_eq!(render(&doc, settings), "<p>a</p>");
    }

    #[test]
    fn list_paragraphs_become_items() {
        let mut doc = Document::new(vec![
            Token::ListStyleId(1),
            Token::text("one"),
            Token::Break(BreakKind::Paragraph),
            Token::text("two"),
            Token::Break(BreakKind::Paragraph),
            Token::ParagraphDefault,
            Token::text("after"),
        ]);
        doc.list_styles.insert(
            1,
            ListStyle {
                levels: vec![ListLevel {
                    tokens: vec![Token::NumberingType(NumberingType::Decimal)],
                }],
            },
        );

        assert_snapshot!(render(&doc, plain()), @r#"<ol style="list-style-type:decimal"><li>one</li><li>two</li></ol><p>after</p>"#);
    }

    #[test]
    fn table_cells_take_chain_geometry() {
        let mut doc = Document::new(vec![
            Token::RowDefaults,
            Token::RightCellBoundary(1440),
            Token::CellBackground(1),
            Token::RightCellBoundary(4320),
            Token::InTable,
            Token::text("a"),
            Token::Break(BreakKind::Cell),
            Token::text("b"),
            Token::Break(BreakKind::Cell),
            Token::Break(BreakKind::Row),
            Token::ParagraphDefault,
            Token::text("after"),
        ]);
        doc.colors = vec![None, Some(Color::new(0, 0, 255))];

        assert_snapshot!(render(&doc, plain()), @r#"<table style="border-collapse:collapse"><tr><td style="width:72pt"><p>a</p></td><td style="width:144pt;background-color:#0000ff"><p>b</p></td></tr></table><p>after</p>"#);
    }

    #[test]
    fn extreme_table_geometry_renders() {
        let html = render_tokens(vec![
            Token::RowDefaults,
            Token::RowHeight(i32::MIN),
            Token::RowLeftOffset(-10),
            Token::RightCellBoundary(i32::MAX),
            Token::InTable,
            Token::text("a"),
            Token::Break(BreakKind::Cell),
            Token::Break(BreakKind::Row),
        ]);
        assert!(html.starts_with("<table style=\"border-collapse:collapse\"><tr style=\"height:"));
        assert!(html.contains("<td style=\"width:"));
        assert!(html.contains("<p>a</p></td></tr>"));
    }

    #[test]
    fn extreme_thick_border_renders() {
        let html = render_tokens(vec![
            Token::BorderPosition(BorderSide::Top),
            Token::BorderStyle(BorderStyle::Thick),
            Token::BorderWidth(i32::MAX),
            Token::text("x"),
        ]);
        assert!(html.starts_with("<p style=\"border-top:"));
        assert!(html.ends_with(" solid black\">x</p>"));
    }

    #[test]
    fn huge_tab_count_saturates() {
        let doc = Document::new(Vec::new());
        let mut writer = HtmlWriter::new(&doc, plain());
        writer.add_break(&FormatContext::new(), BreakKind::Tab, usize::MAX);
        assert!(writer.html().contains("display:inline-block;width:"));
    }

    #[test]
    fn paragraph_borders_and_indents() {
        let html = render_tokens(vec![
            Token::LeftIndent(720),
            Token::SpaceAfter(120),
            Token::BorderPosition(BorderSide::Bottom),
            Token::BorderStyle(BorderStyle::Double),
            Token::BorderWidth(20),
            Token::text("x"),
        ]);
        assert_eq!(
            html,
            "<p style=\"margin-left:36pt;margin-bottom:6pt;border-bottom:1pt double black\">x</p>"
        );
    }

    #[test]
    fn pictures_are_embedded_or_dropped() {
        let picture = Token::group(vec![
            Token::Destination(Destination::Picture),
            Token::PictureFormat(PictureFormat::Png),
            Token::PictureGoalWidth(200),
            Token::text("00ff"),
        ]);

        let html = render_tokens(vec![picture.clone()]);
        assert_eq!(
            html,
            "<p><img src=\"data:image/png;base64,AP8=\" style=\"width:10pt\"></p>"
        );

        let settings = RenderSettings {
            embed_pictures: false,
            ..plain()
        };
        assert_eq!(render(&Document::new(vec![picture]), settings), "");
    }

    #[test]
    fn page_break_closes_blocks() {
        let html = render_tokens(vec![
            Token::text("a"),
            Token::Break(BreakKind::Page),
            Token::text("b"),
        ]);
        assert_eq!(
            html,
            "<p>a</p><div style=\"page-break-after:always\"></div><p>b</p>"
        );
    }
}
