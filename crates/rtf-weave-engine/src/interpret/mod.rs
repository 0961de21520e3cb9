//! # Interpreter
//!
//! Walks a [`Document`]'s token tree depth first and reports styled content
//! to an [`OutputSink`].
//!
//! Every group is a scope: it starts with a copy of its parent's
//! [`FormatContext`] and whatever it records is dropped when it ends. Flat
//! runs that RTF uses for structure (table rows, cell definitions, borders)
//! are reassembled into composite tokens on the way.
//!
//! ## Modules
//!
//! - **`context`**: `FormatContext`, the per-scope formatting ledger
//! - **`cursor`**: `TokenCursor` used by every run-consuming builder
//! - **`resolve`**: deferred list-style resolution
//! - **`assemble`**: cell and border assemblers
//! - **`table`**: reassembly of table rows
//! - **`fields`**: field instructions, hyperlinks and bookmarks

use std::rc::Rc;

use crate::model::{
    BreakKind, Destination, Document, Group, Picture, Row, Token, TokenCategory,
};
use crate::sink::OutputSink;

pub mod assemble;
pub mod context;
pub mod cursor;
pub mod fields;
pub mod resolve;
pub mod table;


pub use assemble::{assemble_border, assemble_cell};
pub use context::FormatContext;
pub use cursor::TokenCursor;
pub use resolve::resolve_list_style;
pub use table::build_table;

/// Interprets `doc` into `sink`, closing the sink when done.
pub fn interpret<S: OutputSink + ?Sized>(doc: &Document, sink: &mut S) {
    Interpreter::new(doc).run(sink);
}

/// Owns the scope stack for one pass over one document.
pub struct Interpreter<'d> {
    doc: &'d Document,
    scopes: Vec<FormatContext>,
}

impl<'d> Interpreter<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self {
            doc,
            scopes: Vec::new(),
        }
    }

    /// Reports document defaults, then the body, then closes the sink.
    ///
    /// Headers and footers are not part of the body.
    pub fn run<S: OutputSink + ?Sized>(mut self, sink: &mut S) {
        let mut body = Vec::with_capacity(self.doc.contents.len());

        for token in &self.doc.contents {
            match token {
                Token::DefaultFontRef(id) => {
                    let font = self.doc.fonts.get(*id).or_else(|| {
                        log::debug!("default font {id} is not in the font table");
                        self.doc.fonts.first()
                    });
                    sink.set_default_font(font.cloned());
                }
                Token::DefaultTabWidth(twips) => sink.set_default_tab_width(*twips),
                Token::Group(group) if group.destination().is_some_and(Destination::is_header) => {
                    log::trace!("dropping {:?}", group.destination());
                }
                token if token.category().contains(TokenCategory::HEADER_TAG) => {}
                token => body.push(token.clone()),
            }
        }

        self.interpret_group(&body, None, true, sink);
        sink.close();
    }

    fn current(&self) -> &FormatContext {
        let depth = self.scopes.len() - 1;
        &self.scopes[depth]
    }

    fn current_mut(&mut self) -> &mut FormatContext {
        let depth = self.scopes.len() - 1;
        &mut self.scopes[depth]
    }

    /// Interprets `contents` as a new scope.
    fn interpret_group<S: OutputSink + ?Sized>(
        &mut self,
        contents: &[Token],
        row: Option<&Rc<Row>>,
        rtf_active: bool,
        sink: &mut S,
    ) {
        if is_ignorable(contents) {
            log::trace!("skipping unrecognized group {:?}", contents.get(1));
            return;
        }

        let scope = self.scopes.last().cloned().unwrap_or_default();
        self.scopes.push(scope);
        self.walk(contents, row, rtf_active, sink);
        self.scopes.pop();
    }

    fn walk<S: OutputSink + ?Sized>(
        &mut self,
        contents: &[Token],
        row: Option<&Rc<Row>>,
        mut rtf_active: bool,
        sink: &mut S,
    ) {
        let mut tabs = 0usize;
        let mut i = 0;

        while i < contents.len() {
            let token = &contents[i];
            let start = i;
            i += 1;

            if let Token::HtmlRtf(value) = token {
                rtf_active = !value;
                continue;
            }
            if !rtf_active {
                if let Token::Group(group) = token {
                    self.interpret_group(&group.contents, row, false, sink);
                }
                continue;
            }

            let category = token.category();
            match token {
                Token::RowDefaults if row.is_none() => {
                    let (table, consumed) = build_table(&contents[start..]);
                    i = start + consumed;
                    for table_row in &table.rows {
                        log::trace!(
                            "row {} declares {} cells",
                            table_row.index,
                            table_row.declared_cells()
                        );
                        self.interpret_group(&table_row.contents, Some(table_row), rtf_active, sink);
                    }
                }
                _ if category == TokenCategory::CELL_FORMAT => {
                    let previous = self.current().last_cell().cloned();
                    let (cell, consumed) = assemble_cell(&contents[start..], row, previous.as_ref());
                    i = start + consumed;
                    self.current_mut().add(Token::Cell(Rc::new(cell)));
                }
                Token::BorderPosition(_) => {
                    if let Some((border, consumed)) = assemble_border(&contents[start..]) {
                        i = start + consumed;
                        self.current_mut().add(Token::Border(border));
                    }
                }
                _ if category.contains(TokenCategory::FORMAT) => {
                    self.current_mut().add(token.clone());
                }
                Token::Group(group) => {
                    self.interpret_child(group, row, rtf_active, &mut tabs, sink);
                }
                Token::Break(BreakKind::Tab) => tabs += 1,
                Token::Text(text) => {
                    let style = resolve_list_style(self.doc, self.current_mut());
                    flush_tabs(sink, style, &mut tabs);
                    sink.add_text(style, text);
                }
                Token::Break(kind) => {
                    let style = resolve_list_style(self.doc, self.current_mut());
                    sink.add_break(style, *kind, 1);
                    if *kind == BreakKind::Row {
                        for scope in &mut self.scopes {
                            scope.set_in_table(false);
                        }
                    }
                    tabs = 0;
                }
                _ => {}
            }
        }
    }

    /// Dispatches a nested group on its destination.
    fn interpret_child<S: OutputSink + ?Sized>(
        &mut self,
        group: &Group,
        row: Option<&Rc<Row>>,
        rtf_active: bool,
        tabs: &mut usize,
        sink: &mut S,
    ) {
        match group.destination() {
            Some(Destination::ListTextFallback | Destination::NumberingTextFallback) => {}
            Some(dest) if dest.is_header() => {}
            Some(Destination::FieldInstructions) => {
                if let Some(link) = fields::hyperlink(group) {
                    self.current_mut().add(Token::Hyperlink(link));
                }
            }
            Some(Destination::BookmarkStart) => {
                self.current_mut()
                    .add(Token::Bookmark(fields::bookmark(group, true)));
            }
            Some(Destination::BookmarkEnd) => {
                self.current_mut()
                    .add(Token::Bookmark(fields::bookmark(group, false)));
            }
            Some(Destination::Picture) => {
                let picture = Picture::from_group(group);
                let style = resolve_list_style(self.doc, self.current_mut());
                flush_tabs(sink, style, tabs);
                sink.add_picture(style, &picture);
            }
            _ if group
                .contents
                .iter()
                .any(|t| matches!(t, Token::ParagraphNumbering)) =>
            {
                let current = self.current_mut();
                for token in fields::numbering_formats(group) {
                    current.add(token.clone());
                }
            }
            _ => self.interpret_group(&group.contents, row, rtf_active, sink),
        }
    }
}

/// A group opened by `\*` and a control word the parser did not know.
fn is_ignorable(contents: &[Token]) -> bool {
    matches!(contents, [Token::IgnoreUnrecognized, second, ..] if second.is_unrecognized())
}

fn flush_tabs<S: OutputSink + ?Sized>(sink: &mut S, style: &FormatContext, tabs: &mut usize) {
    if *tabs > 0 {
        sink.add_break(style, BreakKind::Tab, *tabs);
        *tabs = 0;
    }
}
