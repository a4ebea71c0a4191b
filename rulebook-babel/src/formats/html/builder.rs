//! Streaming HTML builder
//!
//! Walks a [Document] in rendering order and writes markup as it goes. Content tokens are
//! flat, so the builder carries the state that the markup leaves implicit:
//!
//!     - `paragraph_open`: whether a `<p>` is waiting for its `</p>`
//!     - `new_section`: set by every heading, makes the next paragraph `class='indent'`
//!     - `table_row`: index of the last row written in the current table, `None` until the
//!       header block is out
//!     - `table_title`: title of the current table, written into the header block
//!
//! Every write goes through `?`, so the first sink error ends the walk.

use super::HtmlOptions;
use crate::anchors::{anchor, annex_anchor, annex_letter};
use crate::roman::to_roman;
use log::debug;
use rulebook_parser::{Chapter, Document, Section, Token, TokenKind};
use std::fmt::{self, Write};

pub struct Builder<'o, W: Write> {
    out: W,
    pub(super) options: &'o HtmlOptions,
    paragraph_open: bool,
    new_section: bool,
    table_row: Option<usize>,
    table_title: String,
}

impl<'o, W: Write> Builder<'o, W> {
    pub fn new(out: W, options: &'o HtmlOptions) -> Self {
        Self {
            out,
            options,
            paragraph_open: false,
            new_section: false,
            table_row: None,
            table_title: String::new(),
        }
    }

    /// Render the whole document: summary, preamble, top-level sections, chapters, annexes.
    pub fn render(&mut self, doc: &Document) -> fmt::Result {
        self.paragraph_open = false;
        self.new_section = false;

        if self.options.table_of_contents {
            self.table_of_contents(doc)?;
        }

        self.items(&doc.items)?;
        for section in &doc.sections {
            self.section(section)?;
        }
        for (index, chapter) in doc.chapters.iter().enumerate() {
            self.chapter(index, chapter)?;
        }
        for (index, annex) in doc.annexes.iter().enumerate() {
            self.annex(index, annex)?;
        }

        self.close_paragraph()
    }

    /// Hand back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub(super) fn write(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }

    pub(super) fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.out.write_fmt(args)
    }

    fn chapter(&mut self, index: usize, chapter: &Chapter) -> fmt::Result {
        self.close_paragraph()?;
        writeln!(
            self,
            "<h2><a id='{}'></a>{} - {}</h2>",
            anchor(&chapter.title),
            to_roman(index + 1),
            chapter.title
        )?;
        self.new_section = true;

        self.items(&chapter.items)?;
        for section in &chapter.sections {
            self.section(section)?;
        }
        Ok(())
    }

    fn section(&mut self, section: &Section) -> fmt::Result {
        self.close_paragraph()?;
        writeln!(
            self,
            "<h3><a name='{}'></a>{}</h3>",
            anchor(&section.title),
            section.title
        )?;
        self.new_section = true;
        self.items(&section.items)
    }

    fn annex(&mut self, index: usize, annex: &Section) -> fmt::Result {
        let options = self.options;
        self.close_paragraph()?;
        self.write("<div class='annex'>\n")?;
        writeln!(
            self,
            "<h2><a name='{}'></a>{} {}: {}</h2>",
            annex_anchor(&annex.title),
            options.annex_label,
            annex_letter(index),
            annex.title
        )?;
        self.new_section = true;

        self.items(&annex.items)?;
        self.close_paragraph()?;
        self.write("</div>\n")
    }

    fn items(&mut self, items: &[Token]) -> fmt::Result {
        items.iter().try_for_each(|token| self.token(token))
    }

    fn token(&mut self, token: &Token) -> fmt::Result {
        match token.kind {
            TokenKind::NewLine => self.close_paragraph(),
            TokenKind::ListOpen => {
                self.close_paragraph()?;
                self.write("<ol class='roman'>\n")
            }
            TokenKind::ListClose => self.write("</ol>\n\n"),
            TokenKind::StartListItem => {
                self.write("\n<li>\n")?;
                self.open_paragraph()
            }
            TokenKind::EndListItem => {
                self.close_paragraph()?;
                self.write("\n</li>\n")
            }
            TokenKind::Bold => self.inline("strong", &token.text),
            TokenKind::Em => self.inline("em", &token.text),
            TokenKind::Link => self.link(token),
            TokenKind::Command => self.command(token),
            TokenKind::TableStart => {
                self.close_paragraph()?;
                self.table_row = None;
                self.table_title = token.text.clone();
                self.write("<table>\n")
            }
            TokenKind::TableRow => self.row(&token.text),
            TokenKind::TableEnd => match self.table_row {
                Some(_) => self.write("</tbody>\n</table>\n"),
                None => self.write("</table>\n"),
            },
            TokenKind::Text
            | TokenKind::ChapterHeading
            | TokenKind::SectionHeading
            | TokenKind::AnnexHeading => self.text(&token.text),
            TokenKind::EndOfInput | TokenKind::LexError => Ok(()),
        }
    }

    fn open_paragraph(&mut self) -> fmt::Result {
        if self.paragraph_open {
            return Ok(());
        }
        self.paragraph_open = true;
        if self.new_section {
            self.new_section = false;
            self.write("<p class='indent'>\n")
        } else {
            self.write("<p>\n")
        }
    }

    fn close_paragraph(&mut self) -> fmt::Result {
        if !self.paragraph_open {
            return Ok(());
        }
        self.paragraph_open = false;
        self.write("\n</p>\n")
    }

    fn text(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        self.open_paragraph()?;
        self.write(text)
    }

    fn inline(&mut self, tag: &str, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        self.open_paragraph()?;
        write!(self, "<{tag}>{text}</{tag}>")
    }

    fn link(&mut self, token: &Token) -> fmt::Result {
        if token.text.is_empty() {
            return Ok(());
        }
        let (text, destination) = token.split_payload();
        self.open_paragraph()?;
        write!(self, "<a href='#{}'>{}</a>", anchor(destination), text)
    }

    fn command(&mut self, token: &Token) -> fmt::Result {
        let (name, args) = token.split_payload();
        let args: Vec<&str> = args.split(',').collect();

        match (name, args.as_slice()) {
            ("color", [text, color, ..]) => {
                self.open_paragraph()?;
                write!(
                    self,
                    "<span style='color: #{}'>{}</span>",
                    color.trim(),
                    text.trim()
                )
            }
            ("img", [src, alt, rest @ ..]) => {
                self.close_paragraph()?;
                self.image(src, alt.trim(), rest)
            }
            _ => {
                debug!(
                    "ignoring command '{}' with {} argument(s) at line {}",
                    name,
                    args.len(),
                    token.line
                );
                Ok(())
            }
        }
    }

    /// `rest` holds the optional position and size arguments.
    fn image(&mut self, src: &str, alt: &str, rest: &[&str]) -> fmt::Result {
        let mut classes = vec!["illustration"];
        match rest.first().map(|position| position.trim()) {
            Some("left") => classes.push("float-left"),
            Some("right") => classes.push("float-right"),
            _ => {}
        }
        let classes = classes.join(" ");

        let size = rest.get(1).map(|size| size.trim()).unwrap_or_default();
        let width = size.strip_prefix('w').filter(|w| !w.is_empty());
        let height = size.strip_prefix('h').filter(|h| !h.is_empty());

        match (width, height) {
            (Some(width), _) => write!(
                self,
                "<img class='{classes}' src='{src}' alt='{alt}' width='{width}'/>"
            ),
            (_, Some(height)) => write!(
                self,
                "<img class='{classes}' src='{src}' alt='{alt}' height='{height}'/>"
            ),
            _ => write!(self, "<img class='{classes}' src='{src}' alt='{alt}' />"),
        }
    }

    fn row(&mut self, row: &str) -> fmt::Result {
        let cells: Vec<&str> = row.split('|').map(str::trim).collect();

        let index = match self.table_row {
            None => {
                let title = self.table_title.clone();
                self.write("<thead>\n<tr>\n")?;
                writeln!(self, "<th colspan='{}'>{}</th>", cells.len(), title)?;
                self.write("</tr>\n</thead>\n<tbody>\n")?;
                0
            }
            Some(previous) => previous + 1,
        };
        self.table_row = Some(index);

        let class = if index == 0 { "head" } else { "lead" };
        self.write("<tr>\n")?;
        for (position, cell) in cells.iter().enumerate() {
            let class = if position == 0 { "head" } else { class };
            writeln!(self, "<td class='{class}'>{cell}</td>")?;
        }
        self.write("</tr>\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulebook_parser::testing::mk_tokens;
    use rulebook_parser::TokenKind::*;

    fn no_toc() -> HtmlOptions {
        HtmlOptions {
            table_of_contents: false,
            ..Default::default()
        }
    }

    fn render_items(items: &[(TokenKind, &str, usize)]) -> String {
        let options = no_toc();
        let mut doc = Document::new();
        doc.items = mk_tokens(items);
        let mut builder = Builder::new(String::new(), &options);
        builder.render(&doc).unwrap();
        builder.into_inner()
    }

    #[test]
    fn test_newline_closes_paragraph_once() {
        let html = render_items(&[
            (Text, "one", 1),
            (NewLine, "", 1),
            (NewLine, "", 2),
            (Text, "two", 3),
        ]);
        assert_eq!(html, "<p>\none\n</p>\n<p>\ntwo\n</p>\n");
    }

    #[test]
    fn test_empty_inline_payloads_emit_nothing() {
        let html = render_items(&[(Bold, "", 1), (Em, "", 1), (Text, "", 1)]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_link_targets_the_anchor_of_its_destination() {
        let html = render_items(&[(Link, "see combat|Combat Rules", 1)]);
        assert_eq!(html, "<p>\n<a href='#combat-rules'>see combat</a>\n</p>\n");
    }

    #[test]
    fn test_color_command_opens_a_paragraph() {
        let html = render_items(&[(Command, "color| red text , ff0000 ", 1)]);
        assert_eq!(
            html,
            "<p>\n<span style='color: #ff0000'>red text</span>\n</p>\n"
        );
    }

    #[test]
    fn test_image_closes_the_paragraph() {
        let html = render_items(&[
            (Text, "Look:", 1),
            (Command, "img|cat.png, A cat", 1),
        ]);
        assert_eq!(
            html,
            "<p>\nLook:\n</p>\n<img class='illustration' src='cat.png' alt='A cat' />"
        );
    }

    #[test]
    fn test_unknown_or_incomplete_commands_are_ignored() {
        let html = render_items(&[
            (Command, "sound|boom.ogg", 1),
            (Command, "color|red", 1),
            (Command, "img|", 1),
        ]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_table_without_rows() {
        let html = render_items(&[(TableStart, "Empty", 1), (TableEnd, "", 2)]);
        assert_eq!(html, "<table>\n</table>\n");
    }

    #[test]
    fn test_table_start_resets_row_index() {
        let html = render_items(&[
            (TableStart, "A", 1),
            (TableRow, "x|y", 2),
            (TableEnd, "", 3),
            (TableStart, "B", 4),
            (TableRow, "z", 5),
            (TableEnd, "", 6),
        ]);
        assert_eq!(html.matches("<thead>").count(), 2);
        assert!(html.contains("<th colspan='1'>B</th>"));
        assert!(!html.contains("lead"));
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_sink_failure_aborts() {
        let options = no_toc();
        let mut doc = Document::new();
        doc.items = mk_tokens(&[(Text, "Hello", 1)]);
        assert!(Builder::new(FailingSink, &options).render(&doc).is_err());
    }
}
