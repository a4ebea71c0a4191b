//! Table of contents
//!
//! Three lists inside `<div id='summary'>`: top-level sections, chapters with their sections
//! nested in a roman list, and annexes. Each list is emitted even when empty.

use super::Builder;
use crate::anchors::{anchor, annex_anchor, annex_letter};
use crate::roman::to_roman;
use rulebook_parser::Document;
use std::fmt::{self, Write};

impl<W: Write> Builder<'_, W> {
    pub(super) fn table_of_contents(&mut self, doc: &Document) -> fmt::Result {
        let options = self.options;
        writeln!(self, "<div id='summary'>\n<h3>{}</h3>", options.toc_title)?;

        self.write("<ol>\n")?;
        for section in &doc.sections {
            self.toc_entry(&section.title)?;
        }
        self.write("</ol>\n")?;

        self.write("<ol>\n")?;
        for (index, chapter) in doc.chapters.iter().enumerate() {
            writeln!(
                self,
                "<li><strong>{}</strong> - <a href='#{}'>{}</a></li>",
                to_roman(index + 1),
                anchor(&chapter.title),
                chapter.title
            )?;
            self.write("<ol class='roman'>\n")?;
            for section in &chapter.sections {
                self.toc_entry(&section.title)?;
            }
            self.write("</ol>\n")?;
        }
        self.write("</ol>\n")?;

        self.write("<ol>\n")?;
        for (index, annex) in doc.annexes.iter().enumerate() {
            writeln!(
                self,
                "<li><strong>{} {}</strong>: <a href='#{}'>{}</a></li>",
                options.annex_label,
                annex_letter(index),
                annex_anchor(&annex.title),
                annex.title
            )?;
        }
        self.write("</ol>\n")?;

        self.write("</div>\n")
    }

    fn toc_entry(&mut self, title: &str) -> fmt::Result {
        writeln!(self, "<li><a href='#{}'>{}</a></li>", anchor(title), title)
    }
}
