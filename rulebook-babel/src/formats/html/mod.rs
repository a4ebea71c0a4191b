//! HTML format implementation
//!
//! Strategy: direct walk of the document tree, streaming markup into a `fmt::Write` sink
//! (one-way only).
//!
//! # Data Model
//!
//! | Rulebook element | HTML | Notes |
//! |------------------|------|-------|
//! | Chapter | `<h2><a id>` | labelled with a Roman numeral |
//! | Section | `<h3><a name>` | |
//! | Annex | `<div class='annex'>` + `<h2>` | labelled with a letter |
//! | Paragraph | `<p>` | `class='indent'` for the first one after a heading |
//! | List | `<ol class='roman'>` | each item wraps one paragraph |
//! | Table | `<table>` | title in a spanning `<th>`, first row doubles as column headers |
//! | Bold / Em | `<strong>` / `<em>` | |
//! | Link | `<a href='#anchor'>` | destinations are heading titles |
//! | `\color(text, hex)` | `<span style>` | |
//! | `\img(src, alt, position, size)` | `<img class='illustration ...'>` | |
//!
//! Paragraphs are implicit in the markup: the first inline content opens one and a line break,
//! list boundary, table, image or heading closes it. The [Builder] tracks that state.
//!
//! Payload text is written verbatim, authors may embed raw HTML in their rulebooks.
//!
//! # Example
//!
//! ```ignore
//! use rulebook_babel::{Format, HtmlFormat, HtmlOptions};
//!
//! let format = HtmlFormat::with_options(HtmlOptions { table_of_contents: false, ..Default::default() });
//! let html = format.serialize(&document)?;
//! ```

mod builder;
mod toc;

pub use builder::Builder;

use crate::error::FormatError;
use crate::format::Format;
use rulebook_parser::Document;

/// Rendering options for [HtmlFormat].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Emit the summary block before the content.
    pub table_of_contents: bool,
    /// Heading of the summary block.
    pub toc_title: String,
    /// Word used before annex letters, in headings and in the summary.
    pub annex_label: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            table_of_contents: true,
            toc_title: "Table des matières".to_string(),
            annex_label: "Annexe".to_string(),
        }
    }
}

/// HTML format with configurable options
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for publishing"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut builder = Builder::new(String::new(), &self.options);
        builder.render(doc)?;
        Ok(builder.into_inner())
    }
}
