//! # rulebook
//!
//! Converts rulebook markup into HTML.
//!
//! Pipeline
//!
//!     source ─ lex ─▶ tokens ─ assemble ─▶ Document ─ Format ─▶ text
//!
//!     Lexing and assembly live in `rulebook-parser`, output formats in `rulebook-babel`. This
//!     crate wires them together: [convert] for the common HTML case, [convert_with] to pick a
//!     format from a registry, and [build] for reader to writer conversion.
//!
//!     Errors abort the whole build. Nothing is written to the output unless the document was
//!     converted in full.
//!
//! ```rust,ignore
//! let html = rulebook::convert("#Intro\nHello *world*.\n", &HtmlOptions::default())?;
//! ```

use log::debug;
use std::io::{self, Read, Write};
use thiserror::Error;

pub use rulebook_babel::{Format, FormatError, FormatRegistry, HtmlFormat, HtmlOptions};
pub use rulebook_parser::{lex, parse_document, Document, ParserError, Token, TokenKind};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Convert `source` to HTML.
pub fn convert(source: &str, options: &HtmlOptions) -> Result<String, BuildError> {
    let doc = parse_document(source)?;
    debug!(
        "assembled {} chapter(s), {} section(s), {} annex(es), {} content token(s)",
        doc.chapters.len(),
        doc.sections.len(),
        doc.annexes.len(),
        doc.tokens().count()
    );
    Ok(HtmlFormat::with_options(options.clone()).serialize(&doc)?)
}

/// Convert `source` with the format registered under `format`. Unknown formats fail before
/// the source is parsed.
pub fn convert_with(
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, BuildError> {
    let format = registry.get(format)?;
    let doc = parse_document(source)?;
    Ok(format.serialize(&doc)?)
}

/// Read all of `input`, convert it to HTML and write the result to `output` in one go.
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn build<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: &HtmlOptions,
) -> Result<(), BuildError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let source = String::from_utf8_lossy(&bytes);

    let html = convert(&source, options)?;
    output.write_all(html.as_bytes())?;
    output.flush()?;
    Ok(())
}
