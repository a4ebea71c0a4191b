//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! Formats are output only: the rulebook markup is the single source format and is read by
//! `rulebook-parser`.

use crate::error::FormatError;
use rulebook_parser::Document;

/// Trait for document output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(format!("{} chapters", doc.chapters.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "tag")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (without the dot)
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a Document into text
    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;
}
