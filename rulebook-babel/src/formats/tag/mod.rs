//! XML-like AST tag serialization
//!
//! Serializes AST snapshots to an XML-like format.
//!
//! ## Format
//!
//! - Node type → tag name (kebab-case)
//! - Label → text content
//! - `line` attribute → `line` attribute on the tag
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <chapter>Combat
//!     <new-line line="1"></new-line>
//!     <text line="2">Roll the dice.</text>
//!   </chapter>
//! </document>
//! ```

use crate::error::FormatError;
use crate::format::Format;
use rulebook_parser::ast::{snapshot_from_document, AstSnapshot};
use rulebook_parser::Document;

/// Tag serializer that converts AstSnapshot to XML-like format
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }

    fn serialize_snapshot(&mut self, snapshot: &AstSnapshot) {
        let tag = to_tag_name(&snapshot.node_type);

        let attributes: String = snapshot
            .attributes
            .iter()
            .map(|(key, value)| format!(" {}=\"{}\"", key, escape_xml(value)))
            .collect();

        self.push_indent(&format!("<{}{}>", tag, attributes));
        self.output.push_str(&escape_xml(&snapshot.label));

        if snapshot.children.is_empty() {
            self.output.push_str(&format!("</{}>\n", tag));
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in &snapshot.children {
                self.serialize_snapshot(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>\n", tag));
        }
    }
}

/// Convert a node type name to a tag name (e.g., "StartListItem" → "start-list-item")
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('-');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut serializer = TagSerializer::new();
    serializer.serialize_snapshot(&snapshot_from_document(doc));
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like dump of the document tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }
}
