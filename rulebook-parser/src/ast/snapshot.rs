//! AST Snapshot - a normalized intermediate representation of the document tree
//!
//! The snapshot captures the tree with node types, labels, attributes and children, so each
//! serializer (tag, JSON, ...) only deals with presentation and never re-implements the
//! traversal.
//!
//! Node types are `Document`, `Chapter`, `Section`, `Annex`, plus one leaf per content token
//! named after its kind (`Text`, `Bold`, `TableRow`, ...) and labelled with its payload.
//! Leaves carry their source line in the `line` attribute.

use super::{Chapter, Document, Section};
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a tree node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Chapter", "Section", "Bold")
    pub node_type: String,

    /// The title of a container or the payload of a token
    pub label: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

pub fn snapshot_from_token(token: &Token) -> AstSnapshot {
    AstSnapshot::new(token.kind.as_str(), token.text.clone())
        .with_attribute("line", token.line.to_string())
}

fn snapshot_items(items: &[Token]) -> impl Iterator<Item = AstSnapshot> + '_ {
    items.iter().map(snapshot_from_token)
}

fn snapshot_section(node_type: &str, section: &Section) -> AstSnapshot {
    AstSnapshot::new(node_type, section.title.clone()).with_children(snapshot_items(&section.items))
}

fn snapshot_chapter(chapter: &Chapter) -> AstSnapshot {
    AstSnapshot::new("Chapter", chapter.title.clone())
        .with_children(snapshot_items(&chapter.items))
        .with_children(
            chapter
                .sections
                .iter()
                .map(|section| snapshot_section("Section", section)),
        )
}

/// Snapshot of a whole document, children in rendering order.
pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    AstSnapshot::new("Document", "")
        .with_children(snapshot_items(&doc.items))
        .with_children(
            doc.sections
                .iter()
                .map(|section| snapshot_section("Section", section)),
        )
        .with_children(doc.chapters.iter().map(snapshot_chapter))
        .with_children(
            doc.annexes
                .iter()
                .map(|annex| snapshot_section("Annex", annex)),
        )
}
