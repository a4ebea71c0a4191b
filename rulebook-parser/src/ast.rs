//! Document tree
//!
//!     The tree is deliberately shallow. Containers hold flat runs of content tokens; the
//!     structure inside a run (paragraphs, lists, tables) is carried by marker tokens and
//!     only materialized when rendering.
//!
//!         Document
//!         ├── items        content before any heading
//!         ├── sections     top-level sections
//!         ├── chapters
//!         │   └── Chapter
//!         │       ├── items      content between the chapter heading and its first section
//!         │       └── sections
//!         └── annexes      flat sections, no nesting
//!
//!     [snapshot] provides the normalized view the debug serializers work from.

pub mod elements;
pub mod snapshot;

pub use elements::{Chapter, Document, Section};
pub use snapshot::{snapshot_from_document, snapshot_from_token, AstSnapshot};
