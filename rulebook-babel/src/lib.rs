//! Output formats for rulebook documents
//!
//!     This crate turns an assembled [Document](rulebook_parser::Document) into text. HTML is
//!     the publishing target; `tag` and `json` dump the document tree for debugging.
//!
//!     This is a pure lib: it powers `rulebook-cli` but is shell agnostic. No code here should
//!     print, read environment variables or touch files; formats return strings.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all output formats
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Format implementations under `formats/`
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── roman.rs                # Roman numerals for chapter labels
//!     ├── anchors.rs              # Heading text to anchor names
//!     ├── formats
//!     │   ├── html                # HtmlFormat, HtmlOptions and the streaming Builder
//!     │   ├── tag                 # XML-like dump of the AST snapshot
//!     │   └── json                # JSON dump of the AST snapshot
//!     └── lib.rs
//!
//! Testing
//!
//!     Unit tests live next to the code. `tests/html.rs` renders complete documents from
//!     markup source and checks the paragraph, list and table bookkeeping end to end.

pub mod anchors;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod roman;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::{HtmlFormat, HtmlOptions};
pub use registry::FormatRegistry;
pub use roman::to_roman;
