//! Format implementations
//!
//! `html` is the publishing format. `tag` and `json` serialize the normalized AST snapshot
//! and exist to inspect what the assembler built.

pub mod html;
pub mod json;
pub mod tag;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use tag::TagFormat;
