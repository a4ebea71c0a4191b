//! # rulebook-parser
//!
//! Lexer and document assembler for the rulebook markup format.
//!
//! Pipeline
//!
//!     The parser is split in two stages that run in lockstep over a single pass:
//!
//!         1. Lexing. A character level state machine turns the raw source into a lazy
//!            stream of [Token](token::Token)s. See [lexing].
//!
//!         2. Assembling. The flat token stream is folded into a [Document](ast::Document):
//!            chapters holding sections, top-level sections, and flat annexes. See
//!            [assembling].
//!
//!     Rendering the document (HTML and the debug formats) lives in `rulebook-babel`, this
//!     crate only knows about tokens and the document tree.
//!
//! File Layout
//!
//!     .
//!     ├── token.rs          Token and TokenKind, plus token dumps (token/formatting.rs)
//!     ├── lexing.rs         The state machine lexer (lexing/lexer.rs, lexing/states.rs)
//!     ├── assembling.rs     Token stream to Document folding
//!     ├── ast.rs            Document tree and the normalized snapshot used by serializers
//!     ├── error.rs          ParserError
//!     └── testing.rs        Token factories shared by unit and integration tests

pub mod assembling;
pub mod ast;
pub mod error;
pub mod lexing;
pub mod testing;
pub mod token;

pub use assembling::{assemble, parse_document, DocumentBuilder};
pub use ast::{Chapter, Document, Section};
pub use error::ParserError;
pub use lexing::{lex, Lexer};
pub use token::{Token, TokenKind};
