//! Token types shared by the lexer, the assembler and the debug dumps.
//!
//!     A token is a typed slice of the source: its kind, the text payload attached to it and
//!     the 1-based line where that text began. Marker tokens (NewLine, ListOpen, ...) carry an
//!     empty payload and the line on which they were produced.
//!
//!     Some kinds pack two values in their payload, separated by a pipe:
//!
//!         Link        `text|destination`
//!         Command     `name|arg1,arg2,...`
//!         TableRow    `cell|cell|...`
//!
//!     Splitting those is left to the consumer, see [Token::split_payload].

pub mod formatting;

pub use formatting::{to_json_string, to_simple_string};

use serde::Serialize;
use std::fmt;

/// The closed set of token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Text,
    Bold,
    Em,
    NewLine,
    ChapterHeading,
    SectionHeading,
    AnnexHeading,
    ListOpen,
    ListClose,
    StartListItem,
    EndListItem,
    Link,
    Command,
    TableStart,
    TableRow,
    TableEnd,
    EndOfInput,
    LexError,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Bold => "Bold",
            TokenKind::Em => "Em",
            TokenKind::NewLine => "NewLine",
            TokenKind::ChapterHeading => "ChapterHeading",
            TokenKind::SectionHeading => "SectionHeading",
            TokenKind::AnnexHeading => "AnnexHeading",
            TokenKind::ListOpen => "ListOpen",
            TokenKind::ListClose => "ListClose",
            TokenKind::StartListItem => "StartListItem",
            TokenKind::EndListItem => "EndListItem",
            TokenKind::Link => "Link",
            TokenKind::Command => "Command",
            TokenKind::TableStart => "TableStart",
            TokenKind::TableRow => "TableRow",
            TokenKind::TableEnd => "TableEnd",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::LexError => "LexError",
        }
    }

    /// Boundary kinds open a new container in the document tree.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            TokenKind::ChapterHeading | TokenKind::SectionHeading | TokenKind::AnnexHeading
        )
    }

    /// Kinds that end the token stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::EndOfInput | TokenKind::LexError)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Split a two-part payload (`Link`, `Command`) on its first pipe.
    ///
    /// Returns the whole payload and an empty second half when there is no pipe.
    pub fn split_payload(&self) -> (&str, &str) {
        self.text.split_once('|').unwrap_or((self.text.as_str(), ""))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (line {})", self.kind, self.text, self.line)
    }
}
