//! Error types for parsing

use thiserror::Error;

/// Errors that abort the construction of a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// The lexer could not make sense of the input.
    #[error("lexer error at line {line}: {message}")]
    Lex { line: usize, message: String },
}

impl ParserError {
    /// Line the error points at.
    pub fn line(&self) -> usize {
        match self {
            ParserError::Lex { line, .. } => *line,
        }
    }
}
