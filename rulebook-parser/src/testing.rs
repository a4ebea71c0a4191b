//! Testing utilities
//!
//!     Factories to build expected token streams without spelling out struct literals, and a
//!     couple of helpers to project a stream down to what a test actually cares about.
//!
//!     Lexer tests should compare whole streams, kinds and payloads and lines, rather than
//!     poking at single tokens: most lexer bugs show up as an extra or a missing marker token
//!     somewhere else in the stream.
//!
//!     ```rust,ignore
//!     use rulebook_parser::lex;
//!     use rulebook_parser::testing::mk_tokens;
//!     use rulebook_parser::TokenKind::*;
//!
//!     let tokens: Vec<_> = lex("*hi*").collect();
//!     assert_eq!(tokens, mk_tokens(&[(Bold, "hi", 1), (EndOfInput, "", 1)]));
//!     ```

use crate::token::{Token, TokenKind};

pub fn mk_token(kind: TokenKind, text: &str, line: usize) -> Token {
    Token::new(kind, text, line)
}

pub fn mk_tokens(specs: &[(TokenKind, &str, usize)]) -> Vec<Token> {
    specs
        .iter()
        .map(|(kind, text, line)| mk_token(*kind, text, *line))
        .collect()
}

/// Lex `source` to completion.
pub fn lex_all(source: &str) -> Vec<Token> {
    crate::lexing::lex(source).collect()
}

/// Only the kinds of a token stream.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}
