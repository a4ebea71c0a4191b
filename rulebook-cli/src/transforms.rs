//! Token dumps
//!
//! Outputs that stop after lexing. They sit next to the registry formats on the command line
//! but never build a document, so a source with a lexing error still dumps, ending in its
//! LexError token.

use rulebook_parser::lex;
use rulebook_parser::token::{to_json_string, to_simple_string, Token};

/// Token dump names and their descriptions
pub const TOKEN_FORMATS: &[(&str, &str)] = &[
    ("token-json", "JSON array of lexer tokens"),
    ("token-simple", "One lexer token per line"),
];

pub fn is_token_format(name: &str) -> bool {
    TOKEN_FORMATS.iter().any(|(format, _)| *format == name)
}

/// Lex `source` and dump the stream in the named layout.
pub fn dump_tokens(source: &str, format: &str) -> Result<String, serde_json::Error> {
    let tokens: Vec<Token> = lex(source).collect();
    match format {
        "token-json" => to_json_string(&tokens),
        _ => Ok(to_simple_string(&tokens)),
    }
}
