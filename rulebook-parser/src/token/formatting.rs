//! Token dumps
//!
//! Two textual views of a token stream, used by the CLI `token-simple` and `token-json`
//! outputs and by tests that want to eyeball what the lexer produced.

use super::Token;

/// One token per line, in the `Kind: text (line n)` layout.
///
/// Newlines inside payloads (bold runs spanning lines) are escaped so each token stays on
/// its own line.
pub fn to_simple_string(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string().replace('\n', "\\n"));
        out.push('\n');
    }
    out
}

/// Pretty printed JSON array of `{kind, text, line}` objects.
pub fn to_json_string(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}
