//! Lexer
//!
//!     The rulebook lexer is a hand written, character level state machine. Each state scans
//!     forward from the current position, recognizes the next construct, queues zero or more
//!     tokens and hands back the next state. The machine is driven by [Lexer]'s `Iterator`
//!     implementation: asking for a token runs states until one is ready, so the stream is
//!     produced on demand and read exactly once.
//!
//! Triggers
//!
//!     In the text state, at every position, the remaining input is checked in this order:
//!
//!         `##`          section heading, up to the end of the line
//!         `-table-`     table, title up to the end of the line, one row per line
//!         `ANNEX`       annex heading, up to the end of the line
//!         `#`           chapter heading, up to the end of the line
//!         `\n- `        list opening, one item per `\n- `, closed by a bare newline
//!         `\n`          paragraph break
//!         `__`          emphasis, up to the next `__`
//!         `\`           command, `\name(args)`
//!         `*`           bold, up to the next `*`
//!         `[`           link, `[text](destination)`
//!
//!     Anything else accumulates into a Text token, flushed right before the trigger's own
//!     tokens. Inside list items only the list markers, newlines, bold and emphasis are
//!     recognized.
//!
//! Termination
//!
//!     The stream always ends with exactly one EndOfInput or one LexError token. Errors are
//!     only raised for constructs whose closing delimiter is required to make sense of the
//!     payload (commands, links, tables). Unterminated bold and emphasis run to the end of
//!     input, an unterminated heading falls back to plain text and an unterminated list is
//!     closed at the end of input.

mod lexer;
mod states;

pub use lexer::Lexer;

/// Start lexing `source`. Nothing is scanned until the returned iterator is polled.
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

pub(crate) const SECTION: &str = "##";
pub(crate) const CHAPTER: &str = "#";
pub(crate) const ANNEX: &str = "ANNEX";
pub(crate) const TABLE: &str = "-table-";
pub(crate) const LIST_ELEMENT: &str = "\n- ";
pub(crate) const NEW_LINE: &str = "\n";
pub(crate) const EMPHASIS: &str = "__";
pub(crate) const BOLD: char = '*';
pub(crate) const COMMAND_START: char = '\\';
pub(crate) const COMMAND_ARGS_OPEN: char = '(';
pub(crate) const COMMAND_ARGS_CLOSE: char = ')';
pub(crate) const LINK_OPEN: char = '[';
pub(crate) const LINK_TEXT_CLOSE: char = ']';
pub(crate) const LINK_CLOSE: char = ')';
