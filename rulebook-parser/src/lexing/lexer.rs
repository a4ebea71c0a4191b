//! Lexer cursor and driver
//!
//! Holds the scanning position and the queue of ready tokens, and implements `Iterator` by
//! running [State]s until a token is available. The state functions themselves live in
//! `states.rs`.

use crate::token::{Token, TokenKind};
use log::trace;
use std::collections::VecDeque;

/// Where bold and emphasis hand control back once their closing delimiter is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resume {
    Text,
    ListItem,
}

/// The lexer states. `opened_at` fields remember the line a construct began on, so errors
/// point at the construct rather than at the end of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum State {
    Text,
    Heading(TokenKind),
    ListItem,
    Bold(Resume),
    Emphasis(Resume),
    TableTitle { opened_at: usize },
    TableRows { opened_at: usize },
    CommandName { opened_at: usize },
    CommandArgs { name: String, opened_at: usize },
    LinkText { opened_at: usize },
    LinkDestination { text: String, opened_at: usize },
}

impl From<Resume> for State {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Text => State::Text,
            Resume::ListItem => State::ListItem,
        }
    }
}

/// Pull based token producer over a rulebook source.
///
/// Yields tokens in source order and stops after the EndOfInput or LexError token.
pub struct Lexer<'a> {
    pub(crate) input: &'a str,
    /// Start of the pending token.
    pub(crate) start: usize,
    /// Line on which the pending token started.
    pub(crate) start_line: usize,
    pub(crate) pos: usize,
    /// Width of the last character read, for [Lexer::backup].
    width: usize,
    pub(crate) line: usize,
    ready: VecDeque<Token>,
    state: Option<State>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            start_line: 1,
            pos: 0,
            width: 0,
            line: 1,
            ready: VecDeque::new(),
            state: Some(State::Text),
        }
    }

    /// Current 1-based line.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The text between the pending token start and the current position.
    pub(crate) fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Read one character, counting lines. `None` at end of input.
    pub(crate) fn next_char(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                if c == '\n' {
                    self.line += 1;
                }
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the last character read. Only valid once per [Lexer::next_char].
    pub(crate) fn backup(&mut self) {
        if self.width == 0 {
            return;
        }
        self.pos -= self.width;
        self.width = 0;
        if self.rest().starts_with('\n') {
            self.line -= 1;
        }
    }

    /// Consume a marker known to be at the current position.
    pub(crate) fn skip(&mut self, marker: &str) {
        for _ in marker.chars() {
            self.next_char();
        }
    }

    /// Drop the pending text.
    pub(crate) fn ignore(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    pub(crate) fn push(&mut self, kind: TokenKind, text: impl Into<String>, line: usize) {
        let token = Token::new(kind, text, line);
        trace!("emit {}", token);
        self.ready.push_back(token);
    }

    /// Emit the pending text as-is.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        self.push(kind, self.pending(), self.start_line);
        self.ignore();
    }

    /// Emit the pending text with surrounding whitespace removed.
    pub(crate) fn emit_trimmed(&mut self, kind: TokenKind) {
        self.push(kind, self.pending().trim(), self.start_line);
        self.ignore();
    }

    /// Emit a token with no payload. The pending text is left alone.
    pub(crate) fn emit_marker(&mut self, kind: TokenKind) {
        self.push(kind, "", self.line);
    }

    /// Flush the pending text as a Text token, if there is any.
    pub(crate) fn flush_text(&mut self) {
        if self.pos > self.start {
            self.emit(TokenKind::Text);
        }
    }

    /// Flush the pending text trimmed, skipping it if only whitespace is left.
    pub(crate) fn flush_trimmed_text(&mut self) {
        if !self.pending().trim().is_empty() {
            self.emit_trimmed(TokenKind::Text);
        }
        self.ignore();
    }

    /// Queue a LexError and halt the machine.
    pub(crate) fn fail(&mut self, line: usize, message: impl Into<String>) -> Option<State> {
        self.push(TokenKind::LexError, message, line);
        None
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            trace!("state {:?} at line {}", state, self.line);
            self.state = self.step(state);
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
