//! Lexer states
//!
//! Each function scans from the current position, queues the tokens it recognized and
//! returns the next state, or `None` once the stream is finished.

use super::lexer::{Lexer, Resume, State};
use super::{
    ANNEX, BOLD, CHAPTER, COMMAND_ARGS_CLOSE, COMMAND_ARGS_OPEN, COMMAND_START, EMPHASIS,
    LINK_CLOSE, LINK_OPEN, LINK_TEXT_CLOSE, LIST_ELEMENT, NEW_LINE, SECTION, TABLE,
};
use crate::token::TokenKind;

impl Lexer<'_> {
    pub(crate) fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Text => self.lex_text(),
            State::Heading(kind) => self.lex_heading(kind),
            State::ListItem => self.lex_list_item(),
            State::Bold(resume) => self.lex_bold(resume),
            State::Emphasis(resume) => self.lex_emphasis(resume),
            State::TableTitle { opened_at } => self.lex_table_title(opened_at),
            State::TableRows { opened_at } => self.lex_table_rows(opened_at),
            State::CommandName { opened_at } => self.lex_command_name(opened_at),
            State::CommandArgs { name, opened_at } => self.lex_command_args(name, opened_at),
            State::LinkText { opened_at } => self.lex_link_text(opened_at),
            State::LinkDestination { text, opened_at } => {
                self.lex_link_destination(text, opened_at)
            }
        }
    }

    /// Flush the pending text up to a single character trigger that was just read, then
    /// consume the trigger.
    fn take_trigger(&mut self) {
        self.backup();
        self.flush_text();
        self.next_char();
        self.ignore();
    }

    fn lex_text(&mut self) -> Option<State> {
        loop {
            let rest = self.rest();

            if rest.starts_with(SECTION) {
                self.flush_text();
                self.skip(SECTION);
                self.ignore();
                return Some(State::Heading(TokenKind::SectionHeading));
            }

            if rest.starts_with(TABLE) {
                self.flush_text();
                let opened_at = self.line();
                self.skip(TABLE);
                self.ignore();
                return Some(State::TableTitle { opened_at });
            }

            if rest.starts_with(ANNEX) {
                self.flush_text();
                self.skip(ANNEX);
                self.ignore();
                return Some(State::Heading(TokenKind::AnnexHeading));
            }

            if rest.starts_with(CHAPTER) {
                self.flush_text();
                self.skip(CHAPTER);
                self.ignore();
                return Some(State::Heading(TokenKind::ChapterHeading));
            }

            if rest.starts_with(LIST_ELEMENT) {
                self.flush_text();
                self.skip(LIST_ELEMENT);
                self.ignore();
                self.emit_marker(TokenKind::ListOpen);
                self.emit_marker(TokenKind::StartListItem);
                return Some(State::ListItem);
            }

            if rest.starts_with(NEW_LINE) {
                self.flush_text();
                self.emit_marker(TokenKind::NewLine);
                self.skip(NEW_LINE);
                self.ignore();
                return Some(State::Text);
            }

            if rest.starts_with(EMPHASIS) {
                self.flush_text();
                self.skip(EMPHASIS);
                self.ignore();
                return Some(State::Emphasis(Resume::Text));
            }

            match self.next_char() {
                Some(COMMAND_START) => {
                    let opened_at = self.line();
                    self.take_trigger();
                    return Some(State::CommandName { opened_at });
                }
                Some(BOLD) => {
                    self.take_trigger();
                    return Some(State::Bold(Resume::Text));
                }
                Some(LINK_OPEN) => {
                    let opened_at = self.line();
                    self.take_trigger();
                    return Some(State::LinkText { opened_at });
                }
                Some(_) => {}
                None => break,
            }
        }

        self.flush_trimmed_text();
        self.emit_marker(TokenKind::EndOfInput);
        None
    }

    /// Chapter, section and annex headings run to the end of the line. At end of input the
    /// pending text is left for the text state, which flushes it as plain text.
    fn lex_heading(&mut self, kind: TokenKind) -> Option<State> {
        loop {
            if self.rest().starts_with(NEW_LINE) {
                self.emit_trimmed(kind);
                return Some(State::Text);
            }
            if self.next_char().is_none() {
                return Some(State::Text);
            }
        }
    }

    fn lex_list_item(&mut self) -> Option<State> {
        loop {
            let rest = self.rest();

            if rest.starts_with(LIST_ELEMENT) {
                self.flush_text();
                self.skip(LIST_ELEMENT);
                self.ignore();
                self.emit_marker(TokenKind::EndListItem);
                self.emit_marker(TokenKind::StartListItem);
                return Some(State::ListItem);
            }

            // The newline is left for the text state, which emits it as a NewLine.
            if rest.starts_with(NEW_LINE) {
                self.flush_text();
                self.emit_marker(TokenKind::EndListItem);
                self.emit_marker(TokenKind::ListClose);
                return Some(State::Text);
            }

            if rest.starts_with(EMPHASIS) {
                self.flush_text();
                self.skip(EMPHASIS);
                self.ignore();
                return Some(State::Emphasis(Resume::ListItem));
            }

            match self.next_char() {
                Some(BOLD) => {
                    self.take_trigger();
                    return Some(State::Bold(Resume::ListItem));
                }
                Some(_) => {}
                None => {
                    self.flush_trimmed_text();
                    self.emit_marker(TokenKind::EndListItem);
                    self.emit_marker(TokenKind::ListClose);
                    return Some(State::Text);
                }
            }
        }
    }

    fn lex_bold(&mut self, resume: Resume) -> Option<State> {
        loop {
            match self.next_char() {
                Some(BOLD) => {
                    self.backup();
                    self.emit(TokenKind::Bold);
                    self.next_char();
                    self.ignore();
                    return Some(resume.into());
                }
                Some(_) => {}
                None => {
                    self.emit(TokenKind::Bold);
                    return Some(resume.into());
                }
            }
        }
    }

    fn lex_emphasis(&mut self, resume: Resume) -> Option<State> {
        loop {
            if self.rest().starts_with(EMPHASIS) {
                self.emit(TokenKind::Em);
                self.skip(EMPHASIS);
                self.ignore();
                return Some(resume.into());
            }
            if self.next_char().is_none() {
                self.emit(TokenKind::Em);
                return Some(resume.into());
            }
        }
    }

    fn lex_table_title(&mut self, opened_at: usize) -> Option<State> {
        loop {
            match self.next_char() {
                Some('\n') => {
                    self.backup();
                    self.emit_trimmed(TokenKind::TableStart);
                    self.next_char();
                    self.ignore();
                    return Some(State::TableRows { opened_at });
                }
                Some(_) => {}
                None => {
                    return self.fail(
                        opened_at,
                        "unterminated table: expected a line break after the title",
                    )
                }
            }
        }
    }

    /// One row per line until the closing marker. Each row is its own suspension point.
    fn lex_table_rows(&mut self, opened_at: usize) -> Option<State> {
        loop {
            if self.rest().starts_with(TABLE) {
                if !self.pending().trim().is_empty() {
                    self.emit_trimmed(TokenKind::TableRow);
                }
                self.emit_marker(TokenKind::TableEnd);
                self.skip(TABLE);
                self.ignore();
                return Some(State::Text);
            }

            match self.next_char() {
                Some('\n') => {
                    self.backup();
                    self.emit_trimmed(TokenKind::TableRow);
                    self.next_char();
                    self.ignore();
                    return Some(State::TableRows { opened_at });
                }
                Some(_) => {}
                None => {
                    return self.fail(
                        opened_at,
                        format!("unterminated table: expected a closing '{}'", TABLE),
                    )
                }
            }
        }
    }

    fn lex_command_name(&mut self, opened_at: usize) -> Option<State> {
        loop {
            match self.next_char() {
                Some(COMMAND_ARGS_OPEN) => {
                    let name = self.input[self.start..self.pos - 1].to_string();
                    self.ignore();
                    return Some(State::CommandArgs { name, opened_at });
                }
                Some(_) => {}
                None => {
                    let name = self.pending().to_string();
                    return self.fail(
                        opened_at,
                        format!("unterminated command '{}': expected '('", name),
                    );
                }
            }
        }
    }

    fn lex_command_args(&mut self, name: String, opened_at: usize) -> Option<State> {
        loop {
            match self.next_char() {
                Some(COMMAND_ARGS_CLOSE) => {
                    self.backup();
                    let payload = format!("{}|{}", name, self.pending());
                    self.push(TokenKind::Command, payload, opened_at);
                    self.next_char();
                    self.ignore();
                    return Some(State::Text);
                }
                Some(_) => {}
                None => {
                    return self.fail(
                        opened_at,
                        format!("unterminated argument list for command '{}': expected ')'", name),
                    )
                }
            }
        }
    }

    fn lex_link_text(&mut self, opened_at: usize) -> Option<State> {
        loop {
            match self.next_char() {
                Some(LINK_TEXT_CLOSE) => {
                    let text = self.input[self.start..self.pos - 1].to_string();
                    // The opening parenthesis of the destination.
                    self.next_char();
                    self.ignore();
                    return Some(State::LinkDestination { text, opened_at });
                }
                Some(_) => {}
                None => return self.fail(opened_at, "unterminated link: expected ']'"),
            }
        }
    }

    fn lex_link_destination(&mut self, text: String, opened_at: usize) -> Option<State> {
        loop {
            match self.next_char() {
                Some(LINK_CLOSE) => {
                    self.backup();
                    let payload = format!("{}|{}", text, self.pending());
                    self.push(TokenKind::Link, payload, opened_at);
                    self.next_char();
                    self.ignore();
                    return Some(State::Text);
                }
                Some(_) => {}
                None => {
                    return self.fail(
                        opened_at,
                        format!("unterminated link '{}': expected ')'", text),
                    )
                }
            }
        }
    }
}
