//! Document assembly
//!
//!     Folds the token stream into a [Document]. The builder tracks a single insertion target
//!     (where the next content token goes) and the current chapter, if any:
//!
//!         ChapterHeading   new chapter, becomes the target
//!         SectionHeading   new section in the current chapter, or a top-level section when
//!                          there is no current chapter
//!         AnnexHeading     new annex, clears the current chapter
//!         content          appended to the target, the preamble before any heading
//!
//!     A SectionHeading that follows an annex therefore starts a new top-level section. The
//!     stream is consumed up to EndOfInput; a LexError aborts the build.

use crate::ast::{Chapter, Document, Section};
use crate::error::ParserError;
use crate::lexing::lex;
use crate::token::{Token, TokenKind};
use log::debug;

/// Where content tokens currently land. Indexes into the document's vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Preamble,
    Section(usize),
    Chapter(usize),
    ChapterSection(usize, usize),
    Annex(usize),
}

/// Incremental document builder, fed one token at a time.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
    chapter: Option<usize>,
    target: Target,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            chapter: None,
            target: Target::Preamble,
        }
    }

    pub fn push(&mut self, token: Token) -> Result<(), ParserError> {
        if token.kind.is_heading() {
            debug!("{} '{}' at line {}", token.kind, token.text, token.line);
        }
        match token.kind {
            TokenKind::LexError => {
                return Err(ParserError::Lex {
                    line: token.line,
                    message: token.text,
                })
            }
            TokenKind::EndOfInput => {}
            TokenKind::ChapterHeading => {
                self.document.chapters.push(Chapter::new(token.text));
                let index = self.document.chapters.len() - 1;
                self.chapter = Some(index);
                self.target = Target::Chapter(index);
            }
            TokenKind::SectionHeading => match self.chapter {
                Some(chapter) => {
                    let sections = &mut self.document.chapters[chapter].sections;
                    sections.push(Section::new(token.text));
                    self.target = Target::ChapterSection(chapter, sections.len() - 1);
                }
                None => {
                    self.document.sections.push(Section::new(token.text));
                    self.target = Target::Section(self.document.sections.len() - 1);
                }
            },
            TokenKind::AnnexHeading => {
                self.document.annexes.push(Section::new(token.text));
                self.chapter = None;
                self.target = Target::Annex(self.document.annexes.len() - 1);
            }
            _ => self.items_mut().push(token),
        }
        Ok(())
    }

    fn items_mut(&mut self) -> &mut Vec<Token> {
        let doc = &mut self.document;
        match self.target {
            Target::Preamble => &mut doc.items,
            Target::Section(s) => &mut doc.sections[s].items,
            Target::Chapter(c) => &mut doc.chapters[c].items,
            Target::ChapterSection(c, s) => &mut doc.chapters[c].sections[s].items,
            Target::Annex(a) => &mut doc.annexes[a].items,
        }
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

/// Build a document from a token stream. Tokens after EndOfInput are not read.
pub fn assemble<I>(tokens: I) -> Result<Document, ParserError>
where
    I: IntoIterator<Item = Token>,
{
    let mut builder = DocumentBuilder::new();
    for token in tokens {
        let done = token.kind == TokenKind::EndOfInput;
        builder.push(token)?;
        if done {
            break;
        }
    }
    Ok(builder.finish())
}

/// Lex and assemble `source` in one go.
pub fn parse_document(source: &str) -> Result<Document, ParserError> {
    assemble(lex(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mk_token, mk_tokens};

    #[test]
    fn test_content_before_any_heading_goes_to_preamble() {
        let doc = assemble(mk_tokens(&[
            (TokenKind::Text, "Welcome", 1),
            (TokenKind::EndOfInput, "", 1),
        ]))
        .unwrap();

        assert_eq!(doc.items, vec![mk_token(TokenKind::Text, "Welcome", 1)]);
        assert!(doc.chapters.is_empty());
    }

    #[test]
    fn test_sections_nest_under_the_current_chapter() {
        let doc = assemble(mk_tokens(&[
            (TokenKind::SectionHeading, "Loose", 1),
            (TokenKind::ChapterHeading, "Combat", 2),
            (TokenKind::Text, "Roll.", 3),
            (TokenKind::SectionHeading, "Damage", 4),
            (TokenKind::Text, "Ouch.", 5),
            (TokenKind::EndOfInput, "", 5),
        ]))
        .unwrap();

        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Loose");

        let combat = &doc.chapters[0];
        assert_eq!(combat.items, vec![mk_token(TokenKind::Text, "Roll.", 3)]);
        assert_eq!(combat.sections[0].title, "Damage");
        assert_eq!(
            combat.sections[0].items,
            vec![mk_token(TokenKind::Text, "Ouch.", 5)]
        );
    }

    #[test]
    fn test_annex_clears_the_current_chapter() {
        let doc = assemble(mk_tokens(&[
            (TokenKind::ChapterHeading, "Magic", 1),
            (TokenKind::AnnexHeading, "Spells", 2),
            (TokenKind::Text, "Fireball", 3),
            (TokenKind::SectionHeading, "After", 4),
            (TokenKind::EndOfInput, "", 4),
        ]))
        .unwrap();

        assert!(doc.chapters[0].sections.is_empty());
        assert_eq!(
            doc.annexes[0].items,
            vec![mk_token(TokenKind::Text, "Fireball", 3)]
        );
        assert_eq!(doc.sections[0].title, "After");
    }

    #[test]
    fn test_lex_error_aborts() {
        let err = assemble(mk_tokens(&[
            (TokenKind::ChapterHeading, "Intro", 1),
            (TokenKind::LexError, "unterminated link: expected ']'", 2),
        ]))
        .unwrap_err();

        assert_eq!(err.line(), 2);
        assert_eq!(
            err.to_string(),
            "lexer error at line 2: unterminated link: expected ']'"
        );
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let doc = assemble(mk_tokens(&[
            (TokenKind::EndOfInput, "", 1),
            (TokenKind::Text, "ignored", 2),
        ]))
        .unwrap();

        assert!(doc.is_empty());
    }
}
