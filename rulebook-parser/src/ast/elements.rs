//! Document, Chapter and Section containers.

use crate::token::Token;

/// A flat run of content tokens under one heading. Annexes are sections too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<Token>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// A chapter: its own content followed by any number of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub items: Vec<Token>,
    pub sections: Vec<Section>,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Content that appears before the first heading.
    pub items: Vec<Token>,
    pub sections: Vec<Section>,
    pub chapters: Vec<Chapter>,
    pub annexes: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.sections.is_empty()
            && self.chapters.is_empty()
            && self.annexes.is_empty()
    }

    /// Every content token in document order: preamble, top-level sections, chapters
    /// (own items, then their sections), annexes.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.items
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.items.iter()))
            .chain(self.chapters.iter().flat_map(|c| {
                c.items
                    .iter()
                    .chain(c.sections.iter().flat_map(|s| s.items.iter()))
            }))
            .chain(self.annexes.iter().flat_map(|a| a.items.iter()))
    }
}
