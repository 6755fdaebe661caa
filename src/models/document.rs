//! Structured trip document model
//!
//! A `TripDocument` is an ordered list of named sections holding structured
//! content rather than raw markup. It is constructed once per request,
//! immutable after assembly, and handed to a renderer exactly once.

use serde::{Deserialize, Serialize};

/// A table with a header row, data rows, and an optional emphasized footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Totals row, rendered emphasized when present
    pub footer: Option<Vec<String>>,
}

/// One block of structured section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(String),
    /// A titled bullet list; the title may be empty for an untitled list
    Bullets { title: String, items: Vec<String> },
    Table(Table),
}

/// A named document section containing ordered content blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    #[must_use]
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph<S: Into<String>>(&mut self, text: S) {
        self.blocks.push(Block::Paragraph(text.into()));
    }

    pub fn bullets<S: Into<String>>(&mut self, title: S, items: Vec<String>) {
        self.blocks.push(Block::Bullets {
            title: title.into(),
            items,
        });
    }

    pub fn table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }
}

/// The assembled trip plan, in fixed section order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDocument {
    /// Document title, e.g. "Trip Plan to Delhi"
    pub title: String,
    /// "For: <name>" and date-range subtitle lines
    pub subtitle_lines: Vec<String>,
    pub sections: Vec<Section>,
}

impl TripDocument {
    /// Find a section by title, used by tests and renderers
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}
