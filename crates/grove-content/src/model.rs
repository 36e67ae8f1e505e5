//! Corpus data types.
//!
//! The corpus is a fixed tree: a [`Section`] owns ordered [`Item`]s, and an
//! item owns ordered [`Block`]s. Order is meaningful everywhere since it is
//! the navigation and reading order of the docs page.

use serde::{Deserialize, Serialize};

/// Top-level documentation section (a sidebar group).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Stable slug, unique across all sections.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Items in navigation order.
    pub items: Vec<Item>,
}

/// A documentation entry addressable by URL fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Anchor id, unique across the whole corpus.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Content blocks in reading order.
    pub blocks: Vec<Block>,
}

/// Smallest unit of content within an [`Item`].
///
/// Text fields may carry inline HTML markup (`<code>`, `<a>`, `<strong>`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Rich text paragraph.
    Paragraph {
        /// Paragraph text.
        text: String,
    },
    /// Labeled source snippet, shown but never executed.
    Code {
        /// Highlighting language (e.g. `bash`, `go`).
        lang: String,
        /// Caption shown above the snippet, usually a file name or `terminal`.
        label: String,
        /// Snippet source.
        code: String,
    },
    /// Callout box.
    Note {
        /// Callout style.
        kind: NoteKind,
        /// Callout text.
        text: String,
    },
    /// Table with a header row. Every row has as many cells as `head`.
    Table {
        /// Column headers.
        head: Vec<String>,
        /// Body rows.
        rows: Vec<Vec<String>>,
    },
    /// Ordered procedure.
    Steps {
        /// Steps in order.
        items: Vec<Step>,
    },
}

impl Block {
    /// Every `type` tag a block may carry.
    pub const TAGS: [&'static str; 5] = ["paragraph", "code", "note", "table", "steps"];

    /// The `type` tag of this block.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Code { .. } => "code",
            Self::Note { .. } => "note",
            Self::Table { .. } => "table",
            Self::Steps { .. } => "steps",
        }
    }
}

/// Callout style of a [`Block::Note`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Info,
    Tip,
    Warning,
}

/// One step of a [`Block::Steps`] procedure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub text: String,
}
