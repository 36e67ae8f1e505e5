//! Construction errors for the corpus and contributor roster.

use std::path::PathBuf;

/// Error raised while loading or validating content.
///
/// All variants are fatal: content that fails validation must not be served.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// YAML is malformed or does not have the expected shape.
    #[error("Invalid content YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Block has no `type` tag.
    #[error("Block {index} in item `{item}` has no `type` tag")]
    MissingBlockType {
        /// Owning item id.
        item: String,
        /// Zero-based block position within the item.
        index: usize,
    },
    /// Block `type` tag is not one of the known kinds.
    #[error("Unknown block type `{tag}` in item `{item}`")]
    UnknownBlockType {
        /// Owning item id.
        item: String,
        /// Offending tag.
        tag: String,
    },
    /// Block has a known tag but malformed fields.
    #[error("Invalid `{tag}` block {index} in item `{item}`: {message}")]
    InvalidBlock {
        /// Owning item id.
        item: String,
        /// Block tag.
        tag: String,
        /// Zero-based block position within the item.
        index: usize,
        /// Field-level parse error.
        message: String,
    },
    /// Section or item id is empty or cannot be used as a URL fragment.
    #[error("Invalid {kind} id `{id}`: ids must be non-empty and contain no whitespace, '#', '/' or '?'")]
    InvalidId {
        /// `"section"` or `"item"`.
        kind: &'static str,
        /// Offending id.
        id: String,
    },
    /// Two sections share an id.
    #[error("Duplicate section id `{0}`")]
    DuplicateSection(String),
    /// Two items share an id (anchors are one flat namespace).
    #[error("Duplicate item id `{id}` in sections `{first}` and `{second}`")]
    DuplicateItem {
        /// Duplicated id.
        id: String,
        /// Section holding the first occurrence.
        first: String,
        /// Section holding the second occurrence.
        second: String,
    },
    /// Table row length differs from header length.
    #[error(
        "Table block {block} in item `{item}`: row {row} has {found} cells, header has {expected}"
    )]
    RaggedTable {
        /// Owning item id.
        item: String,
        /// Zero-based block position within the item.
        block: usize,
        /// Zero-based row position within the table.
        row: usize,
        /// Header length.
        expected: usize,
        /// Row length.
        found: usize,
    },
    /// Two contributors share a login.
    #[error("Duplicate contributor login `{0}`")]
    DuplicateContributor(String),
}
