//! Full-text search index for the Grove docs corpus.
//!
//! [`build_index`] flattens a [`Corpus`](grove_content::Corpus) into one
//! [`SearchRecord`] per item. Only `paragraph` and `note` blocks contribute
//! text; code, tables and steps are not searchable.
//!
//! ```
//! # fn main() -> Result<(), grove_content::ContentError> {
//! use grove_content::Corpus;
//! use grove_search::build_index;
//!
//! let corpus = Corpus::builtin()?;
//! let index = build_index(&corpus);
//!
//! let hits = index.search("hot reload", 5);
//! assert!(hits.iter().all(|r| r.url.starts_with("/docs#")));
//! # Ok(())
//! # }
//! ```

mod index;
mod query;
mod text;

pub use index::{SearchIndex, SearchRecord, build_index};
pub use text::strip_tags;
