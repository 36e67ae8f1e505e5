//! Documentation corpus for the Grove docs site.
//!
//! This crate provides:
//! - [`Corpus`]: the validated, ordered Section → Item → Block tree
//! - [`Block`]: the closed set of content block kinds
//! - [`Contributors`]: the project contributor roster
//!
//! Both documents ship embedded in the binary as YAML and are validated
//! when loaded. An invalid corpus never produces a [`Corpus`] value.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), grove_content::ContentError> {
//! use grove_content::Corpus;
//!
//! let corpus = Corpus::builtin()?;
//!
//! // Anchor lookup is a hash map hit, not a scan
//! let found = corpus.item("cmd-serve").unwrap();
//! assert_eq!(found.section.id, "commands");
//! # Ok(())
//! # }
//! ```

mod contributors;
mod corpus;
mod error;
mod model;
mod raw;

pub use contributors::{ContributionKind, Contributor, Contributors};
pub use corpus::{Corpus, DOCS_PATH, ItemRef, NavLink, NavSection, docs_url};
pub use error::ContentError;
pub use model::{Block, Item, NoteKind, Section, Step};

/// Documentation corpus compiled into the binary.
pub const BUILTIN_DOCS: &str = include_str!("../content/docs.yaml");

/// Contributor roster compiled into the binary.
pub const BUILTIN_CONTRIBUTORS: &str = include_str!("../content/contributors.yaml");
