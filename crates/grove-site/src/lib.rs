//! The Grove docs site as one immutable bundle.
//!
//! A [`Site`] is built once through load → validate → freeze: the corpus
//! and contributors are parsed and validated, the search index is derived,
//! and the result is shared read-only for the rest of the process.

mod error;
mod site;

pub use error::SiteError;
pub use site::{Site, builtin};
