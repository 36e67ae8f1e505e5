use std::path::PathBuf;

use grove_content::ContentError;

/// Error building a [`Site`](crate::Site).
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The docs corpus failed to load or validate.
    #[error("Invalid docs corpus{}: {source}", origin(.path.as_ref()))]
    Corpus {
        /// External file, `None` for the built-in corpus.
        path: Option<PathBuf>,
        #[source]
        source: ContentError,
    },
    /// The contributors roster failed to load or validate.
    #[error("Invalid contributors roster{}: {source}", origin(.path.as_ref()))]
    Contributors {
        /// External file, `None` for the built-in roster.
        path: Option<PathBuf>,
        #[source]
        source: ContentError,
    },
}

fn origin(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
