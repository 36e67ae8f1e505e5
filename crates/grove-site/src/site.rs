use std::sync::{Arc, OnceLock};

use grove_config::Config;
use grove_content::{Contributors, Corpus, NavSection};
use grove_router::{RouteTable, Router, ScrollBehavior, ScrollOptions};
use grove_search::{SearchIndex, SearchRecord, build_index};

use crate::error::SiteError;

/// Default number of search results.
const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Corpus, derived search index, contributors and routing settings.
///
/// Immutable once built, so it can be shared across threads without locking.
#[derive(Debug)]
pub struct Site {
    corpus: Arc<Corpus>,
    index: SearchIndex,
    contributors: Contributors,
    routes: RouteTable,
    scroll: ScrollOptions,
    search_limit: usize,
}

impl Site {
    /// Build the site described by `config`.
    ///
    /// Content files that are not configured fall back to the data compiled
    /// into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus or roster cannot be read or fails
    /// validation.
    pub fn load(config: &Config) -> Result<Self, SiteError> {
        let content = &config.content_resolved;

        let corpus = match &content.docs {
            Some(path) => Corpus::from_path(path),
            None => Corpus::builtin(),
        }
        .map_err(|source| SiteError::Corpus {
            path: content.docs.clone(),
            source,
        })?;

        let contributors = match &content.contributors {
            Some(path) => Contributors::from_path(path),
            None => Contributors::builtin(),
        }
        .map_err(|source| SiteError::Contributors {
            path: content.contributors.clone(),
            source,
        })?;

        let routes = RouteTable::grove().with_default_title(&config.site.title);
        let scroll = ScrollOptions {
            offset: config.router.scroll_offset,
            behavior: if config.router.smooth {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Auto
            },
        };

        Ok(Self::freeze(
            corpus,
            contributors,
            routes,
            scroll,
            config.search.limit,
        ))
    }

    /// Build the site from the data compiled into the binary with default
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails validation.
    pub fn builtin() -> Result<Self, SiteError> {
        Self::load(&Config::default())
    }

    fn freeze(
        corpus: Corpus,
        contributors: Contributors,
        routes: RouteTable,
        scroll: ScrollOptions,
        search_limit: usize,
    ) -> Self {
        let index = build_index(&corpus);

        tracing::info!(
            sections = corpus.sections().len(),
            items = corpus.item_count(),
            records = index.len(),
            contributors = contributors.len(),
            "Site ready"
        );

        Self {
            corpus: Arc::new(corpus),
            index,
            contributors,
            routes,
            scroll,
            search_limit,
        }
    }

    /// Shared handle to the corpus.
    #[must_use]
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    #[must_use]
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    #[must_use]
    pub fn contributors(&self) -> &Contributors {
        &self.contributors
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn scroll_options(&self) -> &ScrollOptions {
        &self.scroll
    }

    /// Configured maximum number of search results.
    #[must_use]
    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Sidebar navigation tree.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavSection> {
        self.corpus.navigation()
    }

    /// Search with the configured result limit.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SearchRecord> {
        self.index.search(query, self.search_limit)
    }

    /// A fresh router for one browsing session over this site's routes.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new(self.routes.clone(), self.scroll)
    }
}

static BUILTIN: OnceLock<Site> = OnceLock::new();

/// Process-wide built-in site, built on first use.
///
/// # Errors
///
/// Returns an error if the embedded data fails validation. A failed build
/// is not cached.
pub fn builtin() -> Result<&'static Site, SiteError> {
    if let Some(site) = BUILTIN.get() {
        return Ok(site);
    }
    let site = Site::builtin()?;
    Ok(BUILTIN.get_or_init(|| site))
}
