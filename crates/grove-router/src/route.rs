//! Static route table.

use serde::Serialize;

/// Document title used when a route has none.
pub const DEFAULT_TITLE: &str = "Grove";

/// Page a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteName {
    Home,
    Docs,
    Contributors,
}

impl RouteName {
    /// Lowercase name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Docs => "docs",
            Self::Contributors => "contributors",
        }
    }
}

/// A routable page with its static metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Page rendered for this route.
    pub name: RouteName,
    /// Path pattern (exact match).
    pub path: String,
    /// Document title for this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Outcome of matching a path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Path matched a route.
    Matched(&'a Route),
    /// Path matched nothing and the catch-all redirected.
    Redirected {
        /// Redirect target.
        to: &'a Route,
    },
    /// Path matched nothing and there is no usable catch-all.
    NotFound,
}

/// Ordered routes plus an optional catch-all redirect.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Option<String>,
    default_title: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::grove()
    }
}

impl RouteTable {
    /// Create an empty table with no catch-all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
            default_title: DEFAULT_TITLE.to_owned(),
        }
    }

    /// The docs site routes: home, docs and contributors, with every other
    /// path redirected to home.
    #[must_use]
    pub fn grove() -> Self {
        Self::empty()
            .with_route(RouteName::Home, "/", Some("Grove — Go Foundation CLI"))
            .with_route(RouteName::Docs, "/docs", Some("Docs — Grove"))
            .with_route(
                RouteName::Contributors,
                "/contributors",
                Some("Contributors — Grove"),
            )
            .with_fallback("/")
    }

    /// Add a route.
    #[must_use]
    pub fn with_route(mut self, name: RouteName, path: &str, title: Option<&str>) -> Self {
        self.routes.push(Route {
            name,
            path: path.to_owned(),
            title: title.map(str::to_owned),
        });
        self
    }

    /// Redirect unmatched paths to `path`.
    #[must_use]
    pub fn with_fallback(mut self, path: &str) -> Self {
        self.fallback = Some(path.to_owned());
        self
    }

    /// Set the title used for routes without one.
    #[must_use]
    pub fn with_default_title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.default_title);
        self
    }

    /// All routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Title used for routes without one.
    #[must_use]
    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    /// Document title for a resolved route.
    #[must_use]
    pub fn title_for<'a>(&'a self, route: Option<&'a Route>) -> &'a str {
        route
            .and_then(|r| r.title.as_deref())
            .unwrap_or(&self.default_title)
    }

    /// Find the route for a path.
    ///
    /// Matching ignores ASCII case and a trailing slash, so `/Docs/` finds
    /// `/docs`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Route> {
        let wanted = trim_trailing_slash(path);
        self.routes
            .iter()
            .find(|route| trim_trailing_slash(&route.path).eq_ignore_ascii_case(wanted))
    }

    /// Match a path, following the catch-all redirect once.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        if let Some(route) = self.find(path) {
            return Resolution::Matched(route);
        }

        match self.fallback.as_deref().and_then(|target| self.find(target)) {
            Some(to) => Resolution::Redirected { to },
            None => Resolution::NotFound,
        }
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
