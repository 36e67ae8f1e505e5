//! Hash URL parsing.
//!
//! With hash routing the router path lives in the URL fragment, and an item
//! anchor is a second fragment inside it:
//!
//! ```text
//! https://grove.dev/#/docs?tab=go#cmd-serve
//!                    └─┬─┘└──┬─┘└───┬───┘
//!                    path  query   hash
//! ```

use std::fmt;

use serde::Serialize;

/// Router location: path plus optional query and anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Router path, always starting with `/`.
    pub path: String,
    /// Query string without the leading `?`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Anchor id without the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Location {
    /// Location for a bare path.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path),
            query: None,
            hash: None,
        }
    }

    /// Set the anchor id.
    #[must_use]
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = non_empty(hash);
        self
    }

    /// Parse a full URL, a hash (`#/docs#id`) or a router path (`/docs#id`).
    ///
    /// Never fails: anything unrecognizable becomes a path that the route
    /// table will redirect.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove_router::Location;
    ///
    /// let location = Location::parse("https://grove.dev/#/docs#cmd-serve");
    /// assert_eq!(location.path, "/docs");
    /// assert_eq!(location.hash.as_deref(), Some("cmd-serve"));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let route_part = if has_scheme(input) {
            // Router state lives entirely in the fragment of a full URL
            input.split_once('#').map_or("", |(_, fragment)| fragment)
        } else {
            input.strip_prefix('#').unwrap_or(input)
        };

        let (rest, hash) = match route_part.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (route_part, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        Self {
            path: normalize_path(path),
            query,
            hash,
        }
    }

    /// Path with query and anchor, as the router sees it (`/docs#id`).
    #[must_use]
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }
        out
    }

    /// Browser `href` for this location (`#/docs#id`).
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.full_path())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

/// Whether `input` starts with `scheme://`. A `://` after the first `/`,
/// `?` or `#` belongs to a path or query, not a scheme.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
