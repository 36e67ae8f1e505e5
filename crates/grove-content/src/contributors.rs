//! Contributor roster shown on the contributors page.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::BUILTIN_CONTRIBUTORS;
use crate::error::ContentError;

/// Kind of contribution credited to a contributor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    Code,
    Docs,
    Design,
    Tests,
    Infra,
    Ideas,
}

impl ContributionKind {
    /// All kinds in display order.
    pub const ALL: [Self; 6] = [
        Self::Code,
        Self::Docs,
        Self::Design,
        Self::Tests,
        Self::Infra,
        Self::Ideas,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Docs => "Docs",
            Self::Design => "Design",
            Self::Tests => "Tests",
            Self::Infra => "Infra",
            Self::Ideas => "Ideas",
        }
    }

    /// Badge icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Code => "⬡",
            Self::Docs => "📖",
            Self::Design => "🎨",
            Self::Tests => "🧪",
            Self::Infra => "⚙️",
            Self::Ideas => "💡",
        }
    }
}

/// A credited project contributor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// GitHub login, unique within the roster.
    pub login: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Profile URL.
    pub url: String,
    /// Role shown under the name (e.g. "Author").
    pub role: String,
    /// Credited contribution kinds.
    #[serde(default)]
    pub contributions: Vec<ContributionKind>,
}

#[derive(Deserialize)]
struct RawRoster {
    #[serde(default)]
    contributors: Vec<Contributor>,
}

/// Validated, ordered contributor roster.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Contributors {
    contributors: Vec<Contributor>,
}

impl Contributors {
    /// Validate a roster.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateContributor` if two entries share a login.
    pub fn new(contributors: Vec<Contributor>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(contributors.len());
        for contributor in &contributors {
            if !seen.insert(contributor.login.as_str()) {
                return Err(ContentError::DuplicateContributor(
                    contributor.login.clone(),
                ));
            }
        }
        Ok(Self { contributors })
    }

    /// Parse and validate a roster from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a login is duplicated.
    pub fn from_yaml(content: &str) -> Result<Self, ContentError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawRoster = serde_yaml::from_str(content)?;
        Self::new(raw.contributors)
    }

    /// Load the roster compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails validation.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_CONTRIBUTORS)
    }

    /// Load a roster from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Get contributor by login.
    #[must_use]
    pub fn get(&self, login: &str) -> Option<&Contributor> {
        self.contributors.iter().find(|c| c.login == login)
    }

    /// Contributors in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Contributor> {
        self.contributors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}
