//! Configuration management for the Grove docs site.
//!
//! Parses `grove-docs.toml` with serde and discovers it in the current
//! directory or its parents. Every setting has a default, so a missing file
//! means the built-in corpus with stock router and search settings.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`; a bare `$` is
//! kept as written. Expanded fields:
//! - `site.title`
//! - `content.docs`
//! - `content.contributors`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the docs corpus file.
    pub docs: Option<PathBuf>,
    /// Override the contributors roster file.
    pub contributors: Option<PathBuf>,
    /// Override the search result limit.
    pub search_limit: Option<usize>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "grove-docs.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Content sources as written in TOML.
    content: ContentConfigRaw,
    /// Navigation and scroll settings.
    pub router: RouterConfig,
    /// Search settings.
    pub search: SearchConfig,

    /// Content sources with paths resolved against the config file.
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title used for routes without their own.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Grove".to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentConfigRaw {
    docs: Option<String>,
    contributors: Option<String>,
}

/// Content sources. `None` selects the corpus compiled into the binary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Docs corpus YAML file.
    pub docs: Option<PathBuf>,
    /// Contributors roster YAML file.
    pub contributors: Option<PathBuf>,
}

/// Navigation and scroll settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Distance kept between an anchor target and the viewport top.
    pub scroll_offset: f64,
    /// Animate anchor and top scrolls.
    pub smooth: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 80.0,
            smooth: true,
        }
    }
}

/// Search settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results returned by a query.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: 20 }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`content.docs`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise
    /// searches for `grove-docs.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after path resolution and take precedence.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Search for the config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title cannot be empty".to_owned(),
            ));
        }

        let offset = self.router.scroll_offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::Validation(format!(
                "router.scroll_offset must be a non-negative number, got {offset}"
            )));
        }

        if self.search.limit == 0 {
            return Err(ConfigError::Validation(
                "search.limit must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(docs) = &settings.docs {
            self.content_resolved.docs = Some(docs.clone());
        }
        if let Some(contributors) = &settings.contributors {
            self.content_resolved.contributors = Some(contributors.clone());
        }
        if let Some(limit) = settings.search_limit {
            self.search.limit = limit;
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand before resolving so variables can carry paths
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;

        if let Some(docs) = &self.content.docs {
            self.content.docs = Some(expand::expand_env(docs, "content.docs")?);
        }
        if let Some(contributors) = &self.content.contributors {
            self.content.contributors =
                Some(expand::expand_env(contributors, "content.contributors")?);
        }

        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>| path.map(|p| config_dir.join(p));

        self.content_resolved = ContentConfig {
            docs: resolve(self.content.docs.as_deref()),
            contributors: resolve(self.content.contributors.as_deref()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.site.title, "Grove");
        assert_eq!(config.content_resolved, ContentConfig::default());
        assert!((config.router.scroll_offset - 80.0).abs() < f64::EPSILON);
        assert!(config.router.smooth);
        assert_eq!(config.search.limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.site.title, "Grove");
        assert_eq!(config.search.limit, 20);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
title = "Grove Handbook"

[content]
docs = "content/docs.yaml"
contributors = "content/contributors.yaml"

[router]
scroll_offset = 64
smooth = false

[search]
limit = 5
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site.title, "Grove Handbook");
        assert!((config.router.scroll_offset - 64.0).abs() < f64::EPSILON);
        assert!(!config.router.smooth);
        assert_eq!(config.search.limit, 5);
        assert_eq!(
            config.content_resolved,
            ContentConfig {
                docs: Some(PathBuf::from("/project/content/docs.yaml")),
                contributors: Some(PathBuf::from("/project/content/contributors.yaml")),
            }
        );
    }

    #[test]
    fn test_unset_content_stays_builtin() {
        let mut config: Config = toml::from_str("[content]\n").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert!(config.content_resolved.docs.is_none());
        assert!(config.content_resolved.contributors.is_none());
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let result: Result<Config, _> = toml::from_str("[search]\nlimit = \"many\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default();
        config.site.title = "  ".to_owned();

        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_negative_offset() {
        let mut config = Config::default();
        config.router.scroll_offset = -1.0;

        assert_validation_error(&config, &["router.scroll_offset"]);
    }

    #[test]
    fn test_validate_non_finite_offset() {
        let mut config = Config::default();
        config.router.scroll_offset = f64::NAN;

        assert_validation_error(&config, &["router.scroll_offset"]);
    }

    #[test]
    fn test_validate_zero_limit() {
        let mut config = Config::default();
        config.search.limit = 0;

        assert_validation_error(&config, &["search.limit", "greater than 0"]);
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            docs: Some(PathBuf::from("/custom/docs.yaml")),
            search_limit: Some(3),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.content_resolved.docs,
            Some(PathBuf::from("/custom/docs.yaml"))
        );
        assert!(config.content_resolved.contributors.is_none());
        assert_eq!(config.search.limit, 3);
    }

    #[test]
    fn test_expand_env_vars_content_paths() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("GROVE_TEST_CONTENT_DIR", "shared");
        }
        let toml = r#"
[content]
docs = "${GROVE_TEST_CONTENT_DIR}/docs.yaml"
contributors = "${GROVE_TEST_ROSTER:-people.yaml}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.content_resolved.docs,
            Some(PathBuf::from("/project/shared/docs.yaml"))
        );
        assert_eq!(
            config.content_resolved.contributors,
            Some(PathBuf::from("/project/people.yaml"))
        );
        unsafe {
            std::env::remove_var("GROVE_TEST_CONTENT_DIR");
        }
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[content]\ndocs = \"docs.yaml\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.content_resolved.docs, Some(dir.path().join("docs.yaml")));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[search]\nlimit = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            search_limit: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(err.to_string().contains("search.limit"));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_from_ignores_directory_with_config_name() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(CONFIG_FILENAME);
        std::fs::create_dir_all(&nested).unwrap();

        let found = Config::discover_from(&nested);

        assert_ne!(found, Some(nested));
    }
}
