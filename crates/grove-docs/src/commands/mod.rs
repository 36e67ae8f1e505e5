//! CLI command implementations.

mod check;
mod contributors;
mod index;
mod nav;
mod route;
mod search;

use std::path::PathBuf;

use clap::Args;
use grove_config::{CliSettings, Config};
use grove_site::Site;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use contributors::ContributorsArgs;
pub(crate) use index::IndexArgs;
pub(crate) use nav::NavArgs;
pub(crate) use route::RouteArgs;
pub(crate) use search::SearchArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover grove-docs.toml).
    #[arg(short, long, global = true, env = "GROVE_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Docs corpus YAML file (overrides config).
    #[arg(long, global = true)]
    docs: Option<PathBuf>,

    /// Contributors roster YAML file (overrides config).
    #[arg(long, global = true)]
    contributors: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl SiteArgs {
    /// Load configuration, then build the site from it.
    pub(crate) fn load(&self, search_limit: Option<usize>) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            docs: self.docs.clone(),
            contributors: self.contributors.clone(),
            search_limit,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration file");
        }

        Ok(Site::load(&config)?)
    }
}

/// Write `value` as JSON to `path`, or stdout when `None`.
fn write_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
    path: Option<&std::path::Path>,
) -> Result<(), CliError> {
    use std::io::Write;

    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    match path {
        Some(path) => std::fs::write(path, json)?,
        None => std::io::stdout().lock().write_all(json.as_bytes())?,
    }
    Ok(())
}
