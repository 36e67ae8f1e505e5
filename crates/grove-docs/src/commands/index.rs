//! `grove-docs index` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{SiteArgs, write_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the index command.
#[derive(Args)]
pub(crate) struct IndexArgs {
    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl IndexArgs {
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load(None)?;

        write_json(site.index(), self.pretty, self.output.as_deref())?;

        if let Some(path) = &self.output {
            Output::new().success(&format!(
                "Wrote {} records to {}",
                site.index().len(),
                path.display()
            ));
        }
        Ok(())
    }
}
