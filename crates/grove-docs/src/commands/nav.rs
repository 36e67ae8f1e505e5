//! `grove-docs nav` command implementation.

use clap::Args;

use super::{SiteArgs, write_json};
use crate::error::CliError;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Print compact JSON.
    #[arg(long)]
    compact: bool,
}

impl NavArgs {
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load(None)?;
        write_json(&site.navigation(), !self.compact, None)
    }
}
