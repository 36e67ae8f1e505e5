//! `grove-docs search` command implementation.

use std::io::Write;

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Search terms; every term must match.
    query: String,

    /// Maximum number of results (overrides config).
    #[arg(short, long)]
    limit: Option<usize>,
}

impl SearchArgs {
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let output = Output::new();
        let site = site_args.load(self.limit)?;

        let hits = site.search(&self.query);
        if hits.is_empty() {
            output.warning(&format!("No results for \"{}\"", self.query));
            return Ok(());
        }

        output.info(&format!("{} result(s)", hits.len()));
        let mut stdout = std::io::stdout().lock();
        for record in hits {
            writeln!(
                stdout,
                "{}\t{} ({})",
                record.url, record.title, record.section
            )?;
        }
        Ok(())
    }
}
