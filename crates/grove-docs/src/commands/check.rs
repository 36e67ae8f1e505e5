//! `grove-docs check` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Fail when an item has no searchable text.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let output = Output::new();
        let site = site_args.load(None)?;

        let corpus = site.corpus();
        output.highlight(site.routes().default_title());
        output.field("Sections", &corpus.sections().len().to_string());
        output.field("Items", &corpus.item_count().to_string());
        output.field("Records", &site.index().len().to_string());
        output.field("People", &site.contributors().len().to_string());

        let empty: Vec<_> = site
            .index()
            .records()
            .iter()
            .filter(|record| record.text.is_empty())
            .map(|record| record.id.as_str())
            .collect();
        if !empty.is_empty() {
            let message = format!(
                "{} item(s) have no searchable text: {}",
                empty.len(),
                empty.join(", ")
            );
            if self.strict {
                return Err(CliError::Validation(message));
            }
            output.warning(&message);
        }

        output.success("Content is valid");
        Ok(())
    }
}
