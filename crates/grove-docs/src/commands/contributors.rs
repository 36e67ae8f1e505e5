//! `grove-docs contributors` command implementation.

use clap::Args;
use grove_content::{ContributionKind, Contributor, Contributors};
use serde::Serialize;

use super::{SiteArgs, write_json};
use crate::error::CliError;

/// Arguments for the contributors command.
#[derive(Args)]
pub(crate) struct ContributorsArgs {
    /// Print compact JSON.
    #[arg(long)]
    compact: bool,
}

impl ContributorsArgs {
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load(None)?;
        write_json(&roster(site.contributors()), !self.compact, None)
    }
}

/// Contributor card as the contributors page renders it.
#[derive(Debug, Serialize)]
struct ContributorCard<'a> {
    login: &'a str,
    name: &'a str,
    avatar: &'a str,
    url: &'a str,
    role: &'a str,
    contributions: Vec<Badge>,
}

#[derive(Debug, PartialEq, Serialize)]
struct Badge {
    kind: ContributionKind,
    label: &'static str,
    icon: &'static str,
}

fn roster(contributors: &Contributors) -> Vec<ContributorCard<'_>> {
    contributors.iter().map(card).collect()
}

fn card(contributor: &Contributor) -> ContributorCard<'_> {
    ContributorCard {
        login: &contributor.login,
        name: &contributor.name,
        avatar: &contributor.avatar,
        url: &contributor.url,
        role: &contributor.role,
        contributions: contributor
            .contributions
            .iter()
            .map(|&kind| Badge {
                kind,
                label: kind.label(),
                icon: kind.icon(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builtin_roster_cards_carry_labels_and_icons() {
        let contributors = Contributors::builtin().unwrap();

        let cards = roster(&contributors);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].login, "caiolandgraf");
        assert_eq!(
            cards[0].contributions,
            vec![
                Badge {
                    kind: ContributionKind::Code,
                    label: "Code",
                    icon: "⬡",
                },
                Badge {
                    kind: ContributionKind::Docs,
                    label: "Docs",
                    icon: "📖",
                },
                Badge {
                    kind: ContributionKind::Design,
                    label: "Design",
                    icon: "🎨",
                },
            ]
        );
    }

    #[test]
    fn test_card_serializes_kind_lowercase() {
        let contributors = Contributors::builtin().unwrap();

        let json = serde_json::to_value(roster(&contributors)).unwrap();

        assert_eq!(json[0]["contributions"][1]["kind"], "docs");
        assert_eq!(json[0]["contributions"][1]["label"], "Docs");
        assert_eq!(json[0]["role"], "Author");
    }
}
