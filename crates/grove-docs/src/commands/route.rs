//! `grove-docs route` command implementation.

use clap::Args;
use grove_router::{ScrollPlan, ScrollPosition, plan_scroll};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the route command.
#[derive(Args)]
pub(crate) struct RouteArgs {
    /// URL, hash (`#/docs#id`) or router path (`/docs#id`).
    url: String,

    /// Saved scroll position of the history entry, as on back/forward.
    #[arg(long)]
    saved_top: Option<f64>,

    /// Print the resolved navigation as JSON.
    #[arg(long)]
    json: bool,
}

impl RouteArgs {
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let output = Output::new();
        let site = site_args.load(None)?;

        let mut router = site.router();
        let mut pending = router.start(&self.url);
        if let Some(top) = self.saved_top {
            let saved = ScrollPosition::new(0.0, top);
            pending.scroll = plan_scroll(&pending.location, Some(saved), site.scroll_options());
        }

        if self.json {
            return super::write_json(&pending, true, None);
        }

        let route = pending.route.as_ref().map_or_else(
            || "not found".to_owned(),
            |route| format!("{} ({})", route.name.as_str(), route.path),
        );
        output.field("Route", &route);
        output.field("Location", &pending.location.href());
        if pending.redirected {
            output.field("From", &pending.requested.href());
        }
        output.field("Title", &pending.title);
        output.field("Scroll", &describe(&pending.scroll));

        if let ScrollPlan::Anchor { id, .. } = &pending.scroll
            && !site.corpus().contains_item(id)
        {
            output.warning(&format!("Anchor \"{id}\" does not match any docs item"));
        }
        Ok(())
    }
}

fn describe(plan: &ScrollPlan) -> String {
    match plan {
        ScrollPlan::Restore { position } => {
            format!("restore to ({}, {})", position.left, position.top)
        }
        ScrollPlan::Anchor {
            id,
            offset,
            behavior,
        } => format!("anchor #{id}, {offset} below top, {}", behavior.as_str()),
        ScrollPlan::Top { behavior } => format!("top, {}", behavior.as_str()),
    }
}
