//! Navigation state machine.

use serde::Serialize;

use crate::history::HashHistory;
use crate::location::Location;
use crate::route::{Resolution, Route, RouteTable};
use crate::scroll::{ScrollOptions, ScrollPlan, ScrollPosition, plan_scroll};
use crate::viewport::Viewport;

/// Where the router is in the current navigation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPhase {
    /// No navigation in flight.
    Idle,
    /// Matching the requested path.
    Resolving,
    /// Route resolved, waiting for the view to mount.
    Rendering,
    /// No route matched and the table has no catch-all.
    NotFound,
}

/// What started a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTrigger {
    /// First load of the page.
    Initial,
    /// Link click or programmatic navigation.
    Push,
    /// Programmatic navigation replacing the current entry.
    Replace,
    /// Browser back or forward.
    Traverse,
    /// Fragment changed outside the router.
    HashChange,
}

/// A resolved navigation waiting for its view to mount.
///
/// Hand it back to [`Router::complete`] once the view is in the page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PendingNavigation {
    /// Monotonic navigation id.
    pub id: u64,
    pub trigger: NavigationTrigger,
    /// Location as requested.
    pub requested: Location,
    /// Location after redirects. This is what history records.
    pub location: Location,
    /// Matched route, `None` when not found.
    pub route: Option<Route>,
    /// Whether the catch-all redirect was taken.
    pub redirected: bool,
    /// Document title to set on completion.
    pub title: String,
    /// Scroll to apply on completion.
    pub scroll: ScrollPlan,
}

/// Result of completing a pending navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Title set and scroll plan applied. `scrolled_to` is `None` when the
    /// anchor element was not in the page.
    Applied {
        title: String,
        scrolled_to: Option<ScrollPosition>,
    },
    /// A newer navigation was started (or this one already completed);
    /// nothing was applied.
    Superseded,
}

/// Hash router: route table, history and the navigation cycle.
#[derive(Debug)]
pub struct Router {
    routes: RouteTable,
    scroll: ScrollOptions,
    history: HashHistory,
    phase: NavigationPhase,
    next_id: u64,
    pending: Option<u64>,
}

impl Router {
    /// Create a router positioned at `/`.
    #[must_use]
    pub fn new(routes: RouteTable, scroll: ScrollOptions) -> Self {
        Self {
            routes,
            scroll,
            history: HashHistory::new(Location::new("/")),
            phase: NavigationPhase::Idle,
            next_id: 1,
            pending: None,
        }
    }

    /// Router over the built-in site routes with default scroll options.
    #[must_use]
    pub fn grove() -> Self {
        Self::new(RouteTable::grove(), ScrollOptions::default())
    }

    /// Initial navigation for the page's starting URL.
    pub fn start(&mut self, href: &str) -> PendingNavigation {
        let pending = self.resolve(Location::parse(href), NavigationTrigger::Initial, None);
        self.history = HashHistory::new(pending.location.clone());
        pending
    }

    /// Navigate to `href`, adding a history entry.
    pub fn push(&mut self, href: &str, viewport: &dyn Viewport) -> PendingNavigation {
        self.push_entry(href, NavigationTrigger::Push, viewport)
    }

    /// Navigate to `href`, replacing the current history entry.
    pub fn replace(&mut self, href: &str) -> PendingNavigation {
        let pending = self.resolve(Location::parse(href), NavigationTrigger::Replace, None);
        self.history.replace(pending.location.clone());
        pending
    }

    /// The browser changed the fragment (address bar edit, plain anchor link).
    pub fn hash_changed(&mut self, href: &str, viewport: &dyn Viewport) -> PendingNavigation {
        self.push_entry(href, NavigationTrigger::HashChange, viewport)
    }

    /// Go back one entry. Returns `None` at the start of history.
    pub fn back(&mut self, viewport: &dyn Viewport) -> Option<PendingNavigation> {
        self.traverse(-1, viewport)
    }

    /// Go forward one entry. Returns `None` at the end of history.
    pub fn forward(&mut self, viewport: &dyn Viewport) -> Option<PendingNavigation> {
        self.traverse(1, viewport)
    }

    /// Post-render continuation: apply scroll and title once the view for
    /// `pending` is mounted.
    ///
    /// Only the latest navigation is applied; anything older is reported as
    /// superseded and leaves the viewport untouched.
    pub fn complete(
        &mut self,
        pending: &PendingNavigation,
        viewport: &mut dyn Viewport,
    ) -> Completion {
        if self.pending != Some(pending.id) {
            tracing::debug!(id = pending.id, latest = ?self.pending, "Navigation superseded");
            return Completion::Superseded;
        }

        let scrolled_to = pending.scroll.apply(viewport);
        viewport.set_title(&pending.title);

        self.pending = None;
        self.transition(NavigationPhase::Idle, pending.id);

        Completion::Applied {
            title: pending.title.clone(),
            scrolled_to,
        }
    }

    #[must_use]
    pub fn phase(&self) -> NavigationPhase {
        self.phase
    }

    /// Location of the current history entry.
    #[must_use]
    pub fn current(&self) -> &Location {
        &self.history.current().location
    }

    #[must_use]
    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn scroll_options(&self) -> &ScrollOptions {
        &self.scroll
    }

    fn push_entry(
        &mut self,
        href: &str,
        trigger: NavigationTrigger,
        viewport: &dyn Viewport,
    ) -> PendingNavigation {
        let pending = self.resolve(Location::parse(href), trigger, None);
        self.history
            .push(pending.location.clone(), viewport.scroll_position());
        pending
    }

    fn traverse(&mut self, delta: isize, viewport: &dyn Viewport) -> Option<PendingNavigation> {
        let entry = self.history.go(delta, viewport.scroll_position())?;
        let (location, saved) = (entry.location.clone(), entry.scroll);
        Some(self.resolve(location, NavigationTrigger::Traverse, saved))
    }

    fn resolve(
        &mut self,
        requested: Location,
        trigger: NavigationTrigger,
        saved: Option<ScrollPosition>,
    ) -> PendingNavigation {
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);
        self.transition(NavigationPhase::Resolving, id);

        let (location, route, redirected, phase) = match self.routes.resolve(&requested.path) {
            Resolution::Matched(route) => (
                requested.clone(),
                Some(route.clone()),
                false,
                NavigationPhase::Rendering,
            ),
            // Redirect target is a bare route path
            Resolution::Redirected { to } => (
                Location::new(&to.path),
                Some(to.clone()),
                true,
                NavigationPhase::Rendering,
            ),
            Resolution::NotFound => (requested.clone(), None, false, NavigationPhase::NotFound),
        };

        if redirected {
            tracing::debug!(from = %requested, to = %location, "Redirected unmatched path");
        }

        let title = self.routes.title_for(route.as_ref()).to_owned();
        let scroll = plan_scroll(&location, saved, &self.scroll);
        self.transition(phase, id);

        PendingNavigation {
            id,
            trigger,
            requested,
            location,
            route,
            redirected,
            title,
            scroll,
        }
    }

    fn transition(&mut self, phase: NavigationPhase, id: u64) {
        tracing::debug!(id, from = ?self.phase, to = ?phase, "Navigation phase");
        self.phase = phase;
    }
}
