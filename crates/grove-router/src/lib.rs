//! Hash-based client router for the Grove docs site.
//!
//! This crate provides:
//! - [`RouteTable`]: static routes with a catch-all redirect to home
//! - [`Location`]: parsed hash URLs (`#/docs#cmd-serve`)
//! - [`HashHistory`]: history entries with saved scroll positions
//! - [`Router`]: the per-navigation state machine
//!
//! # Navigation cycle
//!
//! ```text
//! Idle → Resolving → Rendering | NotFound → Idle
//! ```
//!
//! A navigation call (`push`, `back`, ...) resolves the route and returns a
//! [`PendingNavigation`]. The host mounts the view and then calls
//! [`Router::complete`], which applies the scroll plan and document title
//! through the [`Viewport`] trait. Only the latest navigation is completed;
//! older ones are reported as superseded.
//!
//! ```
//! use grove_router::{Router, ScrollPosition, Viewport, ScrollBehavior};
//!
//! struct Page { scroll: ScrollPosition, title: String }
//!
//! impl Viewport for Page {
//!     fn element_position(&self, id: &str) -> Option<ScrollPosition> {
//!         (id == "cmd-serve").then_some(ScrollPosition::new(0.0, 1200.0))
//!     }
//!     fn scroll_position(&self) -> ScrollPosition { self.scroll }
//!     fn scroll_to(&mut self, position: ScrollPosition, _behavior: ScrollBehavior) {
//!         self.scroll = position;
//!     }
//!     fn set_title(&mut self, title: &str) { self.title = title.to_owned(); }
//! }
//!
//! let mut page = Page { scroll: ScrollPosition::default(), title: String::new() };
//! let mut router = Router::grove();
//!
//! let pending = router.push("#/docs#cmd-serve", &page);
//! router.complete(&pending, &mut page);
//!
//! assert_eq!(page.scroll.top, 1120.0);
//! assert_eq!(page.title, "Docs — Grove");
//! ```

mod history;
mod location;
mod route;
mod router;
mod scroll;
mod viewport;

pub use history::{HashHistory, HistoryEntry};
pub use location::Location;
pub use route::{DEFAULT_TITLE, Resolution, Route, RouteName, RouteTable};
pub use router::{Completion, NavigationPhase, NavigationTrigger, PendingNavigation, Router};
pub use scroll::{
    DEFAULT_SCROLL_OFFSET, ScrollBehavior, ScrollOptions, ScrollPlan, ScrollPosition, plan_scroll,
};
pub use viewport::Viewport;
