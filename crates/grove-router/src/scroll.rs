//! Scroll restoration policy.
//!
//! Evaluated once per navigation, in priority order:
//! 1. A saved position for the history entry (back/forward) is restored exactly.
//! 2. An anchor scrolls its element to `offset` units below the viewport top,
//!    clearing the fixed header.
//! 3. Otherwise the page scrolls to the top.

use serde::Serialize;

use crate::location::Location;
use crate::viewport::Viewport;

/// Height of the fixed site header.
pub const DEFAULT_SCROLL_OFFSET: f64 = 80.0;

/// Document scroll coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// How a scroll is animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    /// Animate.
    Smooth,
}

impl ScrollBehavior {
    /// Value of the DOM `ScrollToOptions.behavior` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Smooth => "smooth",
        }
    }
}

/// Tunables for anchor and top scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollOptions {
    /// Distance kept between an anchor target and the viewport top.
    pub offset: f64,
    /// Behavior for anchor and top scrolls. Restores are always immediate.
    pub behavior: ScrollBehavior,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_SCROLL_OFFSET,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Scroll decided for a navigation, applied after the view is mounted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScrollPlan {
    /// Return to a position saved in history.
    Restore { position: ScrollPosition },
    /// Bring an element into view below the header.
    Anchor {
        id: String,
        offset: f64,
        behavior: ScrollBehavior,
    },
    /// Scroll to the top of the page.
    Top { behavior: ScrollBehavior },
}

/// Decide how to scroll for a resolved location.
#[must_use]
pub fn plan_scroll(
    target: &Location,
    saved: Option<ScrollPosition>,
    options: &ScrollOptions,
) -> ScrollPlan {
    if let Some(position) = saved {
        return ScrollPlan::Restore { position };
    }

    match &target.hash {
        Some(id) => ScrollPlan::Anchor {
            id: id.clone(),
            offset: options.offset,
            behavior: options.behavior,
        },
        None => ScrollPlan::Top {
            behavior: options.behavior,
        },
    }
}

impl ScrollPlan {
    /// Apply the plan to a mounted view.
    ///
    /// Returns the position scrolled to, or `None` when the anchor element
    /// is not in the page (nothing is scrolled then).
    pub fn apply(&self, viewport: &mut dyn Viewport) -> Option<ScrollPosition> {
        let (position, behavior) = match self {
            Self::Restore { position } => (*position, ScrollBehavior::Auto),
            Self::Anchor {
                id,
                offset,
                behavior,
            } => {
                let Some(element) = viewport.element_position(id) else {
                    tracing::warn!(anchor = %id, "Anchor element not found, skipping scroll");
                    return None;
                };
                (
                    ScrollPosition::new(element.left, element.top - offset),
                    *behavior,
                )
            }
            Self::Top { behavior } => (ScrollPosition::default(), *behavior),
        };

        viewport.scroll_to(position, behavior);
        Some(position)
    }
}
