//! Host environment seam.

use crate::scroll::{ScrollBehavior, ScrollPosition};

/// The rendered page as the router sees it.
///
/// Implemented by the browser binding in production and by fakes in tests.
pub trait Viewport {
    /// Document-relative position of the element with this id, if mounted.
    fn element_position(&self, id: &str) -> Option<ScrollPosition>;

    /// Current scroll position.
    fn scroll_position(&self) -> ScrollPosition;

    /// Scroll the document.
    fn scroll_to(&mut self, position: ScrollPosition, behavior: ScrollBehavior);

    /// Set the document title.
    fn set_title(&mut self, title: &str);
}
