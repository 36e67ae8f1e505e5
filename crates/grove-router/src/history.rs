//! Hash history with per-entry saved scroll positions.

use serde::Serialize;

use crate::location::Location;
use crate::scroll::ScrollPosition;

/// One history entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub location: Location,
    /// Scroll position recorded when the entry was left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollPosition>,
}

impl HistoryEntry {
    fn new(location: Location) -> Self {
        Self {
            location,
            scroll: None,
        }
    }
}

/// Linear session history, as kept by the browser for hash changes.
///
/// Always holds at least one entry.
#[derive(Clone, Debug)]
pub struct HashHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl HashHistory {
    /// History with a single entry.
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            entries: vec![HistoryEntry::new(location)],
            index: 0,
        }
    }

    /// The active entry.
    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Add an entry after the current one, dropping any forward entries.
    ///
    /// `leaving` is recorded on the entry being left.
    pub fn push(&mut self, location: Location, leaving: ScrollPosition) {
        self.entries[self.index].scroll = Some(leaving);
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::new(location));
        self.index += 1;
    }

    /// Replace the current entry. Its saved scroll is discarded.
    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = HistoryEntry::new(location);
    }

    /// Move `delta` entries, recording `leaving` on the entry being left.
    ///
    /// Returns the new current entry, or `None` (and changes nothing) when
    /// the move would leave the history bounds or `delta` is zero.
    pub fn go(&mut self, delta: isize, leaving: ScrollPosition) -> Option<&HistoryEntry> {
        let target = self
            .index
            .checked_add_signed(delta)
            .filter(|target| *target < self.entries.len() && *target != self.index)?;

        self.entries[self.index].scroll = Some(leaving);
        self.index = target;
        Some(&self.entries[target])
    }

    pub fn back(&mut self, leaving: ScrollPosition) -> Option<&HistoryEntry> {
        self.go(-1, leaving)
    }

    pub fn forward(&mut self, leaving: ScrollPosition) -> Option<&HistoryEntry> {
        self.go(1, leaving)
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of the current entry.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64) -> ScrollPosition {
        ScrollPosition::new(0.0, top)
    }

    #[test]
    fn test_push_records_leaving_scroll() {
        let mut history = HashHistory::new(Location::new("/"));

        history.push(Location::new("/docs"), at(300.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.index(), 1);
        assert_eq!(history.entries()[0].scroll, Some(at(300.0)));
        assert_eq!(history.current().location.path, "/docs");
        assert_eq!(history.current().scroll, None);
    }

    #[test]
    fn test_back_returns_saved_position() {
        let mut history = HashHistory::new(Location::new("/"));
        history.push(Location::new("/docs"), at(300.0));

        let entry = history.back(at(900.0)).unwrap();

        assert_eq!(entry.location.path, "/");
        assert_eq!(entry.scroll, Some(at(300.0)));
        assert_eq!(history.entries()[1].scroll, Some(at(900.0)));
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = HashHistory::new(Location::new("/"));
        history.push(Location::new("/docs"), at(0.0));
        history.back(at(900.0));

        let entry = history.forward(at(10.0)).unwrap();

        assert_eq!(entry.location.path, "/docs");
        assert_eq!(entry.scroll, Some(at(900.0)));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = HashHistory::new(Location::new("/"));
        history.push(Location::new("/docs"), at(0.0));
        history.back(at(0.0));

        history.push(Location::new("/contributors"), at(0.0));

        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.current().location.path, "/contributors");
    }

    #[test]
    fn test_go_out_of_bounds_changes_nothing() {
        let mut history = HashHistory::new(Location::new("/"));

        assert!(history.back(at(50.0)).is_none());
        assert!(history.forward(at(50.0)).is_none());
        assert!(history.go(0, at(50.0)).is_none());
        assert_eq!(history.current().scroll, None);
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_replace_discards_saved_scroll() {
        let mut history = HashHistory::new(Location::new("/"));
        history.push(Location::new("/docs"), at(0.0));
        history.back(at(700.0));
        history.forward(at(0.0));

        history.replace(Location::new("/docs").with_hash("intro"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().scroll, None);
        assert_eq!(history.current().location.hash.as_deref(), Some("intro"));
    }
}
