//! Term matching over a built [`SearchIndex`].

use crate::index::{SearchIndex, SearchRecord};

impl SearchIndex {
    /// Find records matching every whitespace-separated term of `query`.
    ///
    /// Matching is a case-insensitive substring test against the record's
    /// title, section title and text. Records whose title holds every term
    /// come first; otherwise index order is kept. At most `limit` records
    /// are returned, and an empty query returns nothing.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SearchRecord> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut title_hits = Vec::new();
        let mut body_hits = Vec::new();

        for record in self.records() {
            let title = record.title.to_lowercase();
            if terms.iter().all(|term| title.contains(term.as_str())) {
                title_hits.push(record);
                continue;
            }

            let section = record.section.to_lowercase();
            let text = record.text.to_lowercase();
            let matches = terms.iter().all(|term| {
                title.contains(term.as_str())
                    || section.contains(term.as_str())
                    || text.contains(term.as_str())
            });
            if matches {
                body_hits.push(record);
            }
        }

        tracing::debug!(
            query,
            title_hits = title_hits.len(),
            body_hits = body_hits.len(),
            "Search completed"
        );

        title_hits.into_iter().chain(body_hits).take(limit).collect()
    }
}
