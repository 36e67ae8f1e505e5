//! Validated documentation corpus with id lookups.
//!
//! # Architecture
//!
//! Sections are stored in their authored order. Two indexes are built at
//! construction time:
//! - `section_index`: section id → section position
//! - `item_index`: item id → (section position, item position)
//!
//! This gives O(1) anchor resolution while keeping the ordered tree as the
//! single source of truth. A [`Corpus`] is never mutated after construction.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::BUILTIN_DOCS;
use crate::error::ContentError;
use crate::model::{Block, Item, Section};
use crate::raw::RawCorpus;

/// Route path of the docs page. Item anchors live under it.
pub const DOCS_PATH: &str = "/docs";

/// Deep link to an item on the docs page (e.g. `/docs#cmd-serve`).
#[must_use]
pub fn docs_url(item_id: &str) -> String {
    format!("{DOCS_PATH}#{item_id}")
}

/// An item together with its owning section.
#[derive(Clone, Copy, Debug)]
pub struct ItemRef<'a> {
    pub section: &'a Section,
    pub item: &'a Item,
}

/// Sidebar group for one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Section id.
    pub id: String,
    /// Section title.
    pub title: String,
    /// Links to the section's items, in order.
    pub items: Vec<NavLink>,
}

/// Sidebar link to one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Item id (anchor).
    pub id: String,
    /// Item title.
    pub title: String,
    /// Deep link (`/docs#<id>`).
    pub url: String,
}

/// Immutable, validated documentation corpus.
#[derive(Debug)]
pub struct Corpus {
    sections: Vec<Section>,
    section_index: HashMap<String, usize>,
    item_index: HashMap<String, (usize, usize)>,
}

impl Corpus {
    /// Validate sections and build lookup indexes.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid or duplicate section/item id, or a
    /// table row whose length differs from its header.
    pub fn new(sections: Vec<Section>) -> Result<Self, ContentError> {
        let mut section_index = HashMap::with_capacity(sections.len());
        let mut item_index = HashMap::new();

        for (s, section) in sections.iter().enumerate() {
            check_id("section", &section.id)?;
            if section_index.insert(section.id.clone(), s).is_some() {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }

            for (i, item) in section.items.iter().enumerate() {
                check_id("item", &item.id)?;
                if let Some((first, _)) = item_index.insert(item.id.clone(), (s, i)) {
                    return Err(ContentError::DuplicateItem {
                        id: item.id.clone(),
                        first: sections[first].id.clone(),
                        second: section.id.clone(),
                    });
                }
                check_tables(item)?;
            }
        }

        Ok(Self {
            sections,
            section_index,
            item_index,
        })
    }

    /// Parse and validate a corpus from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a block tag is unknown,
    /// or validation fails.
    pub fn from_yaml(content: &str) -> Result<Self, ContentError> {
        let sections = RawCorpus::from_yaml(content)?.into_sections()?;
        let corpus = Self::new(sections)?;

        tracing::info!(
            sections = corpus.sections.len(),
            items = corpus.item_count(),
            "Corpus loaded"
        );

        Ok(corpus)
    }

    /// Load the corpus compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails validation.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_DOCS)
    }

    /// Load a corpus from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loading corpus from file");
        Self::from_yaml(&content)
    }

    /// Sections in navigation order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_index.get(id).map(|&s| &self.sections[s])
    }

    /// Get item by anchor id, with its owning section.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<ItemRef<'_>> {
        self.item_index.get(id).map(|&(s, i)| {
            let section = &self.sections[s];
            ItemRef {
                section,
                item: &section.items[i],
            }
        })
    }

    /// Check whether an anchor id names an item.
    #[must_use]
    pub fn contains_item(&self, id: &str) -> bool {
        self.item_index.contains_key(id)
    }

    /// All items in pre-order (section order, then item order).
    pub fn items(&self) -> impl Iterator<Item = ItemRef<'_>> {
        self.sections.iter().flat_map(|section| {
            section
                .items
                .iter()
                .map(move |item| ItemRef { section, item })
        })
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_index.len()
    }

    /// Build the sidebar navigation tree.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavSection> {
        self.sections
            .iter()
            .map(|section| NavSection {
                id: section.id.clone(),
                title: section.title.clone(),
                items: section
                    .items
                    .iter()
                    .map(|item| NavLink {
                        id: item.id.clone(),
                        title: item.title.clone(),
                        url: docs_url(&item.id),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Ids double as URL fragments, so they must survive a round trip through one.
fn check_id(kind: &'static str, id: &str) -> Result<(), ContentError> {
    let valid = !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '#' | '/' | '?'));

    if valid {
        Ok(())
    } else {
        Err(ContentError::InvalidId {
            kind,
            id: id.to_owned(),
        })
    }
}

fn check_tables(item: &Item) -> Result<(), ContentError> {
    for (block, content) in item.blocks.iter().enumerate() {
        let Block::Table { head, rows } = content else {
            continue;
        };
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != head.len())
        {
            return Err(ContentError::RaggedTable {
                item: item.id.clone(),
                block,
                row,
                expected: head.len(),
                found: cells.len(),
            });
        }
    }
    Ok(())
}
