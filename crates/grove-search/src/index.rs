//! Search index derivation.

use grove_content::{Block, Corpus, Item, docs_url};
use serde::Serialize;

use crate::text::strip_tags;

/// Flattened, plain-text projection of one corpus item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Item id.
    pub id: String,
    /// Item title.
    pub title: String,
    /// Owning section title.
    pub section: String,
    /// Owning section id.
    pub section_id: String,
    /// Paragraph and note text, space-joined, tags stripped.
    pub text: String,
    /// Deep link (`/docs#<id>`).
    pub url: String,
}

/// Ordered search records, one per corpus item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    /// Records in corpus pre-order.
    #[must_use]
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derive the search index from a corpus.
///
/// Pure: the same corpus always yields an identical index. The corpus is
/// assumed valid; nothing is checked here.
#[must_use]
pub fn build_index(corpus: &Corpus) -> SearchIndex {
    let records: Vec<_> = corpus
        .items()
        .map(|entry| SearchRecord {
            id: entry.item.id.clone(),
            title: entry.item.title.clone(),
            section: entry.section.title.clone(),
            section_id: entry.section.id.clone(),
            text: item_text(entry.item),
            url: docs_url(&entry.item.id),
        })
        .collect();

    tracing::debug!(records = records.len(), "Search index built");

    SearchIndex { records }
}

/// Searchable text of an item: paragraph and note text in block order.
fn item_text(item: &Item) -> String {
    let joined = item
        .blocks
        .iter()
        .filter_map(searchable_text)
        .collect::<Vec<_>>()
        .join(" ");

    strip_tags(&joined).into_owned()
}

fn searchable_text(block: &Block) -> Option<&str> {
    match block {
        Block::Paragraph { text } | Block::Note { text, .. } => Some(text.as_str()),
        Block::Code { .. } | Block::Table { .. } | Block::Steps { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use grove_content::{NoteKind, Section, Step};
    use pretty_assertions::assert_eq;

    use super::*;

    fn corpus(sections: Vec<Section>) -> Corpus {
        Corpus::new(sections).unwrap()
    }

    fn single_item(blocks: Vec<Block>) -> Corpus {
        corpus(vec![Section {
            id: "s".to_owned(),
            title: "S".to_owned(),
            items: vec![Item {
                id: "i".to_owned(),
                title: "I".to_owned(),
                blocks,
            }],
        }])
    }

    #[test]
    fn test_two_section_scenario() {
        let corpus = corpus(vec![
            Section {
                id: "getting-started".to_owned(),
                title: "Getting Started".to_owned(),
                items: vec![Item {
                    id: "intro".to_owned(),
                    title: "Intro".to_owned(),
                    blocks: vec![
                        Block::Paragraph {
                            text: "Grove is a CLI.".to_owned(),
                        },
                        Block::Code {
                            lang: "bash".to_owned(),
                            label: "terminal".to_owned(),
                            code: "grove --help".to_owned(),
                        },
                    ],
                }],
            },
            Section {
                id: "commands".to_owned(),
                title: "Commands".to_owned(),
                items: vec![Item {
                    id: "cmd-serve".to_owned(),
                    title: "grove serve".to_owned(),
                    blocks: vec![Block::Note {
                        kind: NoteKind::Tip,
                        text: "Use <code>air</code> for reload.".to_owned(),
                    }],
                }],
            },
        ]);

        let index = build_index(&corpus);

        assert_eq!(
            index.records(),
            &[
                SearchRecord {
                    id: "intro".to_owned(),
                    title: "Intro".to_owned(),
                    section: "Getting Started".to_owned(),
                    section_id: "getting-started".to_owned(),
                    text: "Grove is a CLI.".to_owned(),
                    url: "/docs#intro".to_owned(),
                },
                SearchRecord {
                    id: "cmd-serve".to_owned(),
                    title: "grove serve".to_owned(),
                    section: "Commands".to_owned(),
                    section_id: "commands".to_owned(),
                    text: "Use air for reload.".to_owned(),
                    url: "/docs#cmd-serve".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_blocks_yield_empty_text() {
        let index = build_index(&single_item(Vec::new()));

        assert_eq!(index.len(), 1);
        assert_eq!(index.records()[0].text, "");
    }

    #[test]
    fn test_code_table_steps_contribute_nothing() {
        let index = build_index(&single_item(vec![
            Block::Code {
                lang: "go".to_owned(),
                label: "main.go".to_owned(),
                code: "package main".to_owned(),
            },
            Block::Table {
                head: vec!["Tool".to_owned()],
                rows: vec![vec!["Go".to_owned()]],
            },
            Block::Steps {
                items: vec![Step {
                    title: "Run".to_owned(),
                    text: "Run it".to_owned(),
                }],
            },
        ]));

        assert_eq!(index.records()[0].text, "");
    }

    #[test]
    fn test_text_joined_with_single_space_in_block_order() {
        let index = build_index(&single_item(vec![
            Block::Paragraph {
                text: "First.".to_owned(),
            },
            Block::Code {
                lang: "bash".to_owned(),
                label: "terminal".to_owned(),
                code: "skipped".to_owned(),
            },
            Block::Note {
                kind: NoteKind::Warning,
                text: "<strong>Second.</strong>".to_owned(),
            },
            Block::Paragraph {
                text: "Third.".to_owned(),
            },
        ]));

        assert_eq!(index.records()[0].text, "First. Second. Third.");
    }

    #[test]
    fn test_whitespace_is_not_normalized() {
        let index = build_index(&single_item(vec![
            Block::Paragraph {
                text: "Run <code>x</code>  now ".to_owned(),
            },
            Block::Paragraph {
                text: "done".to_owned(),
            },
        ]));

        assert_eq!(index.records()[0].text, "Run x  now  done");
    }

    #[test]
    fn test_build_is_deterministic() {
        let corpus = Corpus::builtin().unwrap();

        let first = build_index(&corpus);
        let second = build_index(&corpus);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_record_serializes_section_id_camel_case() {
        let index = build_index(&single_item(Vec::new()));

        let json = serde_json::to_value(&index).unwrap();

        assert_eq!(json[0]["sectionId"], "s");
        assert_eq!(json[0]["section"], "S");
        assert_eq!(json[0]["url"], "/docs#i");
        assert!(json[0].get("section_id").is_none());
    }

    #[test]
    fn test_empty_corpus_yields_empty_index() {
        let index = build_index(&Corpus::new(Vec::new()).unwrap());

        assert!(index.is_empty());
    }
}
