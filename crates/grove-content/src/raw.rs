//! Raw corpus shape as parsed from YAML.
//!
//! Blocks stay untyped YAML values here so that the `type` tag can be
//! checked against the known kinds before field parsing. This turns an
//! unknown tag into [`ContentError::UnknownBlockType`] instead of a generic
//! serde message.

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::ContentError;
use crate::model::{Block, Item, Section};

#[derive(Debug, Deserialize)]
pub(crate) struct RawCorpus {
    #[serde(default)]
    pub(crate) sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSection {
    id: String,
    title: String,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    id: String,
    title: String,
    #[serde(default)]
    blocks: Vec<Value>,
}

impl RawCorpus {
    /// Parse raw YAML. Empty input yields an empty corpus.
    pub(crate) fn from_yaml(content: &str) -> Result<Self, ContentError> {
        if content.trim().is_empty() {
            return Ok(Self {
                sections: Vec::new(),
            });
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Convert into typed sections, checking every block tag.
    pub(crate) fn into_sections(self) -> Result<Vec<Section>, ContentError> {
        self.sections
            .into_iter()
            .map(RawSection::into_section)
            .collect()
    }
}

impl RawSection {
    fn into_section(self) -> Result<Section, ContentError> {
        let items = self
            .items
            .into_iter()
            .map(RawItem::into_item)
            .collect::<Result<_, _>>()?;

        Ok(Section {
            id: self.id,
            title: self.title,
            items,
        })
    }
}

impl RawItem {
    fn into_item(self) -> Result<Item, ContentError> {
        let blocks = self
            .blocks
            .into_iter()
            .enumerate()
            .map(|(index, value)| parse_block(&self.id, index, value))
            .collect::<Result<_, _>>()?;

        Ok(Item {
            id: self.id,
            title: self.title,
            blocks,
        })
    }
}

fn parse_block(item: &str, index: usize, value: Value) -> Result<Block, ContentError> {
    let tag = match value.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        None | Some(Value::Null) => {
            return Err(ContentError::MissingBlockType {
                item: item.to_owned(),
                index,
            });
        }
        Some(other) => {
            return Err(ContentError::UnknownBlockType {
                item: item.to_owned(),
                tag: render_scalar(other),
            });
        }
    };

    if !Block::TAGS.iter().any(|known| *known == tag) {
        return Err(ContentError::UnknownBlockType {
            item: item.to_owned(),
            tag: tag.to_owned(),
        });
    }

    let tag = tag.to_owned();
    serde_yaml::from_value(value).map_err(|e| ContentError::InvalidBlock {
        item: item.to_owned(),
        tag,
        index,
        message: e.to_string(),
    })
}

/// Render a non-string tag the way it was written (`5`, `true`, `[a]`).
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|rendered| rendered.trim_end().to_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteKind;

    fn sections(yaml: &str) -> Result<Vec<Section>, ContentError> {
        RawCorpus::from_yaml(yaml)?.into_sections()
    }

    #[test]
    fn test_empty_yaml_yields_no_sections() {
        let result = sections("  \n").unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_parses_nested_structure() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: paragraph
            text: Hello
          - type: note
            kind: tip
            text: Read on
";
        let result = sections(yaml).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].items[0].id, "welcome");
        assert_eq!(
            result[0].items[0].blocks[1],
            Block::Note {
                kind: NoteKind::Tip,
                text: "Read on".to_owned(),
            }
        );
    }

    #[test]
    fn test_item_without_blocks_defaults_to_empty() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: empty
        title: Empty
";
        let result = sections(yaml).unwrap();

        assert!(result[0].items[0].blocks.is_empty());
    }

    #[test]
    fn test_unknown_block_type_is_reported() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: video
            src: intro.mp4
";
        let err = sections(yaml).unwrap_err();

        assert!(
            matches!(
                &err,
                ContentError::UnknownBlockType { item, tag } if item == "welcome" && tag == "video"
            ),
            "Expected UnknownBlockType, got {err:?}"
        );
    }

    #[test]
    fn test_missing_block_type_is_reported() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: paragraph
            text: ok
          - text: no tag
";
        let err = sections(yaml).unwrap_err();

        assert!(matches!(
            err,
            ContentError::MissingBlockType { index: 1, .. }
        ));
    }

    #[test]
    fn test_non_string_block_type_is_unknown() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: 5
            text: numbered
";
        let err = sections(yaml).unwrap_err();

        assert!(
            matches!(
                &err,
                ContentError::UnknownBlockType { item, tag } if item == "welcome" && tag == "5"
            ),
            "Expected UnknownBlockType, got {err:?}"
        );
    }

    #[test]
    fn test_null_block_type_is_missing() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: ~
            text: nothing
";
        let err = sections(yaml).unwrap_err();

        assert!(matches!(
            err,
            ContentError::MissingBlockType { index: 0, .. }
        ));
    }

    #[test]
    fn test_unknown_note_kind_is_invalid_block() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: note
            kind: danger
            text: Nope
";
        let err = sections(yaml).unwrap_err();

        assert!(
            matches!(&err, ContentError::InvalidBlock { tag, index: 0, .. } if tag == "note"),
            "Expected InvalidBlock, got {err:?}"
        );
    }

    #[test]
    fn test_code_block_missing_field_is_invalid_block() {
        let yaml = r"
sections:
  - id: intro
    title: Intro
    items:
      - id: welcome
        title: Welcome
        blocks:
          - type: code
            code: grove serve
";
        let err = sections(yaml).unwrap_err();

        assert!(err.to_string().contains("welcome"));
        assert!(matches!(err, ContentError::InvalidBlock { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = sections("sections: [unclosed").unwrap_err();

        assert!(matches!(err, ContentError::Parse(_)));
    }
}
