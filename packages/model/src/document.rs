//! # Document Model
//!
//! The composed email: an ordered list of content blocks plus the two
//! singleton slots (header, footer) and transient UI state (selection,
//! insertion cursor).
//!
//! A `Document` is a plain value. Editing never mutates one in place from
//! the caller's point of view; the reducer takes a document and returns the
//! next one, so callers can diff old/new for re-render decisions.

use crate::blocks::BlockProps;
use crate::id_generator::IdGenerator;
use crate::BlockKind;
use serde::{Deserialize, Serialize};

/// One content unit of the email
///
/// Identity is the `id`. Ordering and equality for editing purposes always
/// go by id, never by position — positions shift under move and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct ContentBlock {
    pub id: String,
    pub props: BlockProps,
    pub selected: bool,
}

impl ContentBlock {
    pub fn new(id: String, props: BlockProps) -> Self {
        Self {
            id,
            props,
            selected: false,
        }
    }

    /// Kind of this block, if its type tag is a recognized one
    pub fn kind(&self) -> Option<BlockKind> {
        self.props.kind()
    }
}

/// Wire shape of a block: `{ id, type, props, selected }`
///
/// Decoding funnels the untyped `props` object through
/// [`BlockProps::decode`], the single place where defaults-tolerant decoding
/// happens. Unknown `type` tags survive as [`BlockProps::Unknown`].
#[derive(Serialize, Deserialize)]
struct RawBlock {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    props: serde_json::Value,
    #[serde(default)]
    selected: bool,
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        ContentBlock {
            id: raw.id,
            props: BlockProps::decode(&raw.kind, raw.props),
            selected: raw.selected,
        }
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        RawBlock {
            kind: block.props.tag().to_string(),
            props: block.props.encode(),
            id: block.id,
            selected: block.selected,
        }
    }
}

/// The composed email document
///
/// Header and footer are singleton slots and never members of `blocks`;
/// they render first and last regardless of the order things were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Ordinary blocks, in render order (excludes header/footer)
    pub blocks: Vec<ContentBlock>,

    /// Header singleton slot
    pub header: Option<ContentBlock>,

    /// Footer singleton slot
    pub footer: Option<ContentBlock>,

    /// Id of the currently selected block, if any
    pub selected_id: Option<String>,

    /// Pending index for the next ordinary-block insert
    pub insertion_cursor: Option<usize>,
}

impl Document {
    /// Create an empty document (no header/footer)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a document with header and footer pre-populated from catalog
    /// defaults, the state a fresh editing session starts from.
    pub fn with_defaults(ids: &mut IdGenerator) -> Self {
        Self {
            header: Some(ContentBlock::new(
                ids.new_id(),
                BlockProps::defaults(BlockKind::BrandHeader),
            )),
            footer: Some(ContentBlock::new(
                ids.new_id(),
                BlockProps::defaults(BlockKind::Footer),
            )),
            ..Default::default()
        }
    }

    /// Find a block by id. Search order: header, footer, then the ordered
    /// list. No block kind currently nests children, but lookups stay
    /// confined here so nesting later only touches this function.
    pub fn find_block(&self, id: &str) -> Option<&ContentBlock> {
        self.header
            .iter()
            .chain(self.footer.iter())
            .find(|b| b.id == id)
            .or_else(|| self.blocks.iter().find(|b| b.id == id))
    }

    /// Position of an ordinary block within the ordered list
    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Whether `id` names the current header or footer
    pub fn is_singleton_id(&self, id: &str) -> bool {
        self.header.as_ref().is_some_and(|b| b.id == id)
            || self.footer.as_ref().is_some_and(|b| b.id == id)
    }

    /// Iterate every block in render order: header, ordered list, footer
    pub fn iter_all(&self) -> impl Iterator<Item = &ContentBlock> {
        self.header
            .iter()
            .chain(self.blocks.iter())
            .chain(self.footer.iter())
    }

    /// Number of blocks across the list and both singleton slots
    pub fn block_count(&self) -> usize {
        self.blocks.len()
            + self.header.is_some() as usize
            + self.footer.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::TextSectionProps;

    fn text_block(id: &str, text: &str) -> ContentBlock {
        ContentBlock::new(
            id.to_string(),
            BlockProps::TextSection(TextSectionProps {
                text: Some(text.to_string()),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn test_with_defaults_populates_singletons() {
        let mut ids = IdGenerator::new("test");
        let doc = Document::with_defaults(&mut ids);

        assert!(doc.blocks.is_empty());
        let header = doc.header.as_ref().expect("header populated");
        let footer = doc.footer.as_ref().expect("footer populated");
        assert_eq!(header.kind(), Some(BlockKind::BrandHeader));
        assert_eq!(footer.kind(), Some(BlockKind::Footer));
        assert_ne!(header.id, footer.id);
    }

    #[test]
    fn test_find_block_searches_singletons_first() {
        let mut ids = IdGenerator::new("test");
        let mut doc = Document::with_defaults(&mut ids);
        doc.blocks.push(text_block("t-1", "hello"));

        let header_id = doc.header.as_ref().unwrap().id.clone();
        assert_eq!(doc.find_block(&header_id).unwrap().id, header_id);
        assert_eq!(doc.find_block("t-1").unwrap().id, "t-1");
        assert!(doc.find_block("missing").is_none());
    }

    #[test]
    fn test_iter_all_order() {
        let mut ids = IdGenerator::new("test");
        let mut doc = Document::with_defaults(&mut ids);
        doc.blocks.push(text_block("t-1", "first"));
        doc.blocks.push(text_block("t-2", "second"));

        let order: Vec<&str> = doc.iter_all().map(|b| b.id.as_str()).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order[1], "t-1");
        assert_eq!(order[2], "t-2");
    }

    #[test]
    fn test_json_round_trip() {
        let mut ids = IdGenerator::new("test");
        let mut doc = Document::with_defaults(&mut ids);
        doc.blocks.push(text_block("t-1", "hello"));

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_unknown_block_survives_round_trip() {
        let json = serde_json::json!({
            "blocks": [{ "id": "x-1", "type": "marquee", "props": { "speed": 4 } }],
        });

        let doc: Document = serde_json::from_value(json).unwrap();
        assert_eq!(
            doc.blocks[0].props,
            BlockProps::Unknown {
                kind: "marquee".to_string()
            }
        );

        let back: Document =
            serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(doc, back);
    }
}
