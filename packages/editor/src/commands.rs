//! # Edit Commands
//!
//! High-level semantic operations on an email document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each command represents one user-level edit
//! 2. **Total**: Every command applies to every well-formed document;
//!    invalid targets degrade to no-ops, never errors
//! 3. **Primitive payloads**: Commands carry ids, kinds, and property
//!    patches — nothing presentation-specific
//!
//! Fresh ids come from the caller (normally the [`crate::EditSession`]),
//! which keeps the reducer a pure function of (document, command).

use mailsmith_model::{BlockKind, BlockProps};
use serde::{Deserialize, Serialize};

/// Direction for [`Command::MoveBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Semantic edit commands consumed by the reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    /// Add a new block with catalog defaults under a caller-supplied id.
    /// Header/footer kinds install into their singleton slot; anything else
    /// inserts into the ordered list.
    AddBlock {
        kind: BlockKind,
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    /// Merge a partial property payload into the block with `id`
    UpdateProps { id: String, patch: BlockProps },

    /// Remove an ordinary block (header/footer are never deletable)
    DeleteBlock { id: String },

    /// Copy an ordinary block, placing the copy right after the original
    DuplicateBlock { id: String, new_id: String },

    /// Swap an ordinary block with its immediate neighbor
    MoveBlock { id: String, direction: MoveDirection },

    /// Make `id` the single selected block
    SelectBlock { id: String },

    /// Clear selection everywhere
    DeselectAll,

    /// Set or clear the pending insert position for the next add
    SetInsertionCursor { index: Option<usize> },
}

impl Command {
    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddBlock { .. } => "add-block",
            Command::UpdateProps { .. } => "update-props",
            Command::DeleteBlock { .. } => "delete-block",
            Command::DuplicateBlock { .. } => "duplicate-block",
            Command::MoveBlock { .. } => "move-block",
            Command::SelectBlock { .. } => "select-block",
            Command::DeselectAll => "deselect-all",
            Command::SetInsertionCursor { .. } => "set-insertion-cursor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization() {
        let command = Command::MoveBlock {
            id: "abc-3".to_string(),
            direction: MoveDirection::Down,
        };

        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(command, back);
    }

    #[test]
    fn test_add_block_wire_shape() {
        let json = serde_json::json!({
            "command": "add-block",
            "kind": "text-section",
            "id": "abc-1",
        });

        let command: Command = serde_json::from_value(json).unwrap();
        assert_eq!(
            command,
            Command::AddBlock {
                kind: BlockKind::TextSection,
                id: "abc-1".to_string(),
                index: None,
            }
        );
    }

    #[test]
    fn test_update_props_carries_typed_patch() {
        let json = serde_json::json!({
            "command": "update-props",
            "id": "abc-1",
            "patch": { "type": "text-section", "props": { "text": "Hello" } },
        });

        let command: Command = serde_json::from_value(json).unwrap();
        match command {
            Command::UpdateProps { patch, .. } => match patch {
                BlockProps::TextSection(p) => assert_eq!(p.text.as_deref(), Some("Hello")),
                other => panic!("wrong variant: {other:?}"),
            },
            other => panic!("wrong command: {other:?}"),
        }
    }
}
