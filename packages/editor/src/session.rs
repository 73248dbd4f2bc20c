//! # Edit Session
//!
//! Owns one document for the lifetime of an editing session: the current
//! document value, the id generator, version counter, and undo history.
//!
//! The session is the impure shell around the pure reducer — it allocates
//! fresh ids, threads each command through [`crate::reducer::apply`], and
//! records history only when the command actually changed something.

use crate::commands::{Command, MoveDirection};
use crate::reducer;
use crate::undo_stack::UndoStack;
use crate::SessionError;
use mailsmith_model::{BlockKind, BlockProps, Document, IdGenerator};
use std::path::Path;
use tracing::debug;

/// Single-user editing session
pub struct EditSession {
    /// Session name (seeds block ids)
    pub name: String,

    /// Current document value
    document: Document,

    /// Version number, incremented on every effective edit
    version: u64,

    ids: IdGenerator,
    history: UndoStack,

    /// Unsaved changes since the last save/load
    dirty: bool,
}

impl EditSession {
    /// Start a session on a fresh document with default header and footer
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut ids = IdGenerator::new(&name);
        let document = Document::with_defaults(&mut ids);
        Self {
            name,
            document,
            version: 0,
            ids,
            history: UndoStack::new(),
            dirty: false,
        }
    }

    /// Start a session over an existing document value
    pub fn with_document(name: impl Into<String>, document: Document) -> Self {
        let name = name.into();
        let mut ids = IdGenerator::new(&name);
        ids.advance_past(document.iter_all().map(|b| b.id.as_str()));
        Self {
            name,
            document,
            version: 0,
            ids,
            history: UndoStack::new(),
            dirty: false,
        }
    }

    /// Load the document from a JSON file
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self, SessionError> {
        let source = std::fs::read_to_string(path)?;
        let document: Document = serde_json::from_str(&source)?;
        Ok(Self::with_document(name, document))
    }

    /// Save the document as JSON
    pub fn save(&mut self, path: &Path) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(&self.document)?;
        std::fs::write(path, json)?;
        self.dirty = false;
        Ok(())
    }

    /// Read-only snapshot for the presentation layer
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply a command, recording history when it changes the document.
    /// No-op commands leave version, history, and dirty flag untouched.
    pub fn dispatch(&mut self, command: Command) -> &Document {
        let next = reducer::apply(&self.document, &command);
        if next == self.document {
            debug!(command = command.name(), "command was a no-op");
            return &self.document;
        }

        debug!(command = command.name(), version = self.version + 1, "applied");
        self.history.record(std::mem::replace(&mut self.document, next));
        self.version += 1;
        self.dirty = true;
        &self.document
    }

    /// Add a block of `kind`, returning the fresh id it was created under
    pub fn add_block(&mut self, kind: BlockKind, index: Option<usize>) -> String {
        let id = self.ids.new_id();
        self.dispatch(Command::AddBlock {
            kind,
            id: id.clone(),
            index,
        });
        id
    }

    pub fn update_block(&mut self, id: &str, patch: BlockProps) {
        self.dispatch(Command::UpdateProps {
            id: id.to_string(),
            patch,
        });
    }

    pub fn delete_block(&mut self, id: &str) {
        self.dispatch(Command::DeleteBlock { id: id.to_string() });
    }

    /// Duplicate a block, returning the copy's id
    pub fn duplicate_block(&mut self, id: &str) -> String {
        let new_id = self.ids.new_id();
        self.dispatch(Command::DuplicateBlock {
            id: id.to_string(),
            new_id: new_id.clone(),
        });
        new_id
    }

    pub fn move_block(&mut self, id: &str, direction: MoveDirection) {
        self.dispatch(Command::MoveBlock {
            id: id.to_string(),
            direction,
        });
    }

    pub fn select_block(&mut self, id: &str) {
        self.dispatch(Command::SelectBlock { id: id.to_string() });
    }

    pub fn deselect_all(&mut self) {
        self.dispatch(Command::DeselectAll);
    }

    pub fn set_insertion_cursor(&mut self, index: Option<usize>) {
        self.dispatch(Command::SetInsertionCursor { index });
    }

    /// Undo the last effective edit
    pub fn undo(&mut self) -> bool {
        let current = self.document.clone();
        match self.history.undo(current) {
            Some(restored) => {
                self.document = restored;
                self.version += 1;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone edit
    pub fn redo(&mut self) -> bool {
        let current = self.document.clone();
        match self.history.redo(current) {
            Some(restored) => {
                self.document = restored;
                self.version += 1;
                self.dirty = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::TextSectionProps;

    #[test]
    fn test_session_starts_with_singletons() {
        let session = EditSession::new("campaign");
        assert_eq!(session.version(), 0);
        assert!(!session.is_dirty());
        assert!(session.document().header.is_some());
        assert!(session.document().footer.is_some());
    }

    #[test]
    fn test_dispatch_bumps_version_on_change_only() {
        let mut session = EditSession::new("campaign");

        let id = session.add_block(BlockKind::TextSection, None);
        assert_eq!(session.version(), 1);
        assert!(session.is_dirty());

        // deleting the header is a no-op and must not bump the version
        let header_id = session.document().header.as_ref().unwrap().id.clone();
        session.delete_block(&header_id);
        assert_eq!(session.version(), 1);

        session.delete_block(&id);
        assert_eq!(session.version(), 2);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut session = EditSession::new("campaign");
        let before = session.document().clone();

        session.add_block(BlockKind::TextSection, None);
        let after = session.document().clone();

        assert!(session.undo());
        assert_eq!(session.document(), &before);

        assert!(session.redo());
        assert_eq!(session.document(), &after);
    }

    #[test]
    fn test_update_through_session() {
        let mut session = EditSession::new("campaign");
        let id = session.add_block(BlockKind::TextSection, None);

        session.update_block(
            &id,
            BlockProps::TextSection(TextSectionProps {
                text: Some("Hello".into()),
                ..Default::default()
            }),
        );

        match &session.document().find_block(&id).unwrap().props {
            BlockProps::TextSection(p) => assert_eq!(p.text.as_deref(), Some("Hello")),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_ids_are_unique_across_session() {
        let mut session = EditSession::new("campaign");
        let a = session.add_block(BlockKind::TextSection, None);
        let b = session.add_block(BlockKind::TextSection, None);
        let c = session.duplicate_block(&a);

        let mut ids = vec![a, b, c];
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
