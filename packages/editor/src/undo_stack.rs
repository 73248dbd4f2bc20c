//! # Undo/Redo Stack
//!
//! Tracks document history and enables undo/redo.
//!
//! ## Design
//!
//! - History entries are whole-document snapshots. Documents are small
//!   values, so a snapshot is one clone and undo never has to invert a
//!   command.
//! - Undo moves the current document to the redo stack and restores the
//!   newest snapshot; redo is the mirror image.
//! - A new edit clears the redo stack.
//! - Bounded depth: oldest snapshots fall off first.

use mailsmith_model::Document;

/// Undo/redo stack over document snapshots
#[derive(Debug, Default)]
pub struct UndoStack {
    /// Snapshots taken before each applied edit (most recent last)
    undo_stack: Vec<Document>,

    /// Snapshots produced by undo (most recent last)
    redo_stack: Vec<Document>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the document state that an edit is about to replace
    pub fn record(&mut self, prior: Document) {
        self.undo_stack.push(prior);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New edit invalidates the redo future
        self.redo_stack.clear();
    }

    /// Undo: restore the newest snapshot, handing back the document to show.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Document) -> Option<Document> {
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(restored)
    }

    /// Redo the most recently undone edit
    pub fn redo(&mut self, current: Document) -> Option<Document> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::{Document, IdGenerator};

    #[test]
    fn test_undo_restores_prior_snapshot() {
        let mut ids = IdGenerator::new("undo-test");
        let before = Document::with_defaults(&mut ids);
        let mut after = before.clone();
        after.selected_id = Some("x".to_string());

        let mut stack = UndoStack::new();
        stack.record(before.clone());

        let restored = stack.undo(after.clone()).expect("one level to undo");
        assert_eq!(restored, before);
        assert!(stack.can_redo());

        let redone = stack.redo(restored).expect("one level to redo");
        assert_eq!(redone, after);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let doc = Document::empty();
        let mut stack = UndoStack::new();

        stack.record(doc.clone());
        let _ = stack.undo(doc.clone());
        assert!(stack.can_redo());

        stack.record(doc);
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_bounded_depth_drops_oldest() {
        let doc = Document::empty();
        let mut stack = UndoStack::with_max_levels(2);

        stack.record(doc.clone());
        stack.record(doc.clone());
        stack.record(doc);
        assert_eq!(stack.undo_depth(), 2);
    }

    #[test]
    fn test_undo_on_empty_stack() {
        let mut stack = UndoStack::new();
        assert!(stack.undo(Document::empty()).is_none());
        assert!(!stack.can_undo());
    }
}
