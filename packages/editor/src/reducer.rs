//! # Edit Reducer
//!
//! Pure state transition: `apply(document, command) -> document'`.
//!
//! The reducer never mutates its input and never fails. Commands with
//! invalid targets — unknown ids, protected header/footer ids, boundary
//! moves — return a value equal to the input, so an untrusted or racing UI
//! can drive it without a failure path. Callers serialize commands; the
//! reducer assumes it sees a consistent prior document.
//!
//! ## Invariants preserved
//!
//! - at most one header and one footer; a second add of either is a no-op
//! - header and footer never enter the ordered list and are never deleted,
//!   moved, or duplicated
//! - each id is unique across the list and both singleton slots
//! - at most one block is selected system-wide

use crate::commands::{Command, MoveDirection};
use mailsmith_model::{BlockKind, BlockProps, ContentBlock, Document};
use tracing::debug;

/// Apply a single command, producing the next document value
pub fn apply(doc: &Document, command: &Command) -> Document {
    match command {
        Command::AddBlock { kind, id, index } => add_block(doc, *kind, id, *index),
        Command::UpdateProps { id, patch } => update_props(doc, id, patch),
        Command::DeleteBlock { id } => delete_block(doc, id),
        Command::DuplicateBlock { id, new_id } => duplicate_block(doc, id, new_id),
        Command::MoveBlock { id, direction } => move_block(doc, id, *direction),
        Command::SelectBlock { id } => select_block(doc, id),
        Command::DeselectAll => deselect_all(doc),
        Command::SetInsertionCursor { index } => Document {
            insertion_cursor: *index,
            ..doc.clone()
        },
    }
}

fn add_block(doc: &Document, kind: BlockKind, id: &str, index: Option<usize>) -> Document {
    // Id uniqueness is an invariant, not a caller obligation
    if doc.find_block(id).is_some() {
        debug!(id, "add rejected: id already in use");
        return doc.clone();
    }

    let block = ContentBlock::new(id.to_string(), BlockProps::defaults(kind));

    if block.props.is_header() {
        if doc.header.is_some() {
            debug!("header already exists, skipping");
            return doc.clone();
        }
        return Document {
            header: Some(block),
            ..doc.clone()
        };
    }

    if block.props.is_footer() {
        if doc.footer.is_some() {
            debug!("footer already exists, skipping");
            return doc.clone();
        }
        return Document {
            footer: Some(block),
            ..doc.clone()
        };
    }

    let mut next = doc.clone();
    let at = index.or(doc.insertion_cursor);
    match at {
        Some(i) if i <= next.blocks.len() => {
            debug!(kind = %kind, index = i, "inserting block");
            next.blocks.insert(i, block);
        }
        _ => {
            debug!(kind = %kind, "appending block");
            next.blocks.push(block);
        }
    }
    next.insertion_cursor = None;
    next
}

fn update_props(doc: &Document, id: &str, patch: &BlockProps) -> Document {
    let mut next = doc.clone();

    if let Some(header) = next.header.as_mut().filter(|b| b.id == id) {
        header.props.merge(patch);
        return next;
    }
    if let Some(footer) = next.footer.as_mut().filter(|b| b.id == id) {
        footer.props.merge(patch);
        return next;
    }
    if let Some(block) = next.blocks.iter_mut().find(|b| b.id == id) {
        block.props.merge(patch);
        return next;
    }

    debug!(id, "update targeted unknown block");
    next
}

fn delete_block(doc: &Document, id: &str) -> Document {
    if doc.is_singleton_id(id) {
        debug!(id, "delete rejected: header/footer is protected");
        return doc.clone();
    }

    let Some(index) = doc.block_index(id) else {
        return doc.clone();
    };

    let mut next = doc.clone();
    next.blocks.remove(index);
    if next.selected_id.as_deref() == Some(id) {
        next.selected_id = None;
    }
    next
}

fn duplicate_block(doc: &Document, id: &str, new_id: &str) -> Document {
    if doc.is_singleton_id(id) || doc.find_block(new_id).is_some() {
        return doc.clone();
    }

    let Some(index) = doc.block_index(id) else {
        return doc.clone();
    };

    let mut copy = doc.blocks[index].clone();
    copy.id = new_id.to_string();
    copy.selected = false;

    let mut next = doc.clone();
    next.blocks.insert(index + 1, copy);
    next
}

fn move_block(doc: &Document, id: &str, direction: MoveDirection) -> Document {
    if doc.is_singleton_id(id) {
        return doc.clone();
    }

    let Some(index) = doc.block_index(id) else {
        return doc.clone();
    };

    let neighbor = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < doc.blocks.len() => index + 1,
        _ => return doc.clone(), // boundary move is a no-op
    };

    let mut next = doc.clone();
    next.blocks.swap(index, neighbor);
    next
}

fn select_block(doc: &Document, id: &str) -> Document {
    if doc.find_block(id).is_none() {
        debug!(id, "select targeted unknown block");
        return doc.clone();
    }

    let mut next = doc.clone();
    // Touch every block so stale selection never lingers
    for block in next
        .header
        .iter_mut()
        .chain(next.footer.iter_mut())
        .chain(next.blocks.iter_mut())
    {
        block.selected = block.id == id;
    }
    next.selected_id = Some(id.to_string());
    next
}

fn deselect_all(doc: &Document) -> Document {
    let mut next = doc.clone();
    for block in next
        .header
        .iter_mut()
        .chain(next.footer.iter_mut())
        .chain(next.blocks.iter_mut())
    {
        block.selected = false;
    }
    next.selected_id = None;
    next
}
