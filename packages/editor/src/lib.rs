//! # Mailsmith Editor
//!
//! Command-driven editing engine for email documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ presentation layer (canvas, property panel) │
//! │   commands in ↓        ↑ snapshots out      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - allocates fresh block ids                │
//! │  - pure reducer: (doc, command) → doc'      │
//! │  - snapshot undo/redo, version counter      │
//! │  - JSON save/load                           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: document → email HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is a value**: every transition returns a new
//!    `Document`; callers diff old/new for re-render decisions
//! 2. **Commands are total**: invalid targets are no-ops, never errors, so
//!    an untrusted or racing UI can drive the reducer without a failure path
//! 3. **Serialized application**: the caller applies one command fully
//!    before the next; there is no shared mutable state to lock

mod commands;
mod errors;
pub mod reducer;
mod session;
mod undo_stack;

pub use commands::{Command, MoveDirection};
pub use errors::SessionError;
pub use session::EditSession;
pub use undo_stack::UndoStack;

// Re-export the model types callers need to build patches
pub use mailsmith_model::{BlockKind, BlockProps, ContentBlock, Document};
