//! Error types for the editor
//!
//! The reducer itself is total and never fails; errors only exist at the
//! session's I/O boundary (loading and saving document JSON).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
