//! Error types for the editor.
//!
//! Command failures are not errors: a command naming a missing entity is
//! absorbed as a no-op (the UI may race between selection and deletion).
//! Typed errors cover project I/O and integrity validation of loaded
//! documents, the only places something can genuinely fail.

use pagecraft_model::IntegrityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document integrity violated: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Project is not file-backed")]
    NotFileBacked,
}
