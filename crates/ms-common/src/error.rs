//! Error types shared across the sanitization pipeline.

use thiserror::Error;

/// Result type alias for record and store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the shared record and store types.
#[derive(Error, Debug)]
pub enum Error {
    /// A stage required a field that an earlier stage never produced.
    #[error("missing required field '{field}': stage '{stage}' has not run")]
    MissingStage {
        stage: &'static str,
        field: &'static str,
    },

    /// I/O error from a blob or metadata store.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from the metadata store.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A store key resolved outside the store root.
    #[error("invalid store key: {0}")]
    InvalidKey(String),
}
