//! Error types for pipeline orchestration.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by a pipeline invocation.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A record access or store operation failed.
    #[error(transparent)]
    Record(#[from] ms_common::Error),

    /// Template rendering or persistence failed.
    #[error(transparent)]
    Template(#[from] ms_template::TemplateError),

    /// I/O error outside the stores (CLI input, base template file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result summary serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
