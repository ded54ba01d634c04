//! Error types for template rendering.

use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while rendering and persisting a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The base template does not contain the placeholder marker.
    #[error("base template is missing the '{0}' marker")]
    MissingMarker(String),

    /// Provenance serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A store operation or record access failed.
    #[error(transparent)]
    Common(#[from] ms_common::Error),
}
