//! Template rendering and artifact persistence for mailscrub.
//!
//! Stage 4 of the pipeline: substitute the sanitized HTML into a base
//! template document, write the rendered artifact under its
//! content-addressed storage key, and upsert the metadata record. Both
//! writes are keyed by the message fingerprint, so repeated runs on
//! identical input overwrite in place instead of accumulating duplicates.
//!
//! Substitution is a literal single-marker substring replacement, not a
//! templating language.

pub mod error;
pub mod renderer;

pub use error::{Result, TemplateError};
pub use renderer::{
    OutcomeMeta, RenderOutcome, TemplateRenderer, ARTIFACT_CONTENT_TYPE, ARTIFACT_EXTENSION,
    DEFAULT_SUBJECT, SAFE_HTML_MARKER,
};
