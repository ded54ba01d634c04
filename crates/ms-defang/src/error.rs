//! Error types for rule loading.

use thiserror::Error;

/// Result type for rule-loading operations.
pub type Result<T> = std::result::Result<T, DefangError>;

/// Errors that can occur while loading rewrite rules.
#[derive(Error, Debug)]
pub enum DefangError {
    /// The rule document is not valid YAML.
    #[error("rule document parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading a rule document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
