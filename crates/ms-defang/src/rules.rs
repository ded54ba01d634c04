//! Placeholder rewrite rules for URL and domain defanging.
//!
//! Rules come from a YAML document with a `defang` mapping of category
//! name to replacement token. Any key the document omits falls back to the
//! built-in token, and a missing document falls back entirely. The rule
//! set is constructed once at process start and treated as immutable.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Built-in replacement for bare URLs.
pub const DEFAULT_URL_TOKEN: &str = "<URL_REMOVED>";

/// Built-in replacement for bare domain-like tokens.
pub const DEFAULT_DOMAIN_TOKEN: &str = "<DOMAIN_REMOVED>";

/// Replacement tokens applied by the defang pipeline.
///
/// The built-in tokens contain no dot-plus-letters run, so the broad
/// domain rule cannot re-match them once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRules {
    /// Token substituted for bare `http(s)://` URLs.
    #[serde(default = "default_url_token")]
    pub bare_urls: String,

    /// Token substituted for bare domain-like tokens.
    #[serde(default = "default_domain_token")]
    pub domains: String,
}

fn default_url_token() -> String {
    DEFAULT_URL_TOKEN.to_string()
}

fn default_domain_token() -> String {
    DEFAULT_DOMAIN_TOKEN.to_string()
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            bare_urls: default_url_token(),
            domains: default_domain_token(),
        }
    }
}

/// Wire form of the rule document.
#[derive(Debug, Default, Deserialize)]
struct RuleDocument {
    #[serde(default)]
    defang: Option<RewriteRules>,
}

impl RewriteRules {
    /// Parse rules from a YAML rule document.
    ///
    /// A missing `defang` section or missing category keys fall back to
    /// the built-in tokens; only a malformed document is an error.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let document: RuleDocument = serde_yaml::from_str(text)?;
        Ok(document.defang.unwrap_or_default())
    }

    /// Load rules from a file, falling back to the built-in tokens when
    /// the file is absent or unparseable.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::from_yaml(&text) {
                Ok(rules) => {
                    debug!(path = %path.display(), "rewrite rules loaded");
                    rules
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "unparseable rule document, using built-in tokens");
                    Self::default()
                }
            },
            Err(err) => {
                debug!(path = %path.display(), %err, "no rule document, using built-in tokens");
                Self::default()
            }
        }
    }
}
