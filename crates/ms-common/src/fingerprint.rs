//! Content fingerprinting for idempotent, content-addressed artifacts.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 fingerprint of a raw message, as lower-case hex.
///
/// Identical input bytes always produce the identical fingerprint, which
/// doubles as the artifact identity and the stem of its storage key, so
/// repeated runs on the same input overwrite one artifact instead of
/// accumulating duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub String);

impl Fingerprint {
    /// Compute the fingerprint of raw input bytes.
    pub fn of(raw: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(raw);
        Fingerprint(hex::encode(hasher.finalize()))
    }

    /// Storage key for the rendered artifact with the given extension.
    pub fn storage_key(&self, extension: &str) -> String {
        format!("templates/{}.{}", self.0, extension)
    }

    /// The fingerprint as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
