//! Template artifact metadata records.

use serde::{Deserialize, Serialize};

/// Provenance tag serialized into the metadata `Meta` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Where the message came from.
    pub source: String,
    /// Which system produced the artifact.
    pub origin: String,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            source: "live".to_string(),
            origin: "mailscrub".to_string(),
        }
    }
}

/// Metadata record written once per rendered artifact.
///
/// Serialized field names follow the external metadata-store contract
/// (`TemplateId`, `CreatedAt`, `Subject`, `S3Key`, `Meta`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateMeta {
    /// Artifact identity. Equal to the content fingerprint.
    pub template_id: String,
    /// Creation time, ISO-8601 UTC with second precision and trailing `Z`.
    pub created_at: String,
    /// Message subject, or the fixed default when the message had none.
    pub subject: String,
    /// Storage key the artifact was written under.
    pub s3_key: String,
    /// Serialized provenance object.
    pub meta: String,
}
