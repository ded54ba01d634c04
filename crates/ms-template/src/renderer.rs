//! Base-template substitution and artifact persistence.

use crate::{Result, TemplateError};
use ms_common::{now_iso, BlobStore, Fingerprint, MetadataStore, Provenance, TemplateMeta};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Placeholder marker substituted with the sanitized HTML.
pub const SAFE_HTML_MARKER: &str = "{{ SAFE_HTML }}";

/// Default artifact extension.
pub const ARTIFACT_EXTENSION: &str = "mjml";

/// Content type recorded for rendered artifacts.
pub const ARTIFACT_CONTENT_TYPE: &str = "text/mjml";

/// Subject recorded when the message carried none.
pub const DEFAULT_SUBJECT: &str = "Simulation";

/// Summary returned to the orchestrator after the final stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutcome {
    /// Artifact identity (= content fingerprint).
    pub template_id: String,
    /// Storage key the artifact was written under.
    pub s3_key: String,
    /// Id/key pair mirrored into the summary for downstream consumers.
    #[serde(rename = "templateMeta")]
    pub template_meta: OutcomeMeta,
}

/// Camel-cased id/key pair embedded in the outcome summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeMeta {
    pub template_id: String,
    pub s3_key: String,
}

/// Renders the final artifact and persists it with its metadata record.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    marker: String,
    extension: String,
    content_type: String,
    provenance: Provenance,
}

impl TemplateRenderer {
    /// Create a renderer with the default marker, extension, and
    /// provenance tag.
    pub fn new() -> Self {
        Self {
            marker: SAFE_HTML_MARKER.to_string(),
            extension: ARTIFACT_EXTENSION.to_string(),
            content_type: ARTIFACT_CONTENT_TYPE.to_string(),
            provenance: Provenance::default(),
        }
    }

    /// Override the placeholder marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Override the provenance tag written into the metadata record.
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Substitute the sanitized HTML for the marker in the base template.
    ///
    /// Literal substring replacement. The base document must contain the
    /// marker at least once; every occurrence is replaced.
    pub fn render(&self, base: &str, html: &str) -> Result<String> {
        if !base.contains(&self.marker) {
            return Err(TemplateError::MissingMarker(self.marker.clone()));
        }
        Ok(base.replace(&self.marker, html))
    }

    /// Render and persist: one artifact put plus one metadata upsert,
    /// both keyed by the fingerprint.
    pub fn render_and_store(
        &self,
        base: &str,
        html: &str,
        fingerprint: &Fingerprint,
        subject: &str,
        artifacts: &dyn BlobStore,
        metadata: &dyn MetadataStore,
    ) -> Result<RenderOutcome> {
        let rendered = self.render(base, html)?;
        let key = fingerprint.storage_key(&self.extension);

        artifacts.put(&key, rendered.as_bytes(), &self.content_type)?;

        let subject = if subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            subject
        };
        let meta = TemplateMeta {
            template_id: fingerprint.to_string(),
            created_at: now_iso(),
            subject: subject.to_string(),
            s3_key: key.clone(),
            meta: serde_json::to_string(&self.provenance)?,
        };
        metadata.upsert(&meta)?;

        info!(template_id = %meta.template_id, key = %key, "template rendered and stored");

        Ok(RenderOutcome {
            template_id: meta.template_id.clone(),
            s3_key: key.clone(),
            template_meta: OutcomeMeta {
                template_id: meta.template_id,
                s3_key: key,
            },
        })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
