//! The accumulating message record threaded through all stages.
//!
//! Fields are added, never removed or overwritten. Each stage reads the
//! sub-records earlier stages produced and attaches exactly one of its own,
//! so the record is append-only and a stage invoked out of order fails with
//! a typed [`Error::MissingStage`] instead of a runtime surprise.

use crate::{Error, Fingerprint, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Output of the normalizer stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Normalized {
    /// Content hash of the raw input bytes.
    pub fingerprint: Fingerprint,
    /// Message subject, possibly empty.
    pub subject: String,
    /// Best-effort HTML rendering of the body.
    pub html: String,
    /// Header mapping. Keys are lower-cased; duplicate header lines keep
    /// the last value.
    pub headers: HashMap<String, String>,
}

/// Output of the deweaponizer stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deweaponized {
    /// HTML with hyperlink targets, bare URLs, and domains neutralized and
    /// active-content blocks removed.
    pub safe_html: String,
}

/// Output of the PII redaction stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiRedacted {
    /// Defanged HTML with PII pattern matches replaced.
    pub html: String,
}

/// Output of the attachment scanning stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentsScan {
    /// Scan status marker.
    pub status: String,
}

impl AttachmentsScan {
    /// The stub result: nothing was scanned.
    pub fn stub() -> Self {
        Self {
            status: "no_attachments_scanned_in_stub".to_string(),
        }
    }
}

/// The record passed between stages, accumulating one sub-record per stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Opaque locator for the raw input blob.
    pub source_reference: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<Normalized>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deweaponized: Option<Deweaponized>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii: Option<PiiRedacted>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<AttachmentsScan>,
}

impl MessageRecord {
    /// Create a fresh record holding only the raw-input locator.
    pub fn new(source_reference: impl Into<String>) -> Self {
        Self {
            source_reference: source_reference.into(),
            normalized: None,
            deweaponized: None,
            pii: None,
            attachments: None,
        }
    }

    /// Attach the normalizer output.
    pub fn with_normalized(mut self, normalized: Normalized) -> Self {
        self.normalized = Some(normalized);
        self
    }

    /// Attach the deweaponizer output.
    pub fn with_deweaponized(mut self, deweaponized: Deweaponized) -> Self {
        self.deweaponized = Some(deweaponized);
        self
    }

    /// Attach the redactor output.
    pub fn with_pii(mut self, pii: PiiRedacted) -> Self {
        self.pii = Some(pii);
        self
    }

    /// Attach the attachment-scan output.
    pub fn with_attachments(mut self, attachments: AttachmentsScan) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// The normalizer output, or a typed error if that stage has not run.
    pub fn normalized(&self) -> Result<&Normalized> {
        self.normalized.as_ref().ok_or(Error::MissingStage {
            stage: "normalize",
            field: "normalized",
        })
    }

    /// The content fingerprint from the normalizer output.
    pub fn fingerprint(&self) -> Result<&Fingerprint> {
        Ok(&self.normalized()?.fingerprint)
    }

    /// The defanged HTML, or a typed error if the deweaponizer has not run.
    pub fn safe_html(&self) -> Result<&str> {
        self.deweaponized
            .as_ref()
            .map(|d| d.safe_html.as_str())
            .ok_or(Error::MissingStage {
                stage: "deweaponize",
                field: "deweaponized.safe_html",
            })
    }

    /// The redacted HTML, or a typed error if the redactor has not run.
    pub fn redacted_html(&self) -> Result<&str> {
        self.pii
            .as_ref()
            .map(|p| p.html.as_str())
            .ok_or(Error::MissingStage {
                stage: "redact",
                field: "pii.html",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized_fixture() -> Normalized {
        Normalized {
            fingerprint: Fingerprint::of(b"raw"),
            subject: "subject".to_string(),
            html: "<p>hi</p>".to_string(),
            headers: HashMap::new(),
        }
    }

    #[test]
    fn test_fresh_record_has_no_stage_output() {
        let record = MessageRecord::new("incoming/1.eml");
        assert!(record.normalized().is_err());
        assert!(record.safe_html().is_err());
        assert!(record.redacted_html().is_err());
    }

    #[test]
    fn test_missing_stage_error_names_the_stage() {
        let record = MessageRecord::new("incoming/1.eml");
        let err = record.safe_html().unwrap_err();
        assert!(err.to_string().contains("deweaponize"));
    }

    #[test]
    fn test_record_accumulates_without_clobbering() {
        let record = MessageRecord::new("incoming/1.eml")
            .with_normalized(normalized_fixture())
            .with_deweaponized(Deweaponized {
                safe_html: "<p>safe</p>".to_string(),
            })
            .with_pii(PiiRedacted {
                html: "<p>clean</p>".to_string(),
            });

        assert_eq!(record.source_reference, "incoming/1.eml");
        assert_eq!(record.normalized().unwrap().subject, "subject");
        assert_eq!(record.safe_html().unwrap(), "<p>safe</p>");
        assert_eq!(record.redacted_html().unwrap(), "<p>clean</p>");
    }

    #[test]
    fn test_attachments_stub_status() {
        let record =
            MessageRecord::new("incoming/1.eml").with_attachments(AttachmentsScan::stub());
        assert_eq!(
            record.attachments.unwrap().status,
            "no_attachments_scanned_in_stub"
        );
    }

    #[test]
    fn test_record_serialization_skips_absent_stages() {
        let record = MessageRecord::new("incoming/1.eml");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("source_reference"));
        assert!(!json.contains("normalized"));
        assert!(!json.contains("deweaponized"));
    }
}
