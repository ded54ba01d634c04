//! The normalizer stage.

use crate::body::{extract_html_document, wrap_plain_text, EMPTY_BODY_HTML};
use crate::headers::{parse_headers, split_message};
use ms_common::{Fingerprint, Normalized};
use tracing::debug;

/// Parses raw message bytes into headers, subject, and an HTML body.
///
/// Best-effort by design: malformed input degrades to a plain-text
/// rendering rather than an error, and undecodable bytes are replaced
/// during the lossy decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize raw message bytes into the stage-1 sub-record.
    pub fn normalize(&self, raw: &[u8]) -> Normalized {
        let fingerprint = Fingerprint::of(raw);
        let text = String::from_utf8_lossy(raw);

        let (header_block, body) = split_message(&text);
        let headers = parse_headers(header_block);
        let subject = headers.get("subject").cloned().unwrap_or_default();

        let html_body = headers
            .get("content-type")
            .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
            .unwrap_or(false);

        let html = if html_body {
            match extract_html_document(body) {
                Some(document) => document.to_string(),
                None if body.trim().is_empty() => EMPTY_BODY_HTML.to_string(),
                None => body.to_string(),
            }
        } else {
            wrap_plain_text(body)
        };

        debug!(
            fingerprint = %fingerprint,
            html_body,
            headers = headers.len(),
            "message normalized"
        );

        Normalized {
            fingerprint,
            subject,
            html,
            headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML_MAIL: &[u8] = b"Subject: Quarterly report\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
ignored preamble <html><body><p>report attached</p></body></html> epilogue";

    #[test]
    fn test_html_mail_extracts_document() {
        let normalized = Normalizer::new().normalize(HTML_MAIL);
        assert_eq!(normalized.subject, "Quarterly report");
        assert_eq!(
            normalized.html,
            "<html><body><p>report attached</p></body></html>"
        );
    }

    #[test]
    fn test_html_mail_without_pair_falls_back_to_body() {
        let raw = b"Content-Type: text/html\n\n<p>bare fragment</p>";
        let normalized = Normalizer::new().normalize(raw);
        assert_eq!(normalized.html, "<p>bare fragment</p>");
    }

    #[test]
    fn test_plain_mail_is_wrapped() {
        let raw = b"Subject: hi\n\nline1\nline2";
        let normalized = Normalizer::new().normalize(raw);
        assert_eq!(normalized.html, "<p>line1<br>line2</p>");
    }

    #[test]
    fn test_missing_content_type_treated_as_plain() {
        let raw = b"Subject: hi\n\n<html><p>looks like html</p></html>";
        let normalized = Normalizer::new().normalize(raw);
        // Without a text/html content type, the body is wrapped verbatim.
        assert!(normalized.html.starts_with("<p><html>"));
    }

    #[test]
    fn test_empty_body_placeholder() {
        let raw = b"Subject: empty\n\n";
        let normalized = Normalizer::new().normalize(raw);
        assert_eq!(normalized.html, EMPTY_BODY_HTML);
    }

    #[test]
    fn test_empty_html_body_placeholder() {
        let raw = b"Content-Type: text/html\n\n   ";
        let normalized = Normalizer::new().normalize(raw);
        assert_eq!(normalized.html, EMPTY_BODY_HTML);
    }

    #[test]
    fn test_subject_defaults_to_empty() {
        let raw = b"To: someone\n\nbody";
        let normalized = Normalizer::new().normalize(raw);
        assert_eq!(normalized.subject, "");
    }

    #[test]
    fn test_fingerprint_is_of_raw_bytes() {
        let normalized = Normalizer::new().normalize(HTML_MAIL);
        assert_eq!(normalized.fingerprint, Fingerprint::of(HTML_MAIL));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let raw = b"Subject: bad bytes\n\nbefore \xff\xfe after";
        let normalized = Normalizer::new().normalize(raw);
        assert!(normalized.html.contains("before"));
        assert!(normalized.html.contains("after"));
        assert!(normalized.html.contains('\u{FFFD}'));
    }

    #[test]
    fn test_header_case_insensitive_lookup() {
        let upper = Normalizer::new().normalize(b"SUBJECT: A\n\nx");
        let lower = Normalizer::new().normalize(b"subject: A\n\nx");
        assert_eq!(upper.subject, lower.subject);
        assert!(upper.headers.contains_key("subject"));
    }
}
