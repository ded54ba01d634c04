//! The redaction stage: detect, then replace.

use crate::patterns::pattern;
use crate::PiiCategory;
use tracing::debug;

/// A detected PII span prior to replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionEntity {
    /// Detected category.
    pub category: PiiCategory,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Token the span is replaced with.
    pub token: &'static str,
}

/// A strategy that removes PII from defanged HTML.
///
/// Implementations must over-redact rather than skip ambiguous matches,
/// and a missing richer analyzer never disables the baseline pattern
/// pass.
pub trait Redactor {
    /// Replace every PII match in `html` with its category token.
    fn redact(&self, html: &str) -> String;
}

/// Baseline pattern redactor with fixed tokens per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRedactor;

impl PatternRedactor {
    /// Create a pattern redactor.
    pub fn new() -> Self {
        Self
    }

    /// Detect PII spans without replacing them.
    ///
    /// Spans are reported per category in application order, then sorted
    /// by position. Overlaps between categories are possible here; they
    /// are resolved during replacement, where earlier categories win.
    pub fn detect(&self, text: &str) -> Vec<RedactionEntity> {
        let mut entities = Vec::new();
        for category in PiiCategory::ORDERED {
            for m in pattern(category).find_iter(text) {
                entities.push(RedactionEntity {
                    category,
                    start: m.start(),
                    end: m.end(),
                    token: category.token(),
                });
            }
        }
        entities.sort_by_key(|e| e.start);
        entities
    }
}

impl Redactor for PatternRedactor {
    /// One non-overlapping left-to-right pass per category, in fixed
    /// order. A region consumed by an earlier category's token cannot
    /// match a later category, because replacement happens before the
    /// next category's scan runs.
    fn redact(&self, html: &str) -> String {
        let mut out = html.to_string();
        for category in PiiCategory::ORDERED {
            let replaced = pattern(category).replace_all(&out, category.token());
            out = replaced.into_owned();
        }
        debug!(bytes = out.len(), "pii redaction pass complete");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redact(text: &str) -> String {
        PatternRedactor::new().redact(text)
    }

    #[test]
    fn test_email_is_redacted() {
        assert_eq!(redact("Contact a@b.com"), "Contact <EMAIL>");
    }

    #[test]
    fn test_email_case_insensitive() {
        assert_eq!(redact("Mail Admin@Example.COM today"), "Mail <EMAIL> today");
    }

    #[test]
    fn test_phone_formats_are_redacted() {
        assert_eq!(redact("call 555-123-4567"), "call <PHONE>");
        assert_eq!(redact("call 555.123.4567"), "call <PHONE>");
        assert_eq!(redact("call 5551234567"), "call <PHONE>");
    }

    #[test]
    fn test_card_formats_are_redacted() {
        assert_eq!(redact("pay 4111 1111 1111 1111 now"), "pay <CARD> now");
        assert_eq!(redact("pay 4111-1111-1111-1111 now"), "pay <CARD> now");
        assert_eq!(redact("pay 4111111111111111 now"), "pay <CARD> now");
    }

    #[test]
    fn test_multiple_matches_in_one_pass() {
        assert_eq!(
            redact("a@b.com wrote to c@d.org"),
            "<EMAIL> wrote to <EMAIL>"
        );
    }

    #[test]
    fn test_email_consumes_digits_before_phone_pass() {
        // The digits are part of the email span; the phone pass must see
        // the token, not the digits.
        assert_eq!(redact("from 5551234567@relay.net"), "from <EMAIL>");
    }

    #[test]
    fn test_mixed_categories() {
        assert_eq!(
            redact("a@b.com, 555-123-4567, 4111 1111 1111 1111"),
            "<EMAIL>, <PHONE>, <CARD>"
        );
    }

    #[test]
    fn test_clean_text_is_untouched() {
        let text = "<p>Nothing sensitive here.</p>";
        assert_eq!(redact(text), text);
    }

    #[test]
    fn test_redaction_is_idempotent() {
        let once = redact("a@b.com and 555-123-4567");
        assert_eq!(redact(&once), once);
    }

    #[test]
    fn test_detect_reports_sorted_spans() {
        let text = "call 555-123-4567 or mail a@b.com";
        let entities = PatternRedactor::new().detect(text);
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].category, PiiCategory::Phone);
        assert_eq!(entities[1].category, PiiCategory::Email);
        assert!(entities[0].start < entities[1].start);
        assert_eq!(&text[entities[1].start..entities[1].end], "a@b.com");
    }

    #[test]
    fn test_detect_empty_on_clean_text() {
        assert!(PatternRedactor::new().detect("hello world").is_empty());
    }
}
