//! Pre-compiled PII detection patterns.
//!
//! Patterns favor false positives over leakage: anything that looks like a
//! match is consumed whole.

use crate::PiiCategory;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").unwrap());

static RE_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap());

static RE_CARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b").unwrap());

/// The compiled pattern for a category.
pub fn pattern(category: PiiCategory) -> &'static Regex {
    match category {
        PiiCategory::Email => &RE_EMAIL,
        PiiCategory::Phone => &RE_PHONE,
        PiiCategory::Card => &RE_CARD,
    }
}
