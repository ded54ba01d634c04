//! Fuzz target for PII redaction.
//!
//! Redaction must never panic; clean input passes through unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ms_redact::{PatternRedactor, Redactor};

fuzz_target!(|data: &str| {
    let _ = PatternRedactor::new().redact(data);
});
