//! Fuzz target for raw message normalization.
//!
//! Normalization must never panic: arbitrary bytes decode lossily and
//! degrade to a best-effort record.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ms_normalize::Normalizer;

fuzz_target!(|data: &[u8]| {
    let normalized = Normalizer::new().normalize(data);
    // The body is never empty: the placeholder fragment backstops it.
    assert!(!normalized.html.is_empty());
});
