//! Fuzz target for rule-document parsing.
//!
//! Arbitrary YAML must either parse or error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ms_defang::RewriteRules;

fuzz_target!(|data: &str| {
    let _ = RewriteRules::from_yaml(data);
});
