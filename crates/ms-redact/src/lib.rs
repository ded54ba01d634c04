//! Pattern-based PII redaction for mailscrub.
//!
//! Stage 3 of the pipeline: scan defanged HTML for email addresses, phone
//! numbers, and payment-card numbers, and replace every match with a fixed
//! placeholder token.
//!
//! Categories apply in a fixed order; once an earlier category's token has
//! consumed a region of text, a later category cannot match inside it.
//! Redaction never fails: zero matches is a no-op, and ambiguous matches
//! are over-redacted rather than skipped.
//!
//! # Example
//!
//! ```
//! use ms_redact::{PatternRedactor, Redactor};
//!
//! let redactor = PatternRedactor::new();
//! assert_eq!(redactor.redact("Contact a@b.com"), "Contact <EMAIL>");
//! ```

pub mod category;
pub mod patterns;
pub mod redactor;

pub use category::PiiCategory;
pub use patterns::pattern;
pub use redactor::{PatternRedactor, RedactionEntity, Redactor};
