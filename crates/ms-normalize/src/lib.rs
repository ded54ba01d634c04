//! Raw message normalization for mailscrub.
//!
//! Stage 1 of the pipeline: parse a raw email message into a header
//! mapping, a subject, and a best-effort HTML body, plus a content
//! fingerprint of the raw bytes.
//!
//! Normalization never fails. Undecodable bytes are replaced during a
//! lossy decode, malformed header lines are ignored, and a message with no
//! usable body degrades to a fixed placeholder fragment.

pub mod body;
pub mod headers;
pub mod normalizer;

pub use body::{extract_html_document, wrap_plain_text, EMPTY_BODY_HTML};
pub use headers::{parse_headers, split_message};
pub use normalizer::Normalizer;
