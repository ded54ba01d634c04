//! Shared types for the mailscrub sanitization pipeline.
//!
//! This crate provides the foundation the four pipeline stages build on:
//! - The accumulating [`MessageRecord`] threaded through all stages
//! - Content [`Fingerprint`]s used as idempotency and storage keys
//! - [`BlobStore`] and [`MetadataStore`] interfaces with filesystem
//!   implementations
//! - UTC timestamps in the fixed metadata form
//!
//! # The accumulating record
//!
//! Stages never mutate what earlier stages produced: each stage reads the
//! fields it declares and attaches exactly one new sub-record. Reading a
//! field a prior stage never produced is a typed error, not a panic.
//!
//! ```
//! use ms_common::{MessageRecord, Normalized, Fingerprint};
//! use std::collections::HashMap;
//!
//! let record = MessageRecord::new("incoming/123.eml");
//! assert!(record.normalized().is_err());
//!
//! let record = record.with_normalized(Normalized {
//!     fingerprint: Fingerprint::of(b"raw bytes"),
//!     subject: "hello".to_string(),
//!     html: "<p>hi</p>".to_string(),
//!     headers: HashMap::new(),
//! });
//! assert_eq!(record.normalized().unwrap().subject, "hello");
//! ```

pub mod error;
pub mod fingerprint;
pub mod meta;
pub mod record;
pub mod store;
pub mod time;

pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use meta::{Provenance, TemplateMeta};
pub use record::{AttachmentsScan, Deweaponized, MessageRecord, Normalized, PiiRedacted};
pub use store::{BlobStore, FsBlobStore, FsMetadataStore, MetadataStore};
pub use time::{now_iso, ISO_FORMAT};
