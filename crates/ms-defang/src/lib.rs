//! HTML defanging for mailscrub.
//!
//! Stage 2 of the pipeline: rewrite an HTML body so that nothing in it can
//! be clicked, fetched, or executed, while the visual structure stays
//! reviewable. Hyperlink targets become inert, bare URLs and domain-like
//! tokens are replaced with placeholder tokens, and script/iframe/form
//! blocks are removed outright.
//!
//! Replacement tokens come from a [`RewriteRules`] value, loaded once from
//! a YAML rule document at process start and passed by reference into the
//! stage; any missing category falls back to a built-in token.
//!
//! # Example
//!
//! ```
//! use ms_defang::{Defanger, RegexDefanger, RewriteRules};
//!
//! let defanger = RegexDefanger::new(RewriteRules::default());
//! let safe = defanger.defang("Visit example.com now");
//! assert_eq!(safe, "Visit <DOMAIN_REMOVED> now");
//! ```

pub mod defang;
pub mod error;
pub mod rules;

pub use defang::{Defanger, RegexDefanger};
pub use error::{DefangError, Result};
pub use rules::{RewriteRules, DEFAULT_DOMAIN_TOKEN, DEFAULT_URL_TOKEN};
