//! Stage orchestration for the mailscrub sanitization pipeline.
//!
//! Runs the four stages in order — normalize, deweaponize, redact,
//! render — threading the accumulating [`ms_common::MessageRecord`]
//! through them, plus the attachment-scan stub. Each stage is also
//! exposed as a record-in/record-out entry point so an external
//! orchestrator can invoke stages individually.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
