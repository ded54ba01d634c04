//! UTC timestamps in the fixed metadata form.

use chrono::Utc;

/// Fixed ISO-8601 form: second precision, trailing `Z`.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current UTC time formatted for metadata records.
pub fn now_iso() -> String {
    Utc::now().format(ISO_FORMAT).to_string()
}
