//! Header-block splitting and parsing.

use std::collections::HashMap;

/// Split a raw message into its header block and body.
///
/// The boundary is the first blank line, supporting both `\r\n\r\n` and
/// `\n\n` conventions; whichever occurs first wins. A message without a
/// blank line is all headers with an empty body.
pub fn split_message(text: &str) -> (&str, &str) {
    let crlf = text.find("\r\n\r\n");
    let lf = text.find("\n\n");
    match (crlf, lf) {
        (Some(c), Some(l)) if c < l => (&text[..c], &text[c + 4..]),
        (_, Some(l)) => (&text[..l], &text[l + 2..]),
        (Some(c), None) => (&text[..c], &text[c + 4..]),
        (None, None) => (text, ""),
    }
}

/// Parse `Name: Value` header lines into a lower-cased mapping.
///
/// Lines without a colon are ignored. Duplicate names keep the last value.
pub fn parse_headers(block: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    for line in block.lines() {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            if name.is_empty() {
                continue;
            }
            headers.insert(name, value.trim().to_string());
        }
    }
    headers
}
