//! Body extraction and plain-text wrapping.

/// Fixed fragment substituted when a message body is empty.
pub const EMPTY_BODY_HTML: &str = "<p>no content found</p>";

/// Extract the first `<html>...</html>` region of `body`, inclusive.
///
/// Matching is case-insensitive and tolerates attributes on the opening
/// tag. Returns `None` when either tag is missing.
pub fn extract_html_document(body: &str) -> Option<&str> {
    // Lower-casing ASCII never changes byte offsets.
    let lower = body.to_ascii_lowercase();
    let bytes = lower.as_bytes();

    let mut search = 0;
    let start = loop {
        let idx = lower[search..].find("<html")? + search;
        match bytes.get(idx + 5) {
            None | Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => break idx,
            _ => search = idx + 5,
        }
    };

    let close = lower[start..].find("</html>")? + start;
    Some(&body[start..close + "</html>".len()])
}

/// Wrap plain text as a single paragraph, converting line breaks to `<br>`.
///
/// Empty text yields the fixed [`EMPTY_BODY_HTML`] fragment.
pub fn wrap_plain_text(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return EMPTY_BODY_HTML.to_string();
    }
    let normalized = trimmed.replace("\r\n", "\n");
    format!(
        "<p>{}</p>",
        normalized.split('\n').collect::<Vec<_>>().join("<br>")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_pair() {
        let body = "preamble <html><body>x</body></html> trailer";
        assert_eq!(
            extract_html_document(body).unwrap(),
            "<html><body>x</body></html>"
        );
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let body = "<HTML><BODY>x</BODY></HTML>";
        assert_eq!(extract_html_document(body).unwrap(), body);
    }

    #[test]
    fn test_extract_tolerates_attributes() {
        let body = "<html lang=\"en\"><p>x</p></html>";
        assert_eq!(extract_html_document(body).unwrap(), body);
    }

    #[test]
    fn test_extract_skips_lookalike_tags() {
        let body = "<htmlish> nope </htmlish> <html><p>x</p></html>";
        assert_eq!(extract_html_document(body).unwrap(), "<html><p>x</p></html>");
    }

    #[test]
    fn test_extract_missing_close_is_none() {
        assert!(extract_html_document("<html><p>x</p>").is_none());
        assert!(extract_html_document("no markup at all").is_none());
    }

    #[test]
    fn test_wrap_converts_line_breaks() {
        assert_eq!(wrap_plain_text("line1\nline2"), "<p>line1<br>line2</p>");
    }

    #[test]
    fn test_wrap_normalizes_crlf() {
        assert_eq!(wrap_plain_text("a\r\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn test_wrap_empty_body_placeholder() {
        assert_eq!(wrap_plain_text(""), EMPTY_BODY_HTML);
        assert_eq!(wrap_plain_text("  \n \r\n "), EMPTY_BODY_HTML);
    }

    #[test]
    fn test_wrap_single_line() {
        assert_eq!(wrap_plain_text("hello"), "<p>hello</p>");
    }
}
