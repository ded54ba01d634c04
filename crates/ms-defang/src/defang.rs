//! The ordered defang transform pipeline.
//!
//! Order is fixed and load-bearing: href rewriting must see the original
//! attribute quoting, the domain rule must run after the URL rule so a
//! URL's scheme and path cannot confuse the narrower domain pattern, and
//! tag stripping runs last so it cannot remove text the URL and domain
//! rules still need to see.

use crate::RewriteRules;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::debug;

// Pre-compiled rewrite patterns
static RE_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)href\s*=\s*("[^"]*"|'[^']*')"#).unwrap());

static RE_BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://[^\s)<>\]]*").unwrap());

static RE_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:[a-z0-9-]+\.)+[a-z]{2,}\b").unwrap());

static RE_SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());

static RE_IFRAME_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<iframe\b.*?</iframe\s*>").unwrap());

static RE_FORM_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<form\b.*?</form\s*>").unwrap());

/// A strategy that neutralizes active content in an HTML body.
///
/// Implementations must uphold the safety contract: no live `href`
/// target, bare URL, or domain-like token survives in the output, and no
/// script, iframe, or form block remains.
pub trait Defanger {
    /// Rewrite `html` into its defanged form.
    fn defang(&self, html: &str) -> String;
}

/// Baseline regex-only defanger with no external dependencies.
#[derive(Debug, Clone)]
pub struct RegexDefanger {
    rules: RewriteRules,
}

impl RegexDefanger {
    /// Create a defanger applying the given replacement tokens.
    pub fn new(rules: RewriteRules) -> Self {
        Self { rules }
    }

    /// The replacement tokens in effect.
    pub fn rules(&self) -> &RewriteRules {
        &self.rules
    }
}

impl Default for RegexDefanger {
    fn default() -> Self {
        Self::new(RewriteRules::default())
    }
}

impl Defanger for RegexDefanger {
    fn defang(&self, html: &str) -> String {
        // 1. Defuse click targets, keeping the anchor text.
        let out = RE_HREF.replace_all(html, r##"href="#""##);

        // 2. Bare URLs, any scheme variant of http(s).
        let out = RE_BARE_URL.replace_all(&out, NoExpand(self.rules.bare_urls.as_str()));

        // 3. Bare domain-like tokens. Intentionally broad; over-matching
        //    is preferred to leaving a live domain in place.
        let out = RE_DOMAIN.replace_all(&out, NoExpand(self.rules.domains.as_str()));

        // 4. Active-content blocks, content included.
        let out = RE_SCRIPT_BLOCK.replace_all(&out, "");
        let out = RE_IFRAME_BLOCK.replace_all(&out, "");
        let out = RE_FORM_BLOCK.replace_all(&out, "");

        debug!(
            in_bytes = html.len(),
            out_bytes = out.len(),
            "html defanged"
        );
        out.into_owned()
    }
}
