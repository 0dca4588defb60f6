//! Best-effort extraction of markup from free-form model output.
//!
//! Models routinely wrap the page in prose or Markdown fences. These helpers
//! cut the payload out with regular expressions; they do not parse HTML, so
//! malformed or nested documents can come back truncated.

use std::sync::LazyLock;

use regex::Regex;

/// Presence of either marker switches extraction on.
static DOCUMENT_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html|<!doctype").unwrap());

/// From the first `<html ...>` tag to the last `</html>`.
static HTML_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<html\b[^>]*>.*</html>").unwrap());

/// From the start of input to the last `</body>`.
static BODY_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)\A.*</body>").unwrap());

/// Return the part of `raw` most likely to be the HTML document.
///
/// Only applies when `raw` mentions `<html` or `<!doctype`; otherwise, or when
/// neither span matches, `raw` is returned unchanged.
pub fn extract_html(raw: &str) -> &str {
    if !DOCUMENT_MARKER_RE.is_match(raw) {
        return raw;
    }

    if let Some(m) = HTML_SPAN_RE.find(raw) {
        return m.as_str();
    }

    if let Some(m) = BODY_SPAN_RE.find(raw) {
        return m.as_str();
    }

    raw
}

/// Strip a surrounding Markdown code fence (```` ```jsx ... ``` ````).
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }

    // Skip the opening fence line, including any language tag
    let after_open = match text.find('\n') {
        Some(nl) => &text[nl + 1..],
        None => return text,
    };

    match after_open.rfind("```") {
        Some(close) => after_open[..close].trim(),
        None => after_open.trim(),
    }
}
