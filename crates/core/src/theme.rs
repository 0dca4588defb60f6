//! Theme injection for HTML previews.
//!
//! Splices a `<style>` block into the document by locating literal tags. The
//! markup is never parsed; callers should run [`ThemeConfig::validate`]
//! first so the color cannot break out of the stylesheet.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::ThemeConfig;

/// An opening `<html ...>` tag.
static HTML_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<html\b[^>]*>").unwrap());

const BUTTON_SELECTORS: &str =
    r#"button, .btn, a.btn, input[type="button"], input[type="submit"]"#;

/// Build the stylesheet for `config`.
pub fn theme_css(config: &ThemeConfig) -> String {
    let mut css = String::new();
    let _ = writeln!(css, ":root {{");
    let _ = writeln!(css, "  --primary-color: {};", config.primary_color);
    let _ = writeln!(css, "}}");
    let _ = writeln!(css, "body {{");
    let _ = writeln!(css, "  font-family: {};", config.font.stack());
    let _ = writeln!(css, "  background-color: {};", config.theme.background());
    let _ = writeln!(css, "  color: {};", config.theme.text_color());
    let _ = writeln!(css, "}}");
    if let Some(gradient) = config.theme.gradient() {
        let _ = writeln!(css, "body {{");
        let _ = writeln!(css, "  background: {};", gradient);
        let _ = writeln!(css, "}}");
    }
    let _ = writeln!(css, "{} {{", BUTTON_SELECTORS);
    let _ = writeln!(css, "  background-color: var(--primary-color) !important;");
    let _ = writeln!(css, "}}");
    css
}

/// Insert the theme stylesheet into `html`.
///
/// In order of preference: right before the first `</head>`; as a new
/// `<head>` right after the opening `<html ...>` tag; or by wrapping the
/// whole fragment in a fresh document.
pub fn inject_theme(html: &str, config: &ThemeConfig) -> String {
    let style = format!("<style>{}</style>", theme_css(config));

    // ASCII lowercasing keeps byte offsets aligned with `html`.
    if let Some(pos) = html.to_ascii_lowercase().find("</head>") {
        let mut out = String::with_capacity(html.len() + style.len());
        out.push_str(&html[..pos]);
        out.push_str(&style);
        out.push_str(&html[pos..]);
        return out;
    }

    if let Some(open) = HTML_OPEN_RE.find(html) {
        let mut out = String::with_capacity(html.len() + style.len() + 13);
        out.push_str(&html[..open.end()]);
        out.push_str("<head>");
        out.push_str(&style);
        out.push_str("</head>");
        out.push_str(&html[open.end()..]);
        return out;
    }

    format!("<!DOCTYPE html><html><head>{}</head>{}</html>", style, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Font, Theme};

    fn dark() -> ThemeConfig {
        ThemeConfig::new(Theme::Dark, Font::Mono, "#ff0000")
    }

    #[test]
    fn css_carries_every_setting() {
        let css = theme_css(&dark());
        assert!(css.contains("--primary-color: #ff0000;"));
        assert!(css.contains("font-family: ui-monospace, monospace;"));
        assert!(css.contains("background-color: #111827;"));
        assert!(css.contains("color: white;"));
        assert!(css.contains("var(--primary-color) !important"));
        assert!(!css.contains("linear-gradient"));
    }

    #[test]
    fn colorful_css_adds_gradient_block() {
        let css = theme_css(&ThemeConfig::new(Theme::Colorful, Font::Sans, "#000"));
        assert!(css.contains("background-color: transparent;"));
        assert!(css.contains("background: linear-gradient(to right, #3B82F6, #8B5CF6);"));
    }

    #[test]
    fn inserts_before_closing_head() {
        let html = "<html><head><title>x</title></head><body>y</body></html>";
        let out = inject_theme(html, &dark());
        let style = format!("<style>{}</style>", theme_css(&dark()));
        assert_eq!(
            out,
            format!("<html><head><title>x</title>{}</head><body>y</body></html>", style)
        );
    }

    #[test]
    fn closing_head_match_ignores_case() {
        let html = "<HTML><HEAD></HEAD><BODY></BODY></HTML>";
        let out = inject_theme(html, &dark());
        assert!(out.starts_with("<HTML><HEAD><style>"));
        assert!(out.ends_with("</style></HEAD><BODY></BODY></HTML>"));
    }

    #[test]
    fn synthesizes_head_inside_html_tag() {
        let html = "<!DOCTYPE html><html lang=\"en\"><body>z</body></html>";
        let out = inject_theme(html, &dark());
        assert!(out.starts_with("<!DOCTYPE html><html lang=\"en\"><head><style>"));
        assert!(out.ends_with("</style></head><body>z</body></html>"));
        assert_eq!(out.matches("<html").count(), 1);
    }

    #[test]
    fn wraps_bare_fragment() {
        let out = inject_theme("<div>card</div>", &dark());
        assert!(out.starts_with("<!DOCTYPE html><html><head><style>"));
        assert!(out.ends_with("</style></head><div>card</div></html>"));
    }

    #[test]
    fn injection_is_deterministic() {
        let html = "<html><head></head><body>p</body></html>";
        let light = ThemeConfig::default();
        let first = inject_theme(html, &light);
        let _ = inject_theme(html, &dark());
        assert_eq!(inject_theme(html, &light), first);
    }
}
