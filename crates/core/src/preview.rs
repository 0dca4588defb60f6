//! One entry point for turning editable code into a preview document.

use crate::component::preview_document;
use crate::error::ThemeError;
use crate::extract::{extract_html, strip_code_fences};
use crate::theme::inject_theme;
use crate::types::{ContentType, PreviewRequest};

/// Render the document shown in the preview frame.
///
/// HTML is extracted from any surrounding chatter and themed; React code is
/// unfenced and wrapped into a self-mounting page. The theme is validated
/// before anything is spliced.
pub fn render_preview(request: &PreviewRequest) -> Result<String, ThemeError> {
    request.theme.validate()?;

    let document = match request.content_type {
        ContentType::Html => inject_theme(extract_html(&request.content), &request.theme),
        ContentType::React => preview_document(strip_code_fences(&request.content), &request.theme),
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Font, Theme, ThemeConfig};

    #[test]
    fn html_preview_extracts_then_themes() {
        let request = PreviewRequest {
            content: "Here you go:\n<html><head></head><body>b</body></html>\nThanks".to_string(),
            content_type: ContentType::Html,
            theme: ThemeConfig::default(),
        };
        let doc = render_preview(&request).unwrap();
        assert!(doc.starts_with("<html><head><style>"));
        assert!(doc.ends_with("</head><body>b</body></html>"));
        assert!(!doc.contains("Thanks"));
    }

    #[test]
    fn react_preview_unfences_code() {
        let request = PreviewRequest {
            content: "```jsx\n<div>x</div>\n```".to_string(),
            content_type: ContentType::React,
            theme: ThemeConfig::new(Theme::Dark, Font::Mono, "#000000"),
        };
        let doc = render_preview(&request).unwrap();
        assert!(doc.contains("<div>x<\\/div>"));
        assert!(!doc.contains("```"));
    }

    #[test]
    fn invalid_color_is_rejected() {
        let request = PreviewRequest {
            content: "<p/>".to_string(),
            content_type: ContentType::Html,
            theme: ThemeConfig::new(Theme::Light, Font::Sans, "red}</style><script>"),
        };
        assert!(matches!(
            render_preview(&request),
            Err(ThemeError::InvalidColor { .. })
        ));
    }
}
