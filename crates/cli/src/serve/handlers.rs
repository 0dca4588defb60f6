//! HTTP route handlers: page, health, generate, extract, preview.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use pagesmith_core::{extract_html, render_preview, strip_code_fences, ContentType};
use pagesmith_core::{GenerationRequest, PreviewRequest};
use serde::{Deserialize, Serialize};

use super::body::JsonOrForm;
use super::json_error;
use super::page::INDEX_HTML;
use super::state::AppState;
use crate::relay::{relay, RelayError};

impl RelayError {
    /// HTTP status for this failure: user errors are 400, the rest 500.
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            RelayError::EmptyPrompt => StatusCode::BAD_REQUEST,
            RelayError::MissingCredential | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        json_error(self.status(), &self.to_string()).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /
pub(crate) async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub(crate) async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.provider.as_ref().map(|p| p.model().to_string()),
    });
    (StatusCode::OK, Json(response))
}

/// POST /generate
pub(crate) async fn handle_generate(
    State(state): State<Arc<AppState>>,
    JsonOrForm(request): JsonOrForm<GenerationRequest>,
) -> Response {
    match relay(state.provider.as_deref(), &request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractRequest {
    #[serde(default)]
    content: String,
    #[serde(rename = "type", default)]
    content_type: ContentType,
}

#[derive(Debug, Serialize)]
struct ExtractResponse<'a> {
    content: &'a str,
}

/// POST /extract
///
/// Turns raw model text into the code shown in the editor: the HTML
/// document for `html`, the unfenced snippet for `react`.
pub(crate) async fn handle_extract(
    JsonOrForm(request): JsonOrForm<ExtractRequest>,
) -> impl IntoResponse {
    let content = match request.content_type {
        ContentType::Html => extract_html(&request.content),
        ContentType::React => strip_code_fences(&request.content),
    };
    (StatusCode::OK, Json(ExtractResponse { content })).into_response()
}

/// POST /preview
pub(crate) async fn handle_preview(
    JsonOrForm(request): JsonOrForm<PreviewRequest>,
) -> Response {
    match render_preview(&request) {
        Ok(document) => Html(document).into_response(),
        Err(e) => json_error(StatusCode::BAD_REQUEST, &e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::ProviderError;

    #[test]
    fn relay_errors_map_to_status() {
        assert_eq!(RelayError::EmptyPrompt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::MissingCredential.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let upstream = RelayError::Upstream(ProviderError::Api {
            status: 429,
            message: "quota".to_string(),
        });
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn relay_error_response_carries_status() {
        let response = RelayError::EmptyPrompt.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
