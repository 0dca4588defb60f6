//! `pagesmith serve` -- HTTP server for generation and previews.
//!
//! Exposes the relay and the preview renderers as an async HTTP service
//! using `axum` + `tokio`. Each request is handled independently; the only
//! shared state is the provider handle.
//!
//! Endpoints:
//! - GET  /          - Single-page frontend
//! - GET  /health    - Server status
//! - POST /generate  - Relay a prompt to the model (`{prompt, type?}`)
//! - POST /extract   - Cut the editable code out of raw model text
//! - POST /preview   - Themed preview document (text/html)
//!
//! Bodies may be JSON or form-encoded, up to 10 MB. CORS admits a single
//! configured origin.

mod body;
mod handlers;
mod middleware;
mod page;
mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use log::{info, warn};
use tower_http::cors::CorsLayer;

use self::handlers::{
    handle_extract, handle_generate, handle_health, handle_index, handle_not_found,
    handle_preview,
};
use self::middleware::log_requests;
use self::state::AppState;
use crate::config::Settings;
use crate::relay::{GeminiConfig, GeminiProvider, ModelProvider};

/// Maximum request body size: 10 MB.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the provider for `settings`, or `None` without a credential.
pub(crate) fn provider_from_settings(settings: &Settings) -> Option<Arc<dyn ModelProvider>> {
    let api_key = settings.api_key.clone()?;
    let config = GeminiConfig::new(api_key)
        .with_model(settings.model.clone())
        .with_api_base(settings.api_base.clone());
    Some(Arc::new(GeminiProvider::new(config)))
}

/// Build the router with all routes and layers.
fn build_router(
    state: Arc<AppState>,
    allowed_origin: &str,
) -> Result<Router, Box<dyn std::error::Error>> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|e| format!("invalid allowed origin '{}': {}", allowed_origin, e))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/generate", post(handle_generate))
        .route("/extract", post(handle_extract))
        .route("/preview", post(handle_preview))
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn(log_requests))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state);

    Ok(app)
}

/// Start the HTTP server and run until Ctrl+C.
pub(crate) async fn start_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let provider = provider_from_settings(&settings);
    match &provider {
        Some(p) => info!("Using model: {}", p.model()),
        None => warn!("GEMINI_API_KEY is not set; /generate will answer 500 until it is"),
    }
    info!("CORS origin: {}", settings.allowed_origin);

    let state = Arc::new(AppState { provider });
    let app = build_router(state, &settings.allowed_origin)?;

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on port {}", settings.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down.");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal...");
}
