//! Gemini provider -- calls the Generative Language `generateContent` REST
//! endpoint with a single user turn.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::provider::{ModelProvider, ProviderError};

/// Default REST base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for generation.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Gemini API key.
    pub api_key: String,
    /// Model identifier (defaults to gemini-2.0-flash).
    pub model: String,
    /// Base URL of the REST API, without a trailing slash.
    pub api_base: String,
}

impl GeminiConfig {
    /// Create a new config with the given API key and defaults.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

/// A provider backed by the Gemini API.
pub struct GeminiProvider {
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, instruction: &str) -> Result<String, ProviderError> {
        // ureq is synchronous, so wrap in spawn_blocking
        let config = self.config.clone();
        let instruction = instruction.to_string();

        tokio::task::spawn_blocking(move || call_gemini_api(&config, &instruction))
            .await
            .map_err(|e| ProviderError::Internal(format!("task join error: {}", e)))?
    }
}

// ── API call ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Make a synchronous call to the Gemini API.
fn call_gemini_api(config: &GeminiConfig, instruction: &str) -> Result<String, ProviderError> {
    let request_body = GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user".to_string(),
            parts: vec![RequestPart {
                text: instruction.to_string(),
            }],
        }],
    };

    // Error statuses are read as bodies so the provider's message can be
    // surfaced instead of a bare status code.
    let agent_config = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build();
    let agent = ureq::Agent::new_with_config(agent_config);

    let url = config.endpoint();
    let response = agent
        .post(url.as_str())
        .header("x-goog-api-key", config.api_key.as_str())
        .header("content-type", "application/json")
        .send_json(&request_body)
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(ProviderError::Api {
            status,
            message: parse_error_body(status, &body),
        });
    }

    parse_generate_response(&body)
}

// ── Response parsing ─────────────────────────────────────────────────────────

/// Pull the provider's own message out of an error body.
fn parse_error_body(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!("provider returned HTTP {}", status),
        Err(_) => format!("provider returned HTTP {}: {}", status, body.trim()),
    }
}

/// Concatenate the text parts of the first candidate.
fn parse_generate_response(body: &str) -> Result<String, ProviderError> {
    let resp: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    let candidate = match resp.candidates.into_iter().next() {
        Some(c) => c,
        None => {
            let reason = resp
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(ProviderError::Empty(format!(
                "model returned no content: {}",
                reason
            )));
        }
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(ProviderError::Empty(format!(
            "model returned no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}
