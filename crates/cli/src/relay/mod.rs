//! Request relay: prompt in, raw model text out.
//!
//! One provider call per request. No retry, no timeout, no caching; the
//! provider's error text reaches the user unchanged.

pub(crate) mod gemini;
pub(crate) mod provider;

use log::{debug, warn};
use pagesmith_core::prompt::instruction;
use pagesmith_core::{GenerationRequest, GenerationResult};

pub(crate) use self::gemini::{GeminiConfig, GeminiProvider};
pub(crate) use self::provider::{ModelProvider, ProviderError};

/// Why a generation could not be served.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RelayError {
    /// The prompt was missing or blank.
    #[error("Prompt is required")]
    EmptyPrompt,
    /// No provider credential is configured.
    #[error("API key missing")]
    MissingCredential,
    /// The provider call failed.
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

/// Relay one generation request to `provider`.
///
/// The prompt is checked before the credential, so a blank prompt is a user
/// error even on a server without an API key.
pub(crate) async fn relay(
    provider: Option<&dyn ModelProvider>,
    request: &GenerationRequest,
) -> Result<GenerationResult, RelayError> {
    if request.prompt.trim().is_empty() {
        return Err(RelayError::EmptyPrompt);
    }

    let provider = provider.ok_or(RelayError::MissingCredential)?;

    let instruction = instruction(&request.prompt, request.content_type);
    debug!(
        "relaying {} prompt ({} chars) to {}",
        request.content_type,
        request.prompt.len(),
        provider.model()
    );

    let content = provider.generate(&instruction).await.map_err(|e| {
        match e.status() {
            Some(status) => warn!(
                "provider {} failed (HTTP {}): {}",
                provider.model(),
                status,
                e
            ),
            None => warn!("provider {} failed: {}", provider.model(), e),
        }
        RelayError::Upstream(e)
    })?;

    Ok(GenerationResult {
        content,
        content_type: request.content_type,
        model_used: provider.model().to_string(),
    })
}
