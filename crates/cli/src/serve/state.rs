//! Application state.

use std::sync::Arc;

use crate::relay::ModelProvider;

/// Application state shared across request handlers.
pub(crate) struct AppState {
    /// Configured model provider. `None` when no credential is set; the
    /// server still starts so that the UI and previews keep working.
    pub(crate) provider: Option<Arc<dyn ModelProvider>>,
}
