//! Runtime configuration read from the environment (and `.env`).

use std::env;

use crate::relay::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Default listening port.
pub(crate) const DEFAULT_PORT: u16 = 4000;

/// Default origin allowed by CORS: the local frontend dev server.
pub(crate) const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server and provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Gemini credential. `None` when unset or empty.
    pub(crate) api_key: Option<String>,
    pub(crate) port: u16,
    pub(crate) allowed_origin: String,
    pub(crate) model: String,
    pub(crate) api_base: String,
}

impl Settings {
    /// Load `.env` if present, then read settings from the environment.
    pub(crate) fn load() -> Self {
        // A missing .env file is normal outside development.
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("PORT")
            .and_then(|v| match v.trim().parse::<u16>() {
                Ok(p) => Some(p),
                Err(_) => {
                    log::warn!("ignoring invalid PORT '{}', using {}", v, DEFAULT_PORT);
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            api_key: non_empty("GEMINI_API_KEY"),
            port,
            allowed_origin: non_empty("PAGESMITH_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            model: non_empty("PAGESMITH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("PAGESMITH_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }
}
