//! Configuration constants and utilities for draftline
//!
//! Process-wide configuration is read once at startup and passed into
//! the controller as an explicit struct; nothing reads ambient globals
//! after construction.

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable name for overriding the backend base URL
pub const BASE_URL_ENV_VAR: &str = "DRAFTLINE_BASE_URL";

/// Environment variable name for the anti-forgery token
pub const CSRF_TOKEN_ENV_VAR: &str = "DRAFTLINE_CSRF_TOKEN";

/// Quiescence delay after the last search keystroke before a fetch fires
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Per-request timeout for the HTTP API client
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Get the backend base URL, checking the environment variable first,
/// then falling back to the default
pub fn get_base_url() -> String {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Get the anti-forgery token from the environment, empty when unset
pub fn get_csrf_token() -> String {
    std::env::var_os(CSRF_TOKEN_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_default()
}

/// Read-only API configuration, established once at initialization.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub csrf_token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: csrf_token.into(),
        }
    }

    /// Build from the environment variables above.
    pub fn from_env() -> Self {
        Self::new(get_base_url(), get_csrf_token())
    }

    /// Collection endpoint: list and create.
    pub fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    /// Member endpoint: update and delete.
    pub fn article_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/articles/{}", self.base_url, id)
    }
}
