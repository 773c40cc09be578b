//! Client configuration
//!
//! The bundle runs in a browser, so the only environment it can read is the
//! one baked in at build time (`SMARTSEARCH_API_BASE`).

use crate::error::ConfigError;

/// Backend used when no override is compiled in
pub const DEFAULT_API_BASE: &str = "https://smartsearch-backend-7drs.onrender.com/api";
/// Number of recent queries shown on the settings page
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;
/// Locale handed to the speech recognizer
pub const DEFAULT_VOICE_LOCALE: &str = "en-US";

const SUCCESS_TOAST_MS: u32 = 2000;
const ERROR_TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is joined onto
    pub api_base: String,
    pub history_limit: u32,
    pub voice_locale: String,
    pub success_toast_ms: u32,
    pub error_toast_ms: u32,
}

impl ClientConfig {
    /// Build the config from compile-time environment, falling back to defaults
    pub fn from_env() -> Self {
        match option_env!("SMARTSEARCH_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::with_api_base(base),
            _ => Self::default(),
        }
    }

    pub fn with_api_base(base: impl Into<String>) -> Self {
        Self {
            api_base: base.into().trim().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBase(self.api_base.clone()));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            voice_locale: DEFAULT_VOICE_LOCALE.to_string(),
            success_toast_ms: SUCCESS_TOAST_MS,
            error_toast_ms: ERROR_TOAST_MS,
        }
    }
}
