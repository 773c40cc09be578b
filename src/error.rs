//! Error types for the SmartSearch client

use serde::Deserialize;
use thiserror::Error;

/// Error payload returned by the backend on non-2xx responses.
///
/// The auth routes report failures in `message`, the search/chat/preference
/// routes in `error`. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure of a single backend round trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, body: ErrorBody },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-supplied `message` field, if the backend sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Server-supplied `error` field, if the backend sent one
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.error.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// `message` field or the given fallback
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// `error` field or the given fallback
    pub fn error_or(&self, fallback: &str) -> String {
        self.server_error().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Invalid client configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyApiBase,

    #[error("API base URL must start with http:// or https://, got '{0}'")]
    InvalidApiBase(String),

    #[error("Search history limit must be greater than zero")]
    ZeroHistoryLimit,
}

/// Anything that stops the app from starting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] ApiError),
}
