//! Error handling for the portfolio client

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Unified error type for the portfolio client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx response from the backend, with the body's display message when present
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no error body"))]
    Api {
        /// HTTP status returned by the backend
        status: reqwest::StatusCode,
        /// `message` or `error` field extracted from the JSON body
        message: Option<String>,
    },

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Client-side draft rejection, emitted before any network call
    #[error("Validation error: {0}")]
    Validation(#[from] crate::resources::ValidationError),

    /// Media upload errors
    #[error("Media error: {0}")]
    Media(String),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// General errors
    #[error("{0}")]
    General(String),
}

/// Error body shape used by the backend routes
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl Error {
    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new media error
    pub fn media<T: fmt::Display>(msg: T) -> Self {
        Error::Media(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Build an API error from a non-2xx response body.
    ///
    /// The backend reports problems as `{"message": ...}` or `{"error": ...}`;
    /// whichever is present (and non-empty) becomes the display message.
    pub(crate) fn api(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());
        Error::Api { status, message }
    }

    /// Display message the server attached to a rejected request, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
