//! Error types for the Mode client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Mode client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credentials were missing when the client was built.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error (connect failure, timeout, body read failure).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the Mode API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// A write endpoint answered with a success status other than the one it
    /// signals completion with.
    #[error("Unexpected status {status} at {url} (expected {expected})")]
    UnexpectedStatus { status: u16, expected: u16, url: String },

    /// A HAL key the caller depends on is absent from the response.
    #[error("Missing field `{field}` in response from {url}")]
    MissingField { field: String, url: String },

    /// The response body could not be decoded into the expected record.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A caller-supplied argument is outside the accepted set.
    #[error("Invalid value for {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Invalid URL or organization.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error indicates the response did not have the expected shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::Decode { .. })
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}
