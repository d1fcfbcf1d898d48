//! Error types for the Ellie API client.

use std::fmt;

/// Non-2xx responses from the Ellie API.
///
/// Every variant keeps the raw response body text so callers can surface the
/// server's own message unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failure (401 or 403).
    Auth { status: u16, message: String },
    /// Resource not found (404).
    NotFound { message: String },
    /// Request rejected by the server (400).
    Validation { message: String },
    /// Rate limit exceeded (429).
    RateLimit {
        retry_after: Option<u64>,
        message: String,
    },
    /// Any other non-success status.
    Http { status: u16, message: String },
}

impl ApiError {
    /// Builds an error from a response status, its `Retry-After` header and body text.
    pub fn from_status(status: u16, retry_after: Option<u64>, message: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth { status, message },
            404 => ApiError::NotFound { message },
            400 => ApiError::Validation { message },
            429 => ApiError::RateLimit {
                retry_after,
                message,
            },
            _ => ApiError::Http { status, message },
        }
    }

    /// Returns the HTTP status code of the failed response.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Auth { status, .. } | ApiError::Http { status, .. } => *status,
            ApiError::NotFound { .. } => 404,
            ApiError::Validation { .. } => 400,
            ApiError::RateLimit { .. } => 429,
        }
    }

    /// Returns the raw response body text.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Auth { message, .. }
            | ApiError::NotFound { message }
            | ApiError::Validation { message }
            | ApiError::RateLimit { message, .. }
            | ApiError::Http { message, .. } => message,
        }
    }

    /// Returns true for 401/403 responses.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status();
        let message = self.message().trim();
        match (self, message.is_empty()) {
            (ApiError::RateLimit { retry_after: Some(secs), .. }, true) => {
                write!(f, "API error (status {status}): retry after {secs} seconds")
            }
            (_, true) => write!(f, "API error (status {status})"),
            (_, false) => write!(f, "API error (status {status}): {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by [`EllieClient`](crate::client::EllieClient).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside 200..300.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A request body could not be encoded or a response body could not be decoded.
    #[error("failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters could not be form-encoded.
    #[error("failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The API key cannot be sent as an HTTP header value.
    #[error("invalid API key: contains characters not allowed in an HTTP header")]
    InvalidApiKey,
}

/// Result alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;
