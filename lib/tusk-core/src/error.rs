//! Error types for tusk.
//!
//! Every failure of a Mastodon call, whatever its origin, is reported as one
//! [`Error`]. Callers inspect [`Error::status`] and the variant to decide on
//! retries or user-facing messages; the library itself never retries.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

// ============================================================================
// Remote Error Body
// ============================================================================

/// Error body returned by a Mastodon server alongside a non-2xx status.
///
/// ```json
/// {"error": "invalid_grant", "error_description": "The provided authorization grant is invalid"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short error message or OAuth error code.
    pub error: String,
    /// Longer description, only sent by OAuth endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for tusk operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// HTTP-level errors (non-2xx status codes).
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request, rejected before any network call.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "account.emojis[0].url").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from status code and message.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Create an HTTP error with body.
    #[must_use]
    pub fn http_with_body(status: u16, message: impl Into<String>, body: bytes::Bytes) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create an HTTP error from a non-2xx status and its body.
    ///
    /// The message is taken from the Mastodon error body when it decodes,
    /// otherwise from the canonical reason phrase of the status.
    #[must_use]
    pub fn from_status(status: u16, body: bytes::Bytes) -> Self {
        let message = serde_json::from_slice::<ApiError>(&body)
            .map(|api| api.error)
            .ok()
            .or_else(|| {
                http::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "unknown status".to_string());

        if body.is_empty() {
            Self::http(status, message)
        } else {
            Self::http_with_body(status, message, body)
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the request was rejected before reaching the network.
    #[must_use]
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Returns `true` if the response body could not be decoded.
    #[must_use]
    pub const fn is_deserialization(&self) -> bool {
        matches!(self, Self::JsonDeserialization { .. })
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the response body if this is an HTTP error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the HTTP error body as JSON.
    ///
    /// Returns `Some(Ok(value))` if the error has a body and it deserializes successfully,
    /// `Some(Err(error))` if the body exists but deserialization fails,
    /// or `None` if there is no body or this is not an HTTP error.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }

    /// The Mastodon error body, when the server sent one.
    ///
    /// ```ignore
    /// match client.statuses().status("42").execute().await {
    ///     Err(e) if e.is_not_found() => println!("gone: {:?}", e.api_error()),
    ///     other => { /* ... */ }
    /// }
    /// ```
    #[must_use]
    pub fn api_error(&self) -> Option<ApiError> {
        self.decode_body::<ApiError>().and_then(Result::ok)
    }
}
