//! Error types for the Alternatives.PE API client.
//!
//! Every failure surfaced by this crate is an [`Error`]. HTTP status codes
//! returned by the API are mapped onto dedicated variants so callers can
//! branch on the kind of failure without inspecting raw responses.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Alternatives.PE operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Alternatives.PE API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credentials were rejected, or a bearer token was refused (401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
        /// HTTP status code, when the failure came from a response
        status: Option<u16>,
    },

    /// Resource not found (404)
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
        /// HTTP status code
        status: Option<u16>,
    },

    /// Request parameters were rejected (422).
    #[error("Validation failed: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
        /// Structured `errors` payload, when the body carried one
        errors: Option<Value>,
        /// HTTP status code
        status: Option<u16>,
    },

    /// Rate limited by the API (429)
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Human-readable error message
        message: String,
        /// HTTP status code
        status: Option<u16>,
    },

    /// The API failed with a 5xx status.
    #[error("Server error ({status:?}): {message}")]
    Server {
        /// Human-readable error message
        message: String,
        /// HTTP status code
        status: Option<u16>,
    },

    /// Any other non-success response.
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Coarse classification of an [`Error`], useful for metrics labels and
/// `match` arms that do not care about payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Transport-level failure
    Transport,
    /// Response body could not be decoded
    Decode,
    /// 401 or credential exchange failure
    Authentication,
    /// 404
    NotFound,
    /// 422
    Validation,
    /// 429
    RateLimited,
    /// 5xx
    Server,
    /// Any other non-success status
    Api,
    /// Local configuration or input problem
    Client,
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried.
    ///
    /// # Example
    ///
    /// ```
    /// use altpe_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::RateLimited { .. } | Error::Server { .. }
        )
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::NotFound { .. } | Error::Validation { .. } => true,
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Server { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. }
            | Error::NotFound { status, .. }
            | Error::Validation { status, .. }
            | Error::RateLimited { status, .. }
            | Error::Server { status, .. } => *status,
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The message extracted from the response, for API errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Authentication { message, .. }
            | Error::NotFound { message, .. }
            | Error::Validation { message, .. }
            | Error::RateLimited { message, .. }
            | Error::Server { message, .. }
            | Error::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) => ErrorKind::Transport,
            Error::Json(_) => ErrorKind::Decode,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::RateLimited { .. } => ErrorKind::RateLimited,
            Error::Server { .. } => ErrorKind::Server,
            Error::Api { .. } => ErrorKind::Api,
            Error::Config(_) | Error::InvalidInput(_) | Error::UrlParse(_) => ErrorKind::Client,
        }
    }

    pub(crate) fn authentication(message: impl Into<String>, status: Option<u16>) -> Self {
        Error::Authentication {
            message: message.into(),
            status,
        }
    }
}
