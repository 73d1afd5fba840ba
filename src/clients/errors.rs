//! HTTP-specific error types for the Lightspeed Retail client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_retail::clients::{HttpClient, HttpRequest, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidBody { code, message }) => println!("Bad body ({code}): {message}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message holds the upstream `message`/`error` fields when the body
/// carries them, otherwise a truncated copy of the raw body.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Item not found".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Item not found");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error message extracted from the response.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response whose body is not valid JSON.
    #[error("Response with status {code} is not valid JSON: {message}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The parser error.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidBody { code, .. } => Some(*code),
            Self::Network(_) => None,
        }
    }
}
