//! OAuth-specific error types for the Lightspeed Retail client.
//!
//! # Example
//!
//! ```rust
//! use lightspeed_retail::auth::oauth::OAuthError;
//!
//! let error = OAuthError::TokenRefreshFailed {
//!     status: 400,
//!     message: "invalid_grant".to_string(),
//! };
//! assert!(error.to_string().contains("400"));
//! assert!(!error.is_network());
//! ```

use thiserror::Error;

/// Errors that can occur while exchanging the refresh token.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token exchange did not yield a usable access token.
    ///
    /// Covers non-2xx responses, network failures and unparseable bodies.
    /// `status` is `0` when no HTTP response was received.
    #[error("Token refresh failed with status {status}: {message}")]
    TokenRefreshFailed {
        /// The HTTP status code returned, or `0` for network errors.
        status: u16,
        /// The error message from the response or the transport.
        message: String,
    },
}

impl OAuthError {
    /// Returns the HTTP status of the failed exchange, `0` if none was received.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::TokenRefreshFailed { status, .. } => *status,
        }
    }

    /// Returns `true` if the exchange failed before any response arrived.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        self.status() == 0
    }
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
