//! Error types for the Lightspeed Retail client.
//!
//! [`LightspeedError`] is returned by every [`LightspeedClient`](super::LightspeedClient)
//! operation. [`LightspeedError::kind`] collapses it into an [`ErrorKind`] for
//! callers that only need to branch on the failure category.
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_retail::{ErrorKind, LightspeedError};
//!
//! match client.items(&QueryOptions::new()).await {
//!     Ok(items) => println!("{} items", items.len()),
//!     Err(e) if e.kind() == ErrorKind::Authentication => eprintln!("re-authorize the app: {e}"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::oauth::OAuthError;
use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::rest::EnvelopeError;

/// Category of a [`LightspeedError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The client could not be constructed from its configuration.
    Configuration,
    /// The refresh-token exchange failed.
    Authentication,
    /// The API answered with a non-2xx status.
    Status,
    /// No response was received.
    Transport,
    /// The API answered 2xx with a body of the wrong shape.
    MalformedResponse,
}

/// Errors returned by the Lightspeed Retail client.
///
/// # Thread Safety
///
/// `LightspeedError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum LightspeedError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The refresh-token exchange failed.
    #[error(transparent)]
    Authentication(#[from] OAuthError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body lacks the expected envelope or does not decode.
    #[error("Malformed '{envelope}' response: {reason}")]
    MalformedResponse {
        /// The envelope key that was expected (e.g., "Item").
        envelope: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl From<EnvelopeError> for LightspeedError {
    fn from(error: EnvelopeError) -> Self {
        Self::MalformedResponse {
            envelope: error.envelope,
            reason: error.reason,
        }
    }
}

impl LightspeedError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Http(HttpError::Response(_)) => ErrorKind::Status,
            Self::Http(HttpError::InvalidBody { .. }) | Self::MalformedResponse { .. } => {
                ErrorKind::MalformedResponse
            }
            Self::Http(HttpError::Network(_)) => ErrorKind::Transport,
        }
    }

    /// Returns the HTTP status of the failing response, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(e) if !e.is_network() => Some(e.status()),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

// Verify LightspeedError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LightspeedError>();
};
