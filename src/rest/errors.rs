//! Error type for envelope extraction.
//!
//! Lightspeed wraps every payload in an object keyed by the resource name
//! (`{"Item": [...]}`). [`EnvelopeError`] reports a body that does not have
//! the expected shape.
//!
//! # Example
//!
//! ```rust
//! use lightspeed_retail::rest::EnvelopeError;
//!
//! let error = EnvelopeError::missing("Category");
//! assert_eq!(error.envelope, "Category");
//! assert!(error.to_string().contains("missing"));
//! ```

use thiserror::Error;

/// A response body whose envelope is absent or does not decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Malformed '{envelope}' response: {reason}")]
pub struct EnvelopeError {
    /// The envelope key that was expected (e.g., "Item").
    pub envelope: &'static str,
    /// What was wrong with it.
    pub reason: String,
}

impl EnvelopeError {
    /// The envelope key is not in the body.
    #[must_use]
    pub fn missing(envelope: &'static str) -> Self {
        Self {
            envelope,
            reason: format!("key '{envelope}' is missing from the response body"),
        }
    }

    /// The envelope value does not decode to the expected type.
    #[must_use]
    pub fn invalid(envelope: &'static str, error: &serde_json::Error) -> Self {
        Self {
            envelope,
            reason: format!("failed to deserialize '{envelope}': {error}"),
        }
    }
}
