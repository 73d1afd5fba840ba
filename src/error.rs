//! Error types for the Lightspeed Retail client.
//!
//! This module contains the error type used for configuration and
//! validation failures that happen before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use lightspeed_retail::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client identifier cannot be empty.
    #[error("Client ID cannot be empty. Please provide the client ID of your Lightspeed app.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret of your Lightspeed app.")]
    EmptyClientSecret,

    /// Refresh token cannot be empty.
    #[error("Refresh token cannot be empty. Please provide a refresh token obtained from the OAuth flow.")]
    EmptyRefreshToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.lightspeedapp.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the variable that was looked up.
        name: &'static str,
    },
}
