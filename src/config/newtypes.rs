//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Lightspeed OAuth client identifier.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Lightspeed OAuth client secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated long-lived refresh token.
///
/// Refresh tokens are exchanged for short-lived access tokens. Like
/// [`ClientSecret`], the value is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Creates a new validated refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRefreshToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyRefreshToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for RefreshToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(*****)")
    }
}

/// A validated base URL (scheme and host, optionally a port).
///
/// Trailing slashes are stripped so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::BaseUrl;
///
/// let url = BaseUrl::new("https://api.lightspeedapp.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.lightspeedapp.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.lightspeedapp.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
        assert!(matches!(ClientId::new("   "), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_refresh_token_masks_value_in_debug() {
        let token = RefreshToken::new("long-lived-token").unwrap();
        assert_eq!(format!("{token:?}"), "RefreshToken(*****)");
        assert_eq!(token.as_ref(), "long-lived-token");
    }

    #[test]
    fn test_refresh_token_rejects_empty_string() {
        assert!(matches!(
            RefreshToken::new(""),
            Err(ConfigError::EmptyRefreshToken)
        ));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://cloud.lightspeedapp.com/").unwrap();
        assert_eq!(url.as_ref(), "https://cloud.lightspeedapp.com");
        assert_eq!(url.host_name(), "cloud.lightspeedapp.com");
    }

    #[test]
    fn test_base_url_with_port() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.to_string(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.lightspeedapp.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("ht tp://example.com").is_err());
    }
}
