//! Configuration types for the Lightspeed Retail client.
//!
//! This module provides the configuration used to construct a
//! [`LightspeedClient`](crate::LightspeedClient).
//!
//! # Overview
//!
//! - [`LightspeedConfig`]: credentials, hosts and tuning knobs
//! - [`LightspeedConfigBuilder`]: a builder for [`LightspeedConfig`]
//! - [`ClientId`], [`ClientSecret`], [`RefreshToken`]: validated credentials
//! - [`BaseUrl`]: a validated scheme + host URL
//! - [`RelationDefaults`]: default relation lists per list operation
//!
//! # Example
//!
//! ```rust
//! use lightspeed_retail::{LightspeedConfig, ClientId, ClientSecret, RefreshToken};
//!
//! let config = LightspeedConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .refresh_token(RefreshToken::new("my-refresh-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url().as_ref(), "https://api.lightspeedapp.com");
//! ```

mod newtypes;
mod relations;

pub use newtypes::{BaseUrl, ClientId, ClientSecret, RefreshToken};
pub use relations::RelationDefaults;

use chrono::Duration;

use crate::error::ConfigError;

/// Host serving the OAuth token endpoint.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://cloud.lightspeedapp.com";

/// Host serving the V3 REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.lightspeedapp.com";

/// Seconds subtracted from `expires_in` when computing a token's expiry.
pub const DEFAULT_TOKEN_EXPIRY_MARGIN_SECS: i64 = 30;

const CLIENT_ID_VAR: &str = "LIGHTSPEED_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "LIGHTSPEED_CLIENT_SECRET";
const REFRESH_TOKEN_VAR: &str = "LIGHTSPEED_REFRESH_TOKEN";
const AUTH_URL_VAR: &str = "LIGHTSPEED_AUTH_URL";
const API_URL_VAR: &str = "LIGHTSPEED_API_URL";

/// Configuration for a Lightspeed Retail client.
///
/// Credentials are immutable once built. The configuration is `Clone`,
/// `Send` and `Sync`.
#[derive(Clone, Debug)]
pub struct LightspeedConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    refresh_token: RefreshToken,
    auth_base_url: BaseUrl,
    api_base_url: BaseUrl,
    token_expiry_margin: Duration,
    relations: RelationDefaults,
    user_agent_prefix: Option<String>,
}

impl LightspeedConfig {
    /// Creates a new builder for constructing a `LightspeedConfig`.
    #[must_use]
    pub fn builder() -> LightspeedConfigBuilder {
        LightspeedConfigBuilder::new()
    }

    /// Builds a configuration from environment variables.
    ///
    /// Reads `LIGHTSPEED_CLIENT_ID`, `LIGHTSPEED_CLIENT_SECRET` and
    /// `LIGHTSPEED_REFRESH_TOKEN`, plus the optional `LIGHTSPEED_AUTH_URL`
    /// and `LIGHTSPEED_API_URL` host overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is unset,
    /// or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            std::env::var(name).map_err(|_| ConfigError::MissingEnvVar { name })
        };

        let mut builder = Self::builder()
            .client_id(ClientId::new(required(CLIENT_ID_VAR)?)?)
            .client_secret(ClientSecret::new(required(CLIENT_SECRET_VAR)?)?)
            .refresh_token(RefreshToken::new(required(REFRESH_TOKEN_VAR)?)?);

        if let Ok(url) = std::env::var(AUTH_URL_VAR) {
            builder = builder.auth_base_url(BaseUrl::new(url)?);
        }
        if let Ok(url) = std::env::var(API_URL_VAR) {
            builder = builder.api_base_url(BaseUrl::new(url)?);
        }

        builder.build()
    }

    /// Returns the OAuth client identifier.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the refresh token exchanged for access tokens.
    #[must_use]
    pub const fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// Returns the base URL of the OAuth token endpoint host.
    #[must_use]
    pub const fn auth_base_url(&self) -> &BaseUrl {
        &self.auth_base_url
    }

    /// Returns the base URL of the REST API host.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the safety margin subtracted from each token's lifetime.
    #[must_use]
    pub const fn token_expiry_margin(&self) -> Duration {
        self.token_expiry_margin
    }

    /// Returns the default relation lists.
    #[must_use]
    pub const fn relations(&self) -> &RelationDefaults {
        &self.relations
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify LightspeedConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LightspeedConfig>();
};

/// Builder for constructing [`LightspeedConfig`] instances.
///
/// `client_id`, `client_secret` and `refresh_token` are required.
///
/// # Defaults
///
/// - `auth_base_url`: `https://cloud.lightspeedapp.com`
/// - `api_base_url`: `https://api.lightspeedapp.com`
/// - `token_expiry_margin`: 30 seconds
/// - `relations`: [`RelationDefaults::default`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct LightspeedConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    refresh_token: Option<RefreshToken>,
    auth_base_url: Option<BaseUrl>,
    api_base_url: Option<BaseUrl>,
    token_expiry_margin: Option<Duration>,
    relations: Option<RelationDefaults>,
    user_agent_prefix: Option<String>,
}

impl LightspeedConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client identifier (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the refresh token (required).
    #[must_use]
    pub fn refresh_token(mut self, token: RefreshToken) -> Self {
        self.refresh_token = Some(token);
        self
    }

    /// Overrides the OAuth host.
    #[must_use]
    pub fn auth_base_url(mut self, url: BaseUrl) -> Self {
        self.auth_base_url = Some(url);
        self
    }

    /// Overrides the REST API host.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the margin subtracted from each token's lifetime.
    #[must_use]
    pub const fn token_expiry_margin(mut self, margin: Duration) -> Self {
        self.token_expiry_margin = Some(margin);
        self
    }

    /// Replaces the default relation lists.
    #[must_use]
    pub fn relations(mut self, relations: RelationDefaults) -> Self {
        self.relations = Some(relations);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`LightspeedConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a credential is not set,
    /// or [`ConfigError::InvalidBaseUrl`] if a default host fails validation.
    pub fn build(self) -> Result<LightspeedConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;
        let refresh_token = self
            .refresh_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "refresh_token",
            })?;

        let auth_base_url = match self.auth_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_AUTH_BASE_URL)?,
        };
        let api_base_url = match self.api_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_BASE_URL)?,
        };

        Ok(LightspeedConfig {
            client_id,
            client_secret,
            refresh_token,
            auth_base_url,
            api_base_url,
            token_expiry_margin: self
                .token_expiry_margin
                .unwrap_or_else(|| Duration::seconds(DEFAULT_TOKEN_EXPIRY_MARGIN_SECS)),
            relations: self.relations.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> LightspeedConfigBuilder {
        LightspeedConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .refresh_token(RefreshToken::new("refresh").unwrap())
    }

    #[test]
    fn test_builder_requires_client_id() {
        let result = LightspeedConfigBuilder::new()
            .client_secret(ClientSecret::new("secret").unwrap())
            .refresh_token(RefreshToken::new("refresh").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));
    }

    #[test]
    fn test_builder_requires_refresh_token() {
        let result = LightspeedConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "refresh_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = credentials().build().unwrap();

        assert_eq!(config.auth_base_url().as_ref(), DEFAULT_AUTH_BASE_URL);
        assert_eq!(config.api_base_url().as_ref(), DEFAULT_API_BASE_URL);
        assert_eq!(config.token_expiry_margin(), Duration::seconds(30));
        assert_eq!(config.relations(), &RelationDefaults::default());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let relations = RelationDefaults {
            items: vec!["Category".to_string()],
            ..RelationDefaults::default()
        };

        let config = credentials()
            .auth_base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .api_base_url(BaseUrl::new("http://localhost:9001").unwrap())
            .token_expiry_margin(Duration::seconds(5))
            .relations(relations.clone())
            .user_agent_prefix("Inventory/2.0")
            .build()
            .unwrap();

        assert_eq!(config.auth_base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.api_base_url().as_ref(), "http://localhost:9001");
        assert_eq!(config.token_expiry_margin(), Duration::seconds(5));
        assert_eq!(config.relations(), &relations);
        assert_eq!(config.user_agent_prefix(), Some("Inventory/2.0"));
    }

    #[test]
    fn test_config_debug_masks_credentials() {
        let config = credentials().build().unwrap();
        let debug_str = format!("{config:?}");

        assert!(debug_str.contains("LightspeedConfig"));
        assert!(debug_str.contains("ClientSecret(*****)"));
        assert!(debug_str.contains("RefreshToken(*****)"));
        assert!(!debug_str.contains("\"refresh\""));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LightspeedConfig>();
    }
}
