//! Lightspeed Retail client implementation.
//!
//! This module provides the [`LightspeedClient`] type, which owns the access
//! token lifecycle and the account context and exposes the read operations.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::auth::oauth::refresh_access_token;
use crate::auth::AccessToken;
use crate::clients::retail::LightspeedError;
use crate::clients::{HttpClient, HttpRequest};
use crate::config::{ClientId, ClientSecret, LightspeedConfig, RefreshToken};
use crate::rest::resources::{Account, AccountId, Category, Item, Sale};
use crate::rest::{extract_list, extract_one, EnvelopeError, QueryOptions};

/// Query key binding `items_by_category` to a category.
const CATEGORY_ID_KEY: &str = "categoryID";

/// Client for the Lightspeed Retail (R-Series) V3 API.
///
/// The client exchanges the configured refresh token for access tokens on
/// demand and resolves the account identifier on first use. Both are cached
/// for the lifetime of the client.
///
/// # Token lifecycle
///
/// A token is requested when none is cached or the cached one has expired.
/// Expiry is `issued + expires_in - margin` (see
/// [`LightspeedConfig::token_expiry_margin`]). A failed exchange leaves the
/// previous token in place.
///
/// # Concurrency
///
/// `LightspeedClient` is `Send + Sync`. Cached state sits behind
/// `tokio::sync::RwLock`s that are never held across a request, so two
/// tasks hitting an expired token may both refresh it. The last one stored
/// wins.
///
/// # Example
///
/// ```rust,ignore
/// use lightspeed_retail::{LightspeedClient, LightspeedConfig, QueryOptions};
///
/// let client = LightspeedClient::new(LightspeedConfig::from_env()?)?;
///
/// let account = client.account().await?;
/// println!("Account {}", account.account_id);
///
/// let items = client.items(&QueryOptions::new().limit(2)).await?;
/// for item in &items {
///     println!("{:?}: {}", item.description, item.default_price());
/// }
/// ```
#[derive(Debug)]
pub struct LightspeedClient {
    config: LightspeedConfig,
    http_client: HttpClient,
    token: RwLock<Option<AccessToken>>,
    account_id: RwLock<Option<AccountId>>,
}

// Verify LightspeedClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LightspeedClient>();
};

impl LightspeedClient {
    /// Creates a client from a configuration.
    ///
    /// No request is sent until the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError::Http`] if the HTTP client cannot be created.
    pub fn new(config: LightspeedConfig) -> Result<Self, LightspeedError> {
        let http_client = HttpClient::new(&config)?;

        Ok(Self {
            config,
            http_client,
            token: RwLock::new(None),
            account_id: RwLock::new(None),
        })
    }

    /// Creates a client with default hosts from the three credentials.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError::Config`] if a credential is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lightspeed_retail::{ErrorKind, LightspeedClient};
    ///
    /// let client = LightspeedClient::from_credentials("id", "secret", "refresh").unwrap();
    /// assert_eq!(client.config().client_id().as_ref(), "id");
    ///
    /// let err = LightspeedClient::from_credentials("id", "", "refresh").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// ```
    pub fn from_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, LightspeedError> {
        let config = LightspeedConfig::builder()
            .client_id(ClientId::new(client_id)?)
            .client_secret(ClientSecret::new(client_secret)?)
            .refresh_token(RefreshToken::new(refresh_token)?)
            .build()?;

        Self::new(config)
    }

    /// Creates a client and resolves its account before returning it.
    ///
    /// Unlike [`new`](Self::new), this sends the token exchange and the
    /// `Account.json` request immediately, so bad credentials surface here
    /// rather than on the first read.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if the client cannot be created, the token
    /// exchange fails or the account cannot be fetched.
    pub async fn connect(config: LightspeedConfig) -> Result<Self, LightspeedError> {
        let client = Self::new(config)?;
        client.account().await?;
        Ok(client)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &LightspeedConfig {
        &self.config
    }

    /// Returns the cached account identifier without resolving it.
    pub async fn cached_account_id(&self) -> Option<AccountId> {
        self.account_id.read().await.clone()
    }

    /// Returns the cached access token without refreshing it.
    pub async fn cached_token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Exchanges the refresh token for a new access token and caches it.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError::Authentication`] if the exchange fails. The
    /// cached token is left unchanged in that case.
    pub async fn acquire_token(&self) -> Result<String, LightspeedError> {
        let token = refresh_access_token(self.http_client.inner(), &self.config).await?;
        let value = token.as_str().to_string();

        *self.token.write().await = Some(token);

        Ok(value)
    }

    /// Returns a valid access token, refreshing it if missing or expired.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError::Authentication`] if a refresh was needed and
    /// failed.
    pub async fn access_token(&self) -> Result<String, LightspeedError> {
        let cached = self
            .token
            .read()
            .await
            .as_ref()
            .filter(|token| !token.is_expired())
            .map(|token| token.as_str().to_string());

        if let Some(token) = cached {
            return Ok(token);
        }

        tracing::debug!("Access token missing or expired");
        self.acquire_token().await
    }

    /// Fetches the account the credentials belong to and caches its identifier.
    ///
    /// Always sends a request, even when the identifier is already cached.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if authentication, the request or decoding
    /// fails. Nothing is cached on failure.
    pub async fn account(&self) -> Result<Account, LightspeedError> {
        let token = self.access_token().await?;
        let body = self.get(&token, "Account.json".to_string(), BTreeMap::new()).await?;
        let account: Account = decoded(extract_one(&body, "Account"))?;

        tracing::debug!(account_id = %account.account_id, "Resolved Lightspeed account");
        *self.account_id.write().await = Some(account.account_id.clone());

        Ok(account)
    }

    /// Returns the account identifier, resolving it with [`account`](Self::account)
    /// on first use.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if the identifier is not cached and
    /// resolving it fails.
    pub async fn account_id(&self) -> Result<AccountId, LightspeedError> {
        if let Some(id) = self.cached_account_id().await {
            return Ok(id);
        }

        Ok(self.account().await?.account_id)
    }

    /// Lists the account's categories.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if any step fails.
    pub async fn categories(&self) -> Result<Vec<Category>, LightspeedError> {
        self.list("Category", BTreeMap::new()).await
    }

    /// Lists items. Embeds [`RelationDefaults::items`](crate::RelationDefaults::items)
    /// unless `options` sets `load_relations`.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if any step fails.
    pub async fn items(&self, options: &QueryOptions) -> Result<Vec<Item>, LightspeedError> {
        let query = options.to_query(&self.config.relations().items);
        self.list("Item", query).await
    }

    /// Fetches a single item.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if any step fails, including a 404 for an
    /// unknown item.
    pub async fn item(&self, item_id: &str) -> Result<Item, LightspeedError> {
        let account_id = self.account_id().await?;
        let token = self.access_token().await?;

        let path = format!(
            "Account/{account_id}/Item/{}.json",
            urlencoding::encode(item_id)
        );
        let body = self.get(&token, path, BTreeMap::new()).await?;

        decoded(extract_one(&body, "Item"))
    }

    /// Lists the items of one category. Embeds
    /// [`RelationDefaults::items_by_category`](crate::RelationDefaults::items_by_category)
    /// unless `options` sets `load_relations`.
    ///
    /// The `categoryID` filter always wins over a `categoryID` in `options.extra`.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if any step fails.
    pub async fn items_by_category(
        &self,
        category_id: &str,
        options: &QueryOptions,
    ) -> Result<Vec<Item>, LightspeedError> {
        let mut query = options.to_query(&self.config.relations().items_by_category);
        query.insert(CATEGORY_ID_KEY.to_string(), category_id.to_string());
        self.list("Item", query).await
    }

    /// Lists sales. Embeds [`RelationDefaults::sales`](crate::RelationDefaults::sales)
    /// unless `options` sets `load_relations`.
    ///
    /// # Errors
    ///
    /// Returns [`LightspeedError`] if any step fails.
    pub async fn sales(&self, options: &QueryOptions) -> Result<Vec<Sale>, LightspeedError> {
        let query = options.to_query(&self.config.relations().sales);
        self.list("Sale", query).await
    }

    /// Fetches `Account/{id}/{resource}.json` and decodes its list envelope.
    async fn list<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        query: BTreeMap<String, String>,
    ) -> Result<Vec<T>, LightspeedError> {
        let account_id = self.account_id().await?;
        let token = self.access_token().await?;

        let path = format!("Account/{account_id}/{resource}.json");
        let body = self.get(&token, path, query).await?;

        decoded(extract_list(&body, resource))
    }

    /// Sends an authenticated GET and returns the JSON body.
    async fn get(
        &self,
        token: &str,
        path: String,
        query: BTreeMap<String, String>,
    ) -> Result<serde_json::Value, LightspeedError> {
        let request = HttpRequest::builder(path)
            .query(query)
            .bearer_auth(token)
            .build();

        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }
}

/// Converts an envelope result, logging the failure.
fn decoded<T>(result: Result<T, EnvelopeError>) -> Result<T, LightspeedError> {
    result.map_err(|e| {
        tracing::error!(envelope = e.envelope, reason = %e.reason, "Malformed Lightspeed response");
        LightspeedError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::retail::ErrorKind;

    #[test]
    fn test_from_credentials_validates_each_credential() {
        let err = LightspeedClient::from_credentials("", "secret", "refresh").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = LightspeedClient::from_credentials("id", "secret", "  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_new_client_has_no_cached_state() {
        let client = LightspeedClient::from_credentials("id", "secret", "refresh").unwrap();

        assert!(client.cached_token().await.is_none());
        assert!(client.cached_account_id().await.is_none());
    }

    #[test]
    fn test_debug_does_not_leak_credentials() {
        let client = LightspeedClient::from_credentials("id", "top-secret", "refresh-me").unwrap();
        let debug = format!("{client:?}");

        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("refresh-me"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LightspeedClient>();
    }
}
