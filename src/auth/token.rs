//! Access tokens issued by the Lightspeed OAuth endpoint.
//!
//! This module provides the [`AccessToken`] type cached by the client and the
//! [`AccessTokenResponse`] wire type returned by the token exchange.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// A bearer token together with the instant after which it is stale.
///
/// The `Debug` implementation masks the token string.
///
/// # Thread Safety
///
/// `AccessToken` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use lightspeed_retail::auth::AccessToken;
///
/// let token = AccessToken::new("abc", Utc::now() + Duration::hours(1));
///
/// assert_eq!(token.as_str(), "abc");
/// assert!(!token.is_expired());
/// assert_eq!(format!("{token:?}").contains("abc"), false);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token that goes stale after `expires_at`.
    #[must_use]
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Builds a token from an exchange response received at `now`.
    ///
    /// The expiry is `now + expires_in - margin`. Returns `None` when that
    /// instant is outside the range `chrono` can represent.
    #[must_use]
    pub fn from_response(
        response: &AccessTokenResponse,
        now: DateTime<Utc>,
        margin: Duration,
    ) -> Option<Self> {
        let expires_at = now
            .checked_add_signed(Duration::try_seconds(response.expires_in)?)?
            .checked_sub_signed(margin)?;

        Some(Self {
            token: response.access_token.clone(),
            expires_at,
        })
    }

    /// Returns the bearer token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Returns the instant after which the token is stale.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` if the token is stale at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Returns `true` if the token is stale right now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};

/// Body of a successful `oauth/access_token.php` response.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The new bearer token.
    pub access_token: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
    /// Token type, normally `"bearer"`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Space separated scopes granted to the token.
    #[serde(default)]
    pub scope: Option<String>,
    /// A rotated refresh token, when the server issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
}
