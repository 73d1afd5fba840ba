//! Refresh-token exchange against the Lightspeed OAuth endpoint.
//!
//! Lightspeed access tokens are short lived. The client keeps the refresh
//! token from the initial authorization and trades it for a new access token
//! whenever the cached one is missing or stale.
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_retail::auth::oauth::refresh_access_token;
//!
//! let token = refresh_access_token(&reqwest::Client::new(), &config).await?;
//! println!("Token valid until {}", token.expires_at());
//! ```

use chrono::Utc;
use serde::Serialize;

use crate::auth::oauth::OAuthError;
use crate::auth::{AccessToken, AccessTokenResponse};
use crate::config::LightspeedConfig;

/// Path of the token endpoint on the OAuth host.
pub const TOKEN_PATH: &str = "oauth/access_token.php";

/// Grant type for refresh token requests.
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Request body for token refresh.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    refresh_token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Returns the full URL of the token endpoint for `config`.
#[must_use]
pub fn token_url(config: &LightspeedConfig) -> String {
    format!("{}/{TOKEN_PATH}", config.auth_base_url())
}

/// Exchanges the configured refresh token for a new access token.
///
/// The returned token expires at `now + expires_in - margin`, where the
/// margin is [`LightspeedConfig::token_expiry_margin`].
///
/// # Errors
///
/// Returns [`OAuthError::TokenRefreshFailed`] if the request cannot be sent
/// (status `0`), the server answers with a non-2xx status, the body is not a
/// valid token response, or its `expires_in` puts the expiry out of range.
pub async fn refresh_access_token(
    http: &reqwest::Client,
    config: &LightspeedConfig,
) -> Result<AccessToken, OAuthError> {
    let url = token_url(config);

    let request_body = TokenRefreshRequest {
        refresh_token: config.refresh_token().as_ref(),
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
    };

    tracing::debug!(url = %url, "Requesting new Lightspeed access token");

    let response = http
        .post(&url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Token refresh request could not be sent");
            OAuthError::TokenRefreshFailed {
                status: 0,
                message: format!("Network error: {e}"),
            }
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::error!(status, body = %error_body, "Token refresh rejected");
        return Err(OAuthError::TokenRefreshFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse = response.json().await.map_err(|e| {
        tracing::error!(status, error = %e, "Token refresh returned an unparseable body");
        OAuthError::TokenRefreshFailed {
            status,
            message: format!("Failed to parse token response: {e}"),
        }
    })?;

    let token = AccessToken::from_response(&token_response, Utc::now(), config.token_expiry_margin())
        .ok_or_else(|| {
            tracing::error!(
                status,
                expires_in = token_response.expires_in,
                "Token refresh returned an out of range expires_in"
            );
            OAuthError::TokenRefreshFailed {
                status,
                message: format!("invalid expires_in: {}", token_response.expires_in),
            }
        })?;

    tracing::debug!(expires_at = %token.expires_at(), "Obtained Lightspeed access token");

    Ok(token)
}
