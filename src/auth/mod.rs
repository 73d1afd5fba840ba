//! Authentication types for the Lightspeed Retail client.
//!
//! # Overview
//!
//! - [`AccessToken`]: A cached bearer token with its expiry
//! - [`AccessTokenResponse`]: The token endpoint's response body
//! - [`oauth`]: The refresh-token exchange
//!
//! Lightspeed issues short-lived access tokens. The client holds a
//! long-lived refresh token and exchanges it for a new access token
//! whenever the cached one is missing or stale.
//!
//! ```rust,ignore
//! use lightspeed_retail::auth::oauth::refresh_access_token;
//!
//! let token = refresh_access_token(http.inner(), &config).await?;
//! println!("expires at {}", token.expires_at());
//! ```

pub mod oauth;
mod token;

pub use token::{AccessToken, AccessTokenResponse};
