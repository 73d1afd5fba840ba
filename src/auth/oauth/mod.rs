//! OAuth 2.0 refresh-token flow for Lightspeed Retail.
//!
//! Lightspeed apps authorize once through the browser and keep the resulting
//! refresh token. From then on, access tokens are obtained by posting that
//! refresh token with the app credentials to `oauth/access_token.php`:
//!
//! - [`refresh_access_token`]: Exchange the refresh token for an [`AccessToken`](crate::auth::AccessToken)
//! - [`OAuthError`]: The failure of that exchange
//!
//! The authorization code step happens outside this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_retail::LightspeedConfig;
//! use lightspeed_retail::auth::oauth::{refresh_access_token, OAuthError};
//!
//! let config = LightspeedConfig::from_env()?;
//!
//! match refresh_access_token(&reqwest::Client::new(), &config).await {
//!     Ok(token) => println!("valid until {}", token.expires_at()),
//!     Err(OAuthError::TokenRefreshFailed { status, message }) => {
//!         eprintln!("refresh failed ({status}): {message}");
//!     }
//! }
//! ```

mod error;
mod token_refresh;

pub use error::OAuthError;
pub use token_refresh::{refresh_access_token, token_url, TOKEN_PATH};
