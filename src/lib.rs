//! # Lightspeed Retail API Rust Client
//!
//! A Rust client for the Lightspeed Retail (R-Series) REST API V3, with
//! type-safe configuration, refresh-token authentication and typed payloads.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`LightspeedConfig`] and [`LightspeedConfigBuilder`]
//! - Validated newtypes for credentials and hosts
//! - Access tokens obtained from the refresh token on demand, cached until expiry
//! - Lazy resolution of the account identifier
//! - Read operations for accounts, categories, items and sales
//! - [`QueryOptions`] with per-operation default relations that a caller's
//!   list replaces
//! - Helpers for an item's default price and total quantity on hand
//!
//! ## Quick Start
//!
//! ```rust
//! use lightspeed_retail::{LightspeedConfig, ClientId, ClientSecret, RefreshToken};
//!
//! let config = LightspeedConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .refresh_token(RefreshToken::new("your-refresh-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Reading Data
//!
//! ```rust,ignore
//! use lightspeed_retail::{LightspeedClient, LightspeedConfig, QueryOptions};
//!
//! let client = LightspeedClient::new(LightspeedConfig::from_env()?)?;
//!
//! // The first call exchanges the refresh token and resolves the account
//! let categories = client.categories().await?;
//!
//! // Default relations: ["Category", "ItemAttributes"]
//! let items = client.items(&QueryOptions::new()).await?;
//!
//! // Caller relations replace the default
//! let items = client
//!     .items(&QueryOptions::new().limit(2).load_relations(["ItemShops"]))
//!     .await?;
//!
//! for item in &items {
//!     println!("{:?} {} ({} on hand)", item.description, item.default_price(), item.total_quantity());
//! }
//!
//! let fab_lab = client.items_by_category("116", &QueryOptions::new()).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, LightspeedError>`. Use
//! [`LightspeedError::kind`] to branch on [`ErrorKind`], or `.ok()` to treat
//! all failures alike.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Token values are never logged.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and cached state are per client
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One attempt per call**: No hidden retries

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AccessTokenResponse};
pub use config::{
    BaseUrl, ClientId, ClientSecret, LightspeedConfig, LightspeedConfigBuilder, RefreshToken,
    RelationDefaults,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiBucketLevel, ErrorKind, HttpClient, HttpError, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, LightspeedClient, LightspeedError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{refresh_access_token, OAuthError};

// Re-export REST types
pub use rest::resources::{
    default_price, total_quantity, Account, AccountId, Category, Item, ItemPrice, ItemShop, Sale,
    SaleLine, ALL_SHOPS_ID, NOT_AVAILABLE,
};
pub use rest::{Archived, QueryOptions};
