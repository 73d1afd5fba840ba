//! Lightspeed Retail API client.
//!
//! - [`LightspeedClient`]: token lifecycle, account resolution and the read
//!   operations (`account`, `categories`, `items`, `item`,
//!   `items_by_category`, `sales`)
//! - [`LightspeedError`] and [`ErrorKind`]: what those operations return on failure
//!
//! # Request flow
//!
//! 1. Resolve the account identifier (cached after the first `Account.json`).
//! 2. Get a valid access token (refreshed when missing or expired).
//! 3. `GET /API/V3/Account/{id}/<Resource>.json` with `Authorization: Bearer`.
//! 4. Decode the `<Resource>` envelope.
//!
//! Any failure ends the operation with an `Err`. Nothing is retried.

mod client;
mod errors;

pub use client::LightspeedClient;
pub use errors::{ErrorKind, LightspeedError};
