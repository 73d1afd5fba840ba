//! HTTP client types for Lightspeed Retail API communication.
//!
//! This module provides the transport layer for the Lightspeed Retail V3
//! API and the higher-level [`retail::LightspeedClient`] built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`ApiBucketLevel`]: The parsed `X-LS-API-Bucket-Level` header
//! - [`retail::LightspeedClient`]: Token lifecycle, account resolution and reads
//! - [`retail::LightspeedError`]: Errors returned by the retail client
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_retail::clients::{HttpClient, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder("Account.json")
//!     .bearer_auth(&access_token)
//!     .build();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every request is sent once, and a non-2xx status is
//! returned to the caller as [`HttpError::Response`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod retail;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, API_BASE_PATH, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiBucketLevel, HttpResponse};

pub use retail::{ErrorKind, LightspeedClient, LightspeedError};
