//! REST resource infrastructure for the Lightspeed Retail V3 API.
//!
//! This module provides:
//!
//! - **[`QueryOptions`]**: filters, paging and relation loading for list operations
//! - **Envelope extraction**: [`extract_one`] and [`extract_list`] pull the
//!   payload out of `{"<Resource>": ...}` bodies
//! - **[`one_or_many`]**: a serde helper for lists the upstream collapses to
//!   a single object
//! - **[`EnvelopeError`]**: the error for a body with the wrong shape
//! - **[`resources`]**: payload types per API version (`Account`, `Item`, ...)
//!
//! # Example
//!
//! ```rust
//! use lightspeed_retail::rest::{extract_list, resources::Category};
//! use serde_json::json;
//!
//! let body = json!({
//!     "@attributes": {"count": "1"},
//!     "Category": {"categoryID": "3", "name": "Shirts"}
//! });
//!
//! let categories: Vec<Category> = extract_list(&body, "Category").unwrap();
//! assert_eq!(categories[0].name.as_deref(), Some("Shirts"));
//! ```

mod envelope;
mod errors;
mod query;
pub mod resources;

pub use envelope::{extract_list, extract_one, is_empty_list, one_or_many, ATTRIBUTES_KEY};
pub use errors::EnvelopeError;
pub use query::{Archived, QueryOptions, LOAD_RELATIONS_KEY};
