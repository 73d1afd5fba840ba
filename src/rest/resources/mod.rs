//! Version-specific resource payloads.
//!
//! Payloads are organized by API version:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports the current version)
//!   v3/
//!     mod.rs         <- Account, Category, Item, Sale, ...
//! ```
//!
//! The current version is re-exported at this module level:
//!
//! ```rust
//! use lightspeed_retail::rest::resources::Item;      // current version
//! use lightspeed_retail::rest::resources::v3::Item as V3Item;
//! ```
//!
//! # Payload shape
//!
//! Lightspeed sends every scalar as a string, so known fields are typed
//! `Option<String>`. Fields without a named counterpart are kept in each
//! payload's flattened `other` map and serialize back out unchanged.

pub mod v3;

pub use v3::*;
