//! HTTP response types for the Lightspeed Retail client.
//!
//! This module provides the [`HttpResponse`] type and the parsed
//! [`ApiBucketLevel`] rate-limit header.

use std::collections::HashMap;

/// Leaky-bucket level parsed from the `X-LS-API-Bucket-Level` header.
///
/// The header format is "X/Y" where X is the current fill and Y is the
/// bucket size. Both may be fractional because the bucket drips continuously.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::clients::ApiBucketLevel;
///
/// let level = ApiBucketLevel::parse("12.5/60").unwrap();
/// assert!((level.used - 12.5).abs() < f64::EPSILON);
/// assert!((level.size - 60.0).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApiBucketLevel {
    /// The current fill level of the bucket.
    pub used: f64,
    /// The bucket size.
    pub size: f64,
}

impl ApiBucketLevel {
    /// Parses the bucket level header value.
    ///
    /// Returns `None` if the value is not in "X/Y" format.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, size) = header_value.split_once('/')?;
        let used = used.trim().parse().ok()?;
        let size = size.trim().parse().ok()?;

        Some(Self { used, size })
    }

    /// Returns the remaining capacity of the bucket.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.size - self.used).max(0.0)
    }
}

/// An HTTP response from the Lightspeed API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information (from the `X-LS-API-Bucket-Level` header).
    pub bucket_level: Option<ApiBucketLevel>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the bucket level header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let bucket_level = headers
            .get("x-ls-api-bucket-level")
            .and_then(|values| values.first())
            .and_then(|value| ApiBucketLevel::parse(value));

        Self {
            code,
            headers,
            body,
            bucket_level,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
