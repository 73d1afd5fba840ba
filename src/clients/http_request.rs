//! HTTP request types for the Lightspeed Retail client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing read requests to the Lightspeed API.

use std::collections::{BTreeMap, HashMap};

/// A GET request to be sent to the Lightspeed API.
///
/// Query parameters are kept in a `BTreeMap`, so the encoded query string
/// always lists keys in sorted order.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::clients::HttpRequest;
///
/// let request = HttpRequest::builder("Account/1/Item.json")
///     .query_param("limit", "2")
///     .query_param("load_relations", r#"["Category"]"#)
///     .build();
///
/// assert_eq!(
///     request.path_and_query(),
///     "Account/1/Item.json?limit=2&load_relations=%5B%22Category%22%5D"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The path (relative to base path) for this request.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<BTreeMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Returns the percent-encoded query string, without the leading `?`.
    ///
    /// Returns an empty string when there are no query parameters.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query.as_ref().map_or_else(String::new, |query| {
            query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&")
        })
    }

    /// Returns the path followed by `?` and the query string, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{query}", self.path)
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Option<BTreeMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            extra_headers: None,
        }
    }

    /// Sets all query parameters at once.
    ///
    /// An empty map leaves the request without a query string.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Adds a single query parameter, replacing any previous value for the key.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds an `Authorization: Bearer {token}` header.
    #[must_use]
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            path: self.path,
            query: self.query,
            extra_headers: self.extra_headers,
        }
    }
}
