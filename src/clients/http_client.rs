//! HTTP client for Lightspeed API communication.
//!
//! This module provides the [`HttpClient`] type for sending requests to the
//! Lightspeed Retail V3 API. Each request is sent exactly once.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::LightspeedConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path prefix of the V3 REST API.
pub const API_BASE_PATH: &str = "/API/V3";

const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for making requests to the Lightspeed API.
///
/// The client handles:
/// - URL construction from the configured API host and [`API_BASE_PATH`]
/// - Default headers (`User-Agent`, `Accept`)
/// - JSON body parsing and status classification
/// - Bucket level header parsing
///
/// The `Authorization` header is not a default header. The access token
/// rotates, so callers attach it per request with
/// [`HttpRequestBuilder::bearer_auth`](crate::clients::HttpRequestBuilder::bearer_auth).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lightspeed_retail::clients::{HttpClient, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder("Account.json")
///     .bearer_auth(&token)
///     .build();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.lightspeedapp.com`).
    base_uri: String,
    /// Base path (e.g., "/API/V3").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured API host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lightspeed_retail::{LightspeedConfig, ClientId, ClientSecret, RefreshToken};
    /// use lightspeed_retail::clients::HttpClient;
    ///
    /// let config = LightspeedConfig::builder()
    ///     .client_id(ClientId::new("id").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .refresh_token(RefreshToken::new("refresh").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_uri(), "https://api.lightspeedapp.com");
    /// assert_eq!(client.base_path(), "/API/V3");
    /// ```
    pub fn new(config: &LightspeedConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Lightspeed Retail Rust Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent.clone());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_uri: config.api_base_url().to_string(),
            base_path: API_BASE_PATH.to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the underlying reqwest client.
    ///
    /// The token exchange shares it so both hosts see the same user agent
    /// and connection pool.
    #[must_use]
    pub const fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Returns the full URL a request will be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            request.path_and_query()
        )
    }

    /// Sends a GET request to the Lightspeed API.
    ///
    /// This method handles:
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not JSON (`InvalidBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.get(&url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(method = "GET", path = %request.path, "Sending Lightspeed API request");

        let res = req_builder.send().await.map_err(|e| {
            tracing::error!(path = %request.path, error = %e, "Lightspeed API request failed");
            HttpError::Network(e)
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                Err(e) if (200..=299).contains(&code) => {
                    tracing::error!(path = %request.path, code, error = %e, "Lightspeed API returned a non-JSON body");
                    return Err(HttpError::InvalidBody {
                        code,
                        message: e.to_string(),
                    });
                }
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(level) = response.bucket_level {
            tracing::debug!(
                used = level.used,
                size = level.size,
                "Lightspeed API bucket level"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        let message = Self::error_message(&response);
        tracing::error!(path = %request.path, code, message = %message, "Lightspeed API returned an error status");

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Extracts a human-readable message from an error response body.
    ///
    /// Prefers the upstream `message` field, then `error`, then the raw body.
    fn error_message(response: &HttpResponse) -> String {
        for key in ["message", "error"] {
            if let Some(message) = response.body.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }

        let raw = response
            .body
            .get("raw_body")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| response.body.to_string(), String::from);

        if raw.chars().count() > MAX_ERROR_BODY_CHARS {
            let truncated: String = raw.chars().take(MAX_ERROR_BODY_CHARS).collect();
            format!("{truncated}...")
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId, ClientSecret, RefreshToken};
    use crate::clients::HttpRequest;
    use serde_json::json;

    fn create_test_config() -> LightspeedConfig {
        LightspeedConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .refresh_token(RefreshToken::new("refresh").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_api_host() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://api.lightspeedapp.com");
        assert_eq!(client.base_path(), "/API/V3");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert_eq!(
            user_agent,
            &format!("Lightspeed Retail Rust Client v{SDK_VERSION}")
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = LightspeedConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .refresh_token(RefreshToken::new("refresh").unwrap())
            .user_agent_prefix("Inventory/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Inventory/1.0 | "));
        assert!(user_agent.contains("Lightspeed Retail Rust Client"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_url_for_joins_host_path_and_query() {
        let config = LightspeedConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .refresh_token(RefreshToken::new("refresh").unwrap())
            .api_base_url(BaseUrl::new("http://localhost:8080/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let request = HttpRequest::builder("Account/7/Item.json")
            .query_param("limit", "5")
            .build();

        assert_eq!(
            client.url_for(&request),
            "http://localhost:8080/API/V3/Account/7/Item.json?limit=5"
        );
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        let response = HttpResponse::new(
            404,
            HashMap::new(),
            json!({"httpCode": "404", "message": "Item not found", "error": "other"}),
        );
        assert_eq!(HttpClient::error_message(&response), "Item not found");

        let response = HttpResponse::new(400, HashMap::new(), json!({"error": "invalid_grant"}));
        assert_eq!(HttpClient::error_message(&response), "invalid_grant");
    }

    #[test]
    fn test_error_message_truncates_raw_body() {
        let raw = "x".repeat(500);
        let response = HttpResponse::new(502, HashMap::new(), json!({ "raw_body": raw }));

        let message = HttpClient::error_message(&response);
        assert_eq!(message.len(), MAX_ERROR_BODY_CHARS + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
