//! Shared wiremock fixtures for the integration tests.
//!
//! One `MockServer` stands in for both the OAuth host and the API host.

#![allow(dead_code)]

use lightspeed_retail::{BaseUrl, ClientId, ClientSecret, LightspeedClient, LightspeedConfig, RefreshToken};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const REFRESH_TOKEN: &str = "test-refresh-token";

pub const TOKEN_PATH: &str = "/oauth/access_token.php";
pub const ACCOUNT_PATH: &str = "/API/V3/Account.json";

/// Builds a configuration pointing both hosts at `server`.
pub fn config_for(server: &MockServer) -> LightspeedConfig {
    LightspeedConfig::builder()
        .client_id(ClientId::new(CLIENT_ID).unwrap())
        .client_secret(ClientSecret::new(CLIENT_SECRET).unwrap())
        .refresh_token(RefreshToken::new(REFRESH_TOKEN).unwrap())
        .auth_base_url(BaseUrl::new(server.uri()).unwrap())
        .api_base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Builds a client pointing both hosts at `server`.
pub fn client_for(server: &MockServer) -> LightspeedClient {
    LightspeedClient::new(config_for(server)).unwrap()
}

/// A successful token endpoint body.
pub fn token_body(token: &str, expires_in: i64) -> Value {
    json!({
        "access_token": token,
        "expires_in": expires_in,
        "token_type": "bearer",
        "scope": "employee:all systemuserid:1"
    })
}

/// Mounts the token endpoint, expected to be hit `times` times.
pub async fn mount_token(server: &MockServer, token: &str, expires_in: i64, times: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token, expires_in)))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts `Account.json` for `account_id`, expected to be hit `times` times.
pub async fn mount_account(server: &MockServer, token: &str, account_id: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(ACCOUNT_PATH))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@attributes": {"count": "1"},
            "Account": {"accountID": account_id, "name": "Shop"}
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// A page of items as the API sends it.
pub fn items_body() -> Value {
    json!({
        "@attributes": {"next": "", "previous": "", "count": "2"},
        "Item": [
            {
                "itemID": "12",
                "description": "Laser cutting hour",
                "categoryID": "116",
                "Prices": {"ItemPrice": [
                    {"amount": "25.00", "useTypeID": "1", "useType": "Default"},
                    {"amount": "30.00", "useTypeID": "2", "useType": "MSRP"}
                ]}
            },
            {
                "itemID": "13",
                "description": "Acrylic sheet",
                "categoryID": "116",
                "Prices": {"ItemPrice": {"amount": "4.00", "useTypeID": "2", "useType": "MSRP"}}
            }
        ]
    })
}
