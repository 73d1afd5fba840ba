//! Integration tests for the access token lifecycle.
//!
//! These tests verify when the client exchanges its refresh token, what it
//! sends, and what it keeps when an exchange fails.

mod common;

use common::{client_for, config_for, mount_account, mount_token, token_body, ACCOUNT_PATH, TOKEN_PATH};
use lightspeed_retail::{ErrorKind, LightspeedClient, LightspeedError, OAuthError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_is_requested_lazily() {
    let server = MockServer::start().await;
    mount_token(&server, "abc", 3600, 0).await;

    let client = client_for(&server);

    assert!(client.cached_token().await.is_none());
}

#[tokio::test]
async fn test_token_exchange_sends_refresh_grant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "refresh_token": common::REFRESH_TOKEN,
            "client_id": common::CLIENT_ID,
            "client_secret": common::CLIENT_SECRET,
            "grant_type": "refresh_token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("abc", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.access_token().await.unwrap();

    assert_eq!(token, "abc");
    assert_eq!(client.cached_token().await.unwrap().as_str(), "abc");
}

#[tokio::test]
async fn test_valid_token_is_reused() {
    let server = MockServer::start().await;
    mount_token(&server, "abc", 3600, 1).await;
    mount_account(&server, "abc", "99", 2).await;

    let client = client_for(&server);

    client.account().await.unwrap();
    client.account().await.unwrap();
}

#[tokio::test]
async fn test_expired_token_is_refreshed() {
    let server = MockServer::start().await;
    // Ten seconds is inside the default 30 second margin, so the token is
    // stale as soon as it is stored.
    mount_token(&server, "abc", 10, 2).await;
    mount_account(&server, "abc", "99", 2).await;

    let client = client_for(&server);

    client.account().await.unwrap();
    client.account().await.unwrap();
}

#[tokio::test]
async fn test_expiry_accounts_for_margin() {
    let server = MockServer::start().await;
    mount_token(&server, "abc", 3600, 1).await;

    let client = client_for(&server);
    let before = chrono::Utc::now();
    client.access_token().await.unwrap();
    let after = chrono::Utc::now();

    let expires_at = client.cached_token().await.unwrap().expires_at();
    assert!(expires_at >= before + chrono::Duration::seconds(3570));
    assert!(expires_at <= after + chrono::Duration::seconds(3570));
}

#[tokio::test]
async fn test_acquire_token_always_exchanges() {
    let server = MockServer::start().await;
    mount_token(&server, "abc", 3600, 2).await;

    let client = client_for(&server);

    assert_eq!(client.acquire_token().await.unwrap(), "abc");
    assert_eq!(client.acquire_token().await.unwrap(), "abc");
}

#[tokio::test]
async fn test_rejected_exchange_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid refresh token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ACCOUNT_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.account().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status(), Some(400));
    match err {
        LightspeedError::Authentication(OAuthError::TokenRefreshFailed { message, .. }) => {
            assert!(message.contains("invalid_grant"));
        }
        other => panic!("Expected TokenRefreshFailed, got {other:?}"),
    }
    assert!(client.cached_token().await.is_none());
    assert!(client.cached_account_id().await.is_none());
}

#[tokio::test]
async fn test_unparseable_token_body_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.access_token().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(err.to_string().contains("Failed to parse token response"));
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("first", 10)))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_eq!(client.access_token().await.unwrap(), "first");

    let err = client.access_token().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status(), Some(503));

    assert_eq!(client.cached_token().await.unwrap().as_str(), "first");
}

#[tokio::test]
async fn test_rotated_token_is_sent_on_next_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("first", 10)))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("second", 3600)))
        .mount(&server)
        .await;

    mount_account(&server, "first", "99", 1).await;
    mount_account(&server, "second", "99", 1).await;

    let client = client_for(&server);

    client.account().await.unwrap();
    client.account().await.unwrap();

    assert_eq!(client.cached_token().await.unwrap().as_str(), "second");
}

#[tokio::test]
async fn test_out_of_range_expires_in_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc",
            "expires_in": i64::MAX
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ACCOUNT_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.account().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status(), Some(200));
    assert!(err.to_string().contains("invalid expires_in"));
    assert!(client.cached_token().await.is_none());
}

#[tokio::test]
async fn test_connect_resolves_account_up_front() {
    let server = MockServer::start().await;
    mount_token(&server, "abc", 3600, 1).await;
    mount_account(&server, "abc", "99", 1).await;

    let client = LightspeedClient::connect(config_for(&server)).await.unwrap();

    assert_eq!(client.cached_token().await.unwrap().as_str(), "abc");
    assert_eq!(client.cached_account_id().await.unwrap().as_ref(), "99");
    // Served from the cache, so Account.json is hit only once.
    assert_eq!(client.account_id().await.unwrap().as_ref(), "99");
}

#[tokio::test]
async fn test_connect_surfaces_rejected_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ACCOUNT_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = LightspeedClient::connect(config_for(&server))
        .await
        .err()
        .unwrap();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status(), Some(401));
}
