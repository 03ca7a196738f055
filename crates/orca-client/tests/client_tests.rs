//! Integration tests for the HTTP client: authentication check, generic
//! fetch behavior, and error classification, against a wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orca_client::{OrcaClient, OrcaConfig, OrcaError};

/// Helper: create an `OrcaClient` pointing at a wiremock server.
fn client(server: &MockServer) -> OrcaClient {
    let config = OrcaConfig::new("test-token-123").with_base_url(server.uri());
    OrcaClient::with_http_client(config, reqwest::Client::new())
}

// ── verify_authentication ──────────────────────────────────────────────

#[tokio::test]
async fn test_verify_authentication_success() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/rbac/group"))
        .and(header("Authorization", "Bearer test-token-123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.verify_authentication().await.unwrap();
}

#[tokio::test]
async fn test_verify_authentication_accepts_any_2xx() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/rbac/group"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.verify_authentication().await.is_ok());
}

#[tokio::test]
async fn test_verify_authentication_rejected_401() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/rbac/group"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.verify_authentication().await.unwrap_err();

    assert!(err.is_authentication());
    match err {
        OrcaError::Authentication {
            endpoint,
            status,
            status_text,
        } => {
            assert!(endpoint.ends_with("/api/rbac/group"));
            assert_eq!(status, 401);
            assert_eq!(status_text, "Unauthorized");
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_verify_authentication_rejected_500() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/rbac/group"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.verify_authentication().await.unwrap_err();

    // Non-2xx on the verification endpoint is always classified as an
    // authentication failure, whatever the status.
    match err {
        OrcaError::Authentication { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

// ── generic fetch errors ───────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_error_carries_endpoint_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/organization/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .iterate_users(|_| async { Ok(()) })
        .await
        .unwrap_err();

    match err {
        OrcaError::Api { endpoint, status } => {
            assert_eq!(endpoint, "/organization/users");
            assert_eq!(status, 503);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/organization/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .iterate_users(|_| async { Ok(()) })
        .await
        .unwrap_err();

    match err {
        OrcaError::Parse { endpoint, .. } => assert_eq!(endpoint, "/organization/users"),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_shape_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/organization/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "name": "Acme", "users": "nope" }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .iterate_users(|_| async { Ok(()) })
        .await
        .unwrap_err();

    assert!(matches!(err, OrcaError::Parse { .. }));
}

#[tokio::test]
async fn test_request_timeout_is_transient_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/rbac/group"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = OrcaConfig::new("test-token-123")
        .with_base_url(server.uri())
        .with_request_timeout(Duration::from_millis(100));
    let client = OrcaClient::new(config).unwrap();

    let err = client.verify_authentication().await.unwrap_err();
    assert!(matches!(err, OrcaError::Http(_)));
    assert!(err.is_transient());
    assert!(!err.is_authentication());
}

// ── fetch_group_members ────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_group_members_maps_ids_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rbac/group/g1"))
        .and(header("Authorization", "Bearer test-token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "group": "Admins",
                "all_users": false,
                "users": [{"id": "u2"}, {"id": "u1"}, {"id": "u2"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let members = client.fetch_group_members("g1").await.unwrap();

    // Response order preserved, duplicates kept.
    assert_eq!(members, vec!["u2", "u1", "u2"]);
}

#[tokio::test]
async fn test_fetch_group_members_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rbac/group/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.fetch_group_members("missing").await.unwrap_err();

    match err {
        OrcaError::Api { endpoint, status } => {
            assert_eq!(endpoint, "/rbac/group/missing");
            assert_eq!(status, 404);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
