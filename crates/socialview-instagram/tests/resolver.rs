//! Integration tests for `InstagramClient::resolve_instagram`.
//!
//! Each test stands up a wiremock server for the four upstream endpoints.
//! Endpoints that must never be hit are mounted with `.expect(0)`, which
//! wiremock verifies when the server is dropped.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialview_core::{ApiConfig, FetchOutcome, UpstreamFailure};
use socialview_fetch::HttpAdapter;
use socialview_instagram::InstagramClient;

fn test_client(server: &MockServer) -> InstagramClient {
    let http = HttpAdapter::new(5, "socialview-test/0.1").expect("failed to build test adapter");
    let api = ApiConfig::for_host("ig.example.com", "test-key").with_base_url(&server.uri());
    InstagramClient::new(http, api)
}

async fn mount_json(server: &MockServer, endpoint: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_never_called(server: &MockServer, endpoint: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(server)
        .await;
}

fn public_profile() -> serde_json::Value {
    json!({
        "data": {
            "username": "nasa",
            "full_name": "NASA",
            "is_private": false,
            "media_count": 10,
            "follower_count": 100,
            "following_count": 5
        }
    })
}

// ---------------------------------------------------------------------------
// Private accounts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn private_account_uses_extended_profile_and_skips_posts_and_following() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 200, json!({"data": {"is_private": true}})).await;
    mount_json(
        &server,
        "/v1.2/info",
        200,
        json!({"data": {"full_name": "A", "is_private": true}}),
    )
    .await;
    mount_never_called(&server, "/v1.2/posts").await;
    mount_never_called(&server, "/v1/following").await;

    let outcome = test_client(&server).resolve_instagram("private_user").await;

    let FetchOutcome::Success(fetch) = outcome else {
        panic!("expected Success, got: {outcome:?}");
    };
    assert_eq!(fetch.profile.display_name, "A");
    assert!(fetch.profile.is_private);
    assert!(fetch.posts.is_none());
    assert!(fetch.followers.is_none());
    assert!(!fetch.is_degraded());
}

#[tokio::test]
async fn missing_private_flag_is_treated_as_private() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 200, json!({"data": {"full_name": "Unknown"}})).await;
    mount_json(&server, "/v1.2/info", 200, json!({"data": {"full_name": "Unknown+"}})).await;
    mount_never_called(&server, "/v1.2/posts").await;
    mount_never_called(&server, "/v1/following").await;

    let outcome = test_client(&server).resolve_instagram("mystery").await;

    let fetch = outcome.success().expect("expected Success");
    assert_eq!(fetch.profile.display_name, "Unknown+");
    assert!(fetch.posts.is_none());
    assert!(fetch.followers.is_none());
}

#[tokio::test]
async fn failed_extended_profile_keeps_primary_profile() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v1/info",
        200,
        json!({"data": {"full_name": "Primary", "is_private": true}}),
    )
    .await;
    mount_json(&server, "/v1.2/info", 500, json!({"error": "boom"})).await;
    mount_never_called(&server, "/v1.2/posts").await;
    mount_never_called(&server, "/v1/following").await;

    let outcome = test_client(&server).resolve_instagram("private_user").await;

    let fetch = outcome.success().expect("expected Success");
    assert_eq!(fetch.profile.display_name, "Primary");
    assert!(fetch.posts.is_none());
}

// ---------------------------------------------------------------------------
// Public accounts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn public_account_fetches_posts_and_following() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/info"))
        .and(query_param("username_or_id_or_url", "nasa"))
        .and(header("x-rapidapi-host", "ig.example.com"))
        .and(header("x-rapidapi-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(public_profile()))
        .expect(1)
        .mount(&server)
        .await;
    mount_never_called(&server, "/v1.2/info").await;
    mount_json(
        &server,
        "/v1.2/posts",
        200,
        json!({"data": {"items": [{"id": "p1"}, {"id": "p2"}]}}),
    )
    .await;
    mount_json(
        &server,
        "/v1/following",
        200,
        json!({"data": {"items": [{"full_name": "Ada", "username": "ada", "is_private": false}]}}),
    )
    .await;

    let outcome = test_client(&server).resolve_instagram("nasa").await;

    let fetch = outcome.success().expect("expected Success");
    assert_eq!(fetch.profile.display_name, "NASA");
    assert!(!fetch.profile.is_private);
    let posts = fetch.posts.as_ref().expect("posts should be present");
    assert_eq!(posts["items"].as_array().map(Vec::len), Some(2));
    let followers = fetch.followers.as_ref().expect("followers should be present");
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].username.as_deref(), Some("ada"));
    assert!(!fetch.is_degraded());
}

#[tokio::test]
async fn posts_failure_degrades_only_posts() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 200, public_profile()).await;
    mount_json(&server, "/v1.2/posts", 500, json!({"message": "internal"})).await;
    mount_json(
        &server,
        "/v1/following",
        200,
        json!({"data": {"items": [{"username": "ada"}]}}),
    )
    .await;

    let outcome = test_client(&server).resolve_instagram("nasa").await;

    let fetch = outcome.success().expect("posts failure must not be a total failure");
    assert_eq!(fetch.profile.display_name, "NASA");
    assert!(fetch.posts.is_none());
    assert_eq!(fetch.followers.as_ref().map(Vec::len), Some(1));
    assert!(fetch.is_degraded());
}

#[tokio::test]
async fn following_failure_degrades_only_followers() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 200, public_profile()).await;
    mount_json(&server, "/v1.2/posts", 200, json!({"data": {"items": []}})).await;
    mount_json(&server, "/v1/following", 429, json!({"message": "slow down"})).await;

    let outcome = test_client(&server).resolve_instagram("nasa").await;

    let fetch = outcome.success().expect("expected Success");
    assert!(fetch.posts.is_some());
    assert!(fetch.followers.is_none());
    assert!(fetch.is_degraded());
}

// ---------------------------------------------------------------------------
// Total failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn primary_non_2xx_is_upstream_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 404, json!({"message": "not found"})).await;
    mount_never_called(&server, "/v1.2/info").await;
    mount_never_called(&server, "/v1.2/posts").await;
    mount_never_called(&server, "/v1/following").await;

    let outcome = test_client(&server).resolve_instagram("ghost").await;

    assert_eq!(outcome, FetchOutcome::UpstreamError(UpstreamFailure::Status(404)));
}

#[tokio::test]
async fn primary_empty_body_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let outcome = test_client(&server).resolve_instagram("ghost").await;

    assert!(
        matches!(outcome, FetchOutcome::UpstreamError(UpstreamFailure::InvalidBody(_))),
        "expected InvalidBody, got: {outcome:?}"
    );
}

#[tokio::test]
async fn primary_empty_data_is_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 200, json!({"data": {}})).await;
    mount_never_called(&server, "/v1.2/info").await;
    mount_never_called(&server, "/v1.2/posts").await;

    let outcome = test_client(&server).resolve_instagram("ghost").await;

    assert_eq!(outcome, FetchOutcome::NotFound);
}

#[tokio::test]
async fn primary_without_data_key_is_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/info", 200, json!({"status": "ok"})).await;

    let outcome = test_client(&server).resolve_instagram("ghost").await;

    assert_eq!(outcome, FetchOutcome::NotFound);
}
