//! Integration tests for `TwitterClient` using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialview_core::{ApiConfig, FetchOutcome, UpstreamFailure};
use socialview_fetch::HttpAdapter;
use socialview_twitter::{TwitterClient, DEFAULT_TWEET_COUNT};

fn test_client(server: &MockServer) -> TwitterClient {
    let http = HttpAdapter::new(5, "socialview-test/0.1").expect("failed to build test adapter");
    let api = ApiConfig::for_host("tw.example.com", "test-key").with_base_url(&server.uri());
    TwitterClient::new(http, api)
}

fn user_body() -> serde_json::Value {
    json!({
        "result": {
            "data": {
                "user": {
                    "result": {
                        "__typename": "User",
                        "rest_id": "11348282",
                        "legacy": {
                            "screen_name": "NASA",
                            "name": "NASA",
                            "description": "Explore the universe",
                            "followers_count": 88000000,
                            "friends_count": 180,
                            "statuses_count": 70000,
                            "profile_image_url_https": "https://pbs.example.com/nasa_normal.jpg"
                        }
                    }
                }
            }
        }
    })
}

fn timeline_body() -> serde_json::Value {
    let entry = |id: &str, text: &str| {
        json!({
            "entryId": format!("tweet-{id}"),
            "content": {
                "itemContent": {
                    "tweet_results": {
                        "result": { "rest_id": id, "legacy": { "full_text": text, "favorite_count": 1 } }
                    }
                }
            }
        })
    };
    json!({
        "result": {
            "timeline": {
                "instructions": [
                    { "type": "TimelinePinEntry", "entry": entry("1", "pinned") },
                    { "type": "TimelineAddEntries", "entries": [entry("2", "latest"), entry("3", "older")] }
                ]
            }
        }
    })
}

async fn mount_user(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(query_param("username", "nasa"))
        .and(header("x-rapidapi-host", "tw.example.com"))
        .and(header("x-rapidapi-key", "test-key"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// resolve_twitter_user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_twitter_user_returns_profile() {
    let server = MockServer::start().await;
    mount_user(&server, 200, user_body()).await;

    let profile = test_client(&server)
        .resolve_twitter_user("nasa")
        .await
        .expect("should resolve user");

    assert_eq!(profile.display_name, "NASA");
    assert_eq!(profile.platform_id.as_deref(), Some("11348282"));
    assert_eq!(
        profile.profile_image_url.as_deref(),
        Some("https://pbs.example.com/nasa.jpg")
    );
}

#[tokio::test]
async fn resolve_twitter_user_non_2xx_is_absent() {
    let server = MockServer::start().await;
    mount_user(&server, 403, json!({"message": "forbidden"})).await;

    assert!(test_client(&server).resolve_twitter_user("nasa").await.is_none());
}

#[tokio::test]
async fn resolve_twitter_user_missing_path_is_absent() {
    let server = MockServer::start().await;
    mount_user(&server, 200, json!({"result": {"data": {"user": {}}}})).await;

    assert!(test_client(&server).resolve_twitter_user("nasa").await.is_none());
}

// ---------------------------------------------------------------------------
// fetch_tweets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_tweets_sends_user_and_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user-tweets"))
        .and(query_param("user", "11348282"))
        .and(query_param("count", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body()))
        .expect(1)
        .mount(&server)
        .await;

    let raw = test_client(&server).fetch_tweets("11348282", 5).await;

    assert!(raw.is_some());
}

#[tokio::test]
async fn fetch_tweets_failure_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user-tweets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(test_client(&server).fetch_tweets("1", 20).await.is_none());
}

// ---------------------------------------------------------------------------
// fetch_twitter
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_twitter_returns_profile_and_tagged_tweets() {
    let server = MockServer::start().await;
    mount_user(&server, 200, user_body()).await;
    Mock::given(method("GET"))
        .and(path("/user-tweets"))
        .and(query_param("user", "11348282"))
        .and(query_param("count", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body()))
        .mount(&server)
        .await;

    let outcome = test_client(&server)
        .fetch_twitter("nasa", DEFAULT_TWEET_COUNT)
        .await;

    let fetch = outcome.success().expect("expected Success");
    assert_eq!(fetch.profile.username, "NASA");
    let tweets = fetch.tweets.expect("tweets should be present");
    let summary: Vec<(&str, bool)> = tweets
        .iter()
        .map(|t| (t.text.as_str(), t.is_pinned))
        .collect();
    assert_eq!(
        summary,
        vec![("pinned", true), ("latest", false), ("older", false)]
    );
}

#[tokio::test]
async fn fetch_twitter_degrades_when_timeline_fails() {
    let server = MockServer::start().await;
    mount_user(&server, 200, user_body()).await;
    Mock::given(method("GET"))
        .and(path("/user-tweets"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let outcome = test_client(&server).fetch_twitter("nasa", 20).await;

    let fetch = outcome.success().expect("timeline failure must not be a total failure");
    assert!(fetch.tweets.is_none());
    assert!(fetch.is_degraded());
}

#[tokio::test]
async fn fetch_twitter_user_failure_is_upstream_error() {
    let server = MockServer::start().await;
    mount_user(&server, 500, json!({})).await;
    Mock::given(method("GET"))
        .and(path("/user-tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body()))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = test_client(&server).fetch_twitter("nasa", 20).await;

    assert_eq!(outcome, FetchOutcome::UpstreamError(UpstreamFailure::Status(500)));
}

#[tokio::test]
async fn fetch_twitter_unavailable_user_is_not_found() {
    let server = MockServer::start().await;
    mount_user(
        &server,
        200,
        json!({"result": {"data": {"user": {"result": {"__typename": "UserUnavailable"}}}}}),
    )
    .await;

    let outcome = test_client(&server).fetch_twitter("nasa", 20).await;

    assert_eq!(outcome, FetchOutcome::NotFound);
}
