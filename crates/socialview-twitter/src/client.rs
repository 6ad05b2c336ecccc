//! HTTP client and lookup pipeline for the RapidAPI-hosted Twitter API.
//!
//! User lookups descend `result.data.user.result`; timeline lookups return
//! the raw body for [`crate::normalize::collect_timeline`].

use serde_json::Value;
use socialview_core::{ApiConfig, FetchOutcome, Profile, TwitterFetch, UpstreamFailure};
use socialview_fetch::{json, rapidapi_headers, FetchError, HttpAdapter};

use crate::normalize::{collect_timeline, normalize_user};

pub const USER_PATH: &str = "/user";
pub const USER_TWEETS_PATH: &str = "/user-tweets";

/// Page size requested from `/user-tweets` when the caller does not choose one.
pub const DEFAULT_TWEET_COUNT: u32 = 20;

const USER_RESULT_PATH: [&str; 4] = ["result", "data", "user", "result"];

#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: HttpAdapter,
    api: ApiConfig,
}

impl TwitterClient {
    #[must_use]
    pub fn new(http: HttpAdapter, api: ApiConfig) -> Self {
        Self { http, api }
    }

    /// Looks up a user by handle.
    ///
    /// Any failure (transport, non-2xx, missing user path) is logged as a
    /// warning and yields `None`.
    pub async fn resolve_twitter_user(&self, username: &str) -> Option<Profile> {
        match self.lookup_user(username).await {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                tracing::warn!(username, "twitter user not found");
                None
            }
            Err(e) => {
                tracing::warn!(username, error = %e, "failed to fetch twitter user");
                None
            }
        }
    }

    /// Fetches one page of a user's timeline.
    ///
    /// `count` is passed upstream as the page size and not enforced locally.
    /// Failures are logged as warnings and yield `None`.
    pub async fn fetch_tweets(&self, user_id: &str, count: u32) -> Option<Value> {
        let url = format!("{}{USER_TWEETS_PATH}", self.api.base_url);
        let count = count.to_string();
        match self
            .http
            .get_json(
                &url,
                &rapidapi_headers(&self.api),
                &[("user", user_id), ("count", &count)],
            )
            .await
        {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "failed to fetch tweets");
                None
            }
        }
    }

    /// Runs the full Twitter lookup: user, then timeline.
    ///
    /// A failed user call is an [`FetchOutcome::UpstreamError`] and a
    /// missing user is [`FetchOutcome::NotFound`]. A failed timeline call
    /// only clears `tweets`.
    pub async fn fetch_twitter(&self, username: &str, count: u32) -> FetchOutcome<TwitterFetch> {
        let profile = match self.lookup_user(username).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::warn!(username, "twitter user not found");
                return FetchOutcome::NotFound;
            }
            Err(e) => {
                tracing::error!(username, error = %e, "failed to fetch twitter user");
                return FetchOutcome::UpstreamError(UpstreamFailure::from(&e));
            }
        };

        let tweets = match profile.platform_id.as_deref() {
            Some(user_id) => self
                .fetch_tweets(user_id, count)
                .await
                .map(|raw| collect_timeline(&raw)),
            None => {
                tracing::warn!(username, "twitter user has no rest_id, skipping tweets");
                None
            }
        };

        FetchOutcome::Success(TwitterFetch { profile, tweets })
    }

    /// `Ok(None)` when the response is 2xx but the user path is missing.
    async fn lookup_user(&self, username: &str) -> Result<Option<Profile>, FetchError> {
        let url = format!("{}{USER_PATH}", self.api.base_url);
        let body = self
            .http
            .get_json(&url, &rapidapi_headers(&self.api), &[("username", username)])
            .await?;

        Ok(json::descend(&body, &USER_RESULT_PATH)
            .and_then(json::non_empty)
            .and_then(|user| normalize_user(user, username)))
    }
}
