//! HTTP client for the RapidAPI-hosted Instagram scraper.
//!
//! Every endpoint takes a single `username_or_id_or_url` query parameter and
//! wraps its payload in a top-level `data` object.

use serde_json::Value;
use socialview_core::ApiConfig;
use socialview_fetch::{rapidapi_headers, FetchError, HttpAdapter};

pub const PROFILE_PATH: &str = "/v1/info";
pub const EXTENDED_PROFILE_PATH: &str = "/v1.2/info";
pub const POSTS_PATH: &str = "/v1.2/posts";
pub const FOLLOWING_PATH: &str = "/v1/following";

const USERNAME_PARAM: &str = "username_or_id_or_url";

/// Client for the Instagram upstream API.
///
/// Holds no per-lookup state; one instance can serve any number of
/// sequential lookups.
#[derive(Debug, Clone)]
pub struct InstagramClient {
    http: HttpAdapter,
    api: ApiConfig,
}

impl InstagramClient {
    #[must_use]
    pub fn new(http: HttpAdapter, api: ApiConfig) -> Self {
        Self { http, api }
    }

    /// Primary profile lookup.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-2xx status, invalid
    /// JSON, or a body without `data`.
    pub async fn fetch_profile(&self, username: &str) -> Result<Value, FetchError> {
        self.fetch_data(PROFILE_PATH, username).await
    }

    /// Extended profile lookup, which still returns details for private
    /// accounts.
    ///
    /// # Errors
    ///
    /// Same as [`InstagramClient::fetch_profile`].
    pub async fn fetch_extended_profile(&self, username: &str) -> Result<Value, FetchError> {
        self.fetch_data(EXTENDED_PROFILE_PATH, username).await
    }

    /// Recent posts. The returned `data` object carries an `items` list.
    ///
    /// # Errors
    ///
    /// Same as [`InstagramClient::fetch_profile`].
    pub async fn fetch_posts(&self, username: &str) -> Result<Value, FetchError> {
        self.fetch_data(POSTS_PATH, username).await
    }

    /// Following/followers list. The returned `data` object carries an
    /// `items` list.
    ///
    /// # Errors
    ///
    /// Same as [`InstagramClient::fetch_profile`].
    pub async fn fetch_following(&self, username: &str) -> Result<Value, FetchError> {
        self.fetch_data(FOLLOWING_PATH, username).await
    }

    /// Issues the GET and unwraps the `data` envelope.
    async fn fetch_data(&self, path: &str, username: &str) -> Result<Value, FetchError> {
        let url = format!("{}{path}", self.api.base_url);
        let mut body = self
            .http
            .get_json(&url, &rapidapi_headers(&self.api), &[(USERNAME_PARAM, username)])
            .await?;

        body.get_mut("data")
            .map(Value::take)
            .filter(|data| !data.is_null())
            .ok_or_else(|| FetchError::MissingData {
                context: format!("`data` in response from {path}"),
            })
    }
}
