//! Thin GET-only HTTP adapter shared by the platform clients.
//!
//! Wraps `reqwest` with a fixed per-request timeout and maps every failure to
//! a typed [`FetchError`]. Non-2xx statuses are returned as
//! [`FetchError::UpstreamStatus`] rather than surfaced as transport errors.
//! Nothing here retries; retry policy belongs to the caller.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FetchError;

/// HTTP client used for both JSON API calls and media downloads.
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    client: Client,
}

impl HttpAdapter {
    /// Creates an adapter with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `url` cannot be parsed.
    /// - [`FetchError::Transport`] on network failure or timeout.
    /// - [`FetchError::UpstreamStatus`] on a non-2xx status.
    /// - [`FetchError::Deserialize`] if the body is empty or not valid JSON.
    pub async fn get_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, FetchError> {
        let url = build_url(url, query)?;
        tracing::debug!(url = %url, "GET");

        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Downloads the raw bytes behind `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `url` cannot be parsed.
    /// - [`FetchError::Transport`] on network failure or timeout.
    /// - [`FetchError::UpstreamStatus`] on a non-2xx status.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = build_url(url, &[])?;
        tracing::debug!(url = %url, "GET media");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Parses `raw` and appends `query` as percent-encoded pairs.
///
/// Pairs already present on `raw` are preserved.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if `raw` is not an absolute URL.
pub fn build_url(raw: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
    let mut url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query {
            pairs.append_pair(k, v);
        }
    }
    Ok(url)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
