//! Three-way result of a per-platform lookup.
//!
//! Callers must match on [`FetchOutcome`] before touching any record: a
//! profile is only reachable through [`FetchOutcome::Success`], and every
//! secondary field inside a success payload is an `Option`.

use serde::Serialize;

use crate::records::{Follower, Profile, Tweet};

/// Why an upstream call produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum UpstreamFailure {
    /// Upstream answered with a non-2xx status.
    Status(u16),
    /// DNS, connect, reset or timeout.
    Transport(String),
    /// 2xx response whose body was empty or not JSON.
    InvalidBody(String),
}

impl std::fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamFailure::Status(code) => write!(f, "upstream returned HTTP {code}"),
            UpstreamFailure::Transport(msg) => write!(f, "transport failure: {msg}"),
            UpstreamFailure::InvalidBody(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum FetchOutcome<T> {
    Success(T),
    NotFound,
    UpstreamError(UpstreamFailure),
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::NotFound | FetchOutcome::UpstreamError(_) => None,
        }
    }
}

/// Result payload of an Instagram lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstagramFetch {
    pub profile: Profile,
    /// Raw `data` object of the posts endpoint, consumed by the media
    /// downloader. `None` for private accounts or when the call failed.
    pub posts: Option<serde_json::Value>,
    /// `None` for private accounts or when the call failed.
    pub followers: Option<Vec<Follower>>,
}

impl InstagramFetch {
    /// True when the profile is public but a secondary fetch failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.profile.is_private && (self.posts.is_none() || self.followers.is_none())
    }
}

/// Result payload of a Twitter lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterFetch {
    pub profile: Profile,
    /// `None` when the timeline call failed; `Some(vec![])` when it succeeded
    /// with no parseable tweets.
    pub tweets: Option<Vec<Tweet>>,
}

impl TwitterFetch {
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.tweets.is_none()
    }
}
