use std::path::PathBuf;

use socialview_core::UpstreamFailure;
use thiserror::Error;

/// Failures of the acquisition pipeline.
///
/// Every variant is caught at the smallest enclosing scope and turned into a
/// degraded result; none of them is ever retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, reset, timeout or TLS failure from the HTTP client.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UpstreamStatus { status: u16, url: String },

    /// The response body was empty or not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// An expected JSON path was absent.
    #[error("missing data: {context}")]
    MissingData { context: String },

    /// Writing a downloaded file failed.
    #[error("storage error for {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Returns `true` when the failure happened below HTTP (no status received).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    /// The upstream status code, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UpstreamStatus { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<&FetchError> for UpstreamFailure {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::UpstreamStatus { status, .. } => UpstreamFailure::Status(*status),
            FetchError::Transport(e) => match e.status() {
                Some(status) => UpstreamFailure::Status(status.as_u16()),
                None => UpstreamFailure::Transport(e.to_string()),
            },
            FetchError::InvalidUrl { .. } => UpstreamFailure::Transport(err.to_string()),
            FetchError::Deserialize { .. }
            | FetchError::MissingData { .. }
            | FetchError::Storage { .. } => UpstreamFailure::InvalidBody(err.to_string()),
        }
    }
}
