pub mod app_config;
pub mod config;
pub mod outcome;
pub mod records;

use thiserror::Error;

pub use app_config::{ApiConfig, AppConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use outcome::{FetchOutcome, InstagramFetch, TwitterFetch, UpstreamFailure};
pub use records::{Follower, MediaKind, Platform, Post, Profile, Tweet, TweetMedia};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
