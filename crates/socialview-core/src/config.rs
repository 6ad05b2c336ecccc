use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_INSTAGRAM_API_HOST: &str = "instagram-scraper-api2.p.rapidapi.com";
pub const DEFAULT_TWITTER_API_HOST: &str = "twitter241.p.rapidapi.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let rapidapi_key = require("RAPIDAPI_KEY")?;
    let instagram_api_host = or_default("INSTAGRAM_API_HOST", DEFAULT_INSTAGRAM_API_HOST);
    let twitter_api_host = or_default("TWITTER_API_HOST", DEFAULT_TWITTER_API_HOST);

    let request_timeout_secs =
        parse_u64("SOCIALVIEW_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOCIALVIEW_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("SOCIALVIEW_USER_AGENT", "socialview/0.1 (profile-viewer)");
    let download_dir = PathBuf::from(or_default("SOCIALVIEW_DOWNLOAD_DIR", "downloads"));
    let tweet_count = parse_u32("SOCIALVIEW_TWEET_COUNT", "20")?;
    let log_level = or_default("SOCIALVIEW_LOG_LEVEL", "info");

    Ok(AppConfig {
        rapidapi_key,
        instagram_api_host,
        twitter_api_host,
        request_timeout_secs,
        user_agent,
        download_dir,
        tweet_count,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
