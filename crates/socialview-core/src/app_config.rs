use std::path::PathBuf;

/// Connection settings for one upstream RapidAPI host.
///
/// Built from [`AppConfig`] and handed to each platform client at
/// construction, so client behavior depends only on its input and this value.
#[derive(Clone)]
pub struct ApiConfig {
    /// Value sent in the `x-rapidapi-host` header.
    pub host: String,
    /// Value sent in the `x-rapidapi-key` header.
    pub api_key: String,
    /// Root URL requests are issued against. `https://{host}` in production;
    /// tests point it at a mock server.
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn for_host(host: &str, api_key: &str) -> Self {
        Self {
            host: host.to_owned(),
            api_key: api_key.to_owned(),
            base_url: format!("https://{host}"),
        }
    }

    /// Replaces the base URL, keeping the host header value.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub rapidapi_key: String,
    pub instagram_api_host: String,
    pub twitter_api_host: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub download_dir: PathBuf,
    pub tweet_count: u32,
    pub log_level: String,
}

impl AppConfig {
    #[must_use]
    pub fn instagram_api(&self) -> ApiConfig {
        ApiConfig::for_host(&self.instagram_api_host, &self.rapidapi_key)
    }

    #[must_use]
    pub fn twitter_api(&self) -> ApiConfig {
        ApiConfig::for_host(&self.twitter_api_host, &self.rapidapi_key)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("rapidapi_key", &"[redacted]")
            .field("instagram_api_host", &self.instagram_api_host)
            .field("twitter_api_host", &self.twitter_api_host)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("download_dir", &self.download_dir)
            .field("tweet_count", &self.tweet_count)
            .field("log_level", &self.log_level)
            .finish()
    }
}
