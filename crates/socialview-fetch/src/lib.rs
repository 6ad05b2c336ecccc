pub mod client;
pub mod error;
pub mod json;

pub use client::{build_url, HttpAdapter};
pub use error::FetchError;

/// Header pairs RapidAPI expects on every request.
#[must_use]
pub fn rapidapi_headers(api: &socialview_core::ApiConfig) -> [(&str, &str); 2] {
    [
        ("x-rapidapi-host", api.host.as_str()),
        ("x-rapidapi-key", api.api_key.as_str()),
    ]
}
