//! Per-platform lookup runners.
//!
//! Each runner drives one username through its pipeline and splits the
//! result into a report plus operator advisories. A total failure (nothing to
//! show) is returned as an error; partial results come back with warnings.

use socialview_core::{AppConfig, FetchOutcome, InstagramFetch, TwitterFetch};
use socialview_fetch::HttpAdapter;
use socialview_instagram::{InstagramClient, MediaDownload, MediaDownloader};
use socialview_twitter::TwitterClient;

use crate::report::{InstagramReport, Report, TwitterReport};

pub(crate) struct LookupOutput {
    pub report: Report,
    pub advisories: Vec<String>,
}

pub(crate) async fn run_instagram(config: &AppConfig, username: &str) -> anyhow::Result<LookupOutput> {
    let http = HttpAdapter::new(config.request_timeout_secs, &config.user_agent)?;
    let client = InstagramClient::new(http.clone(), config.instagram_api());

    let fetch = match client.resolve_instagram(username).await {
        FetchOutcome::Success(fetch) => fetch,
        FetchOutcome::NotFound => anyhow::bail!("no instagram profile data found for '{username}'"),
        FetchOutcome::UpstreamError(failure) => {
            anyhow::bail!("failed to fetch instagram profile for '{username}': {failure}")
        }
    };

    let downloader = MediaDownloader::new(http, &config.download_dir);
    let media = downloader
        .download_media(&fetch.profile, fetch.posts.as_ref())
        .await;

    let advisories = instagram_advisories(&fetch, &media);
    tracing::info!(
        username,
        posts = media.posts.len(),
        warnings = advisories.len(),
        "instagram lookup complete"
    );

    Ok(LookupOutput {
        report: Report::Instagram(InstagramReport {
            profile: fetch.profile,
            profile_picture: media.profile_picture,
            posts: media.posts,
            followers: fetch.followers,
        }),
        advisories,
    })
}

pub(crate) async fn run_twitter(
    config: &AppConfig,
    username: &str,
    count: u32,
) -> anyhow::Result<LookupOutput> {
    let http = HttpAdapter::new(config.request_timeout_secs, &config.user_agent)?;
    let client = TwitterClient::new(http, config.twitter_api());

    let fetch = match client.fetch_twitter(username, count).await {
        FetchOutcome::Success(fetch) => fetch,
        FetchOutcome::NotFound => anyhow::bail!("no twitter user found for '{username}'"),
        FetchOutcome::UpstreamError(failure) => {
            anyhow::bail!("failed to fetch twitter user '{username}': {failure}")
        }
    };

    let advisories = twitter_advisories(&fetch);
    tracing::info!(
        username,
        tweets = fetch.tweets.as_ref().map_or(0, Vec::len),
        warnings = advisories.len(),
        "twitter lookup complete"
    );

    Ok(LookupOutput {
        report: Report::Twitter(TwitterReport {
            profile: fetch.profile,
            tweets: fetch.tweets,
        }),
        advisories,
    })
}

pub(crate) fn instagram_advisories(fetch: &InstagramFetch, media: &MediaDownload) -> Vec<String> {
    let mut advisories = Vec::new();

    if fetch.profile.is_private {
        advisories.push("warning: account is private, posts and following are unavailable".to_string());
    } else if fetch.is_degraded() {
        if fetch.posts.is_none() {
            advisories.push("warning: could not fetch posts".to_string());
        }
        if fetch.followers.is_none() {
            advisories.push("warning: could not fetch following list".to_string());
        }
    }

    if fetch.posts.is_some() && media.posts.is_empty() {
        advisories.push("warning: no posts could be downloaded".to_string());
    }
    if fetch.profile.profile_image_url.is_some() && media.profile_picture.is_none() {
        advisories.push("warning: could not download profile picture".to_string());
    }

    advisories
}

pub(crate) fn twitter_advisories(fetch: &TwitterFetch) -> Vec<String> {
    if fetch.is_degraded() {
        return vec!["warning: could not fetch tweets".to_string()];
    }
    match &fetch.tweets {
        Some(tweets) if tweets.is_empty() => vec!["warning: no tweets found".to_string()],
        _ => Vec::new(),
    }
}
