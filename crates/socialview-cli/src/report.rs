//! Plain-text and JSON rendering of lookup results.

use std::fmt::{self, Write};
use std::path::PathBuf;

use chrono::DateTime;
use serde::Serialize;
use socialview_core::{Follower, Post, Profile, Tweet};

#[derive(Debug, Serialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub(crate) enum Report {
    Instagram(InstagramReport),
    Twitter(TwitterReport),
}

#[derive(Debug, Serialize)]
pub(crate) struct InstagramReport {
    pub profile: Profile,
    pub profile_picture: Option<PathBuf>,
    pub posts: Vec<Post>,
    pub followers: Option<Vec<Follower>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TwitterReport {
    pub profile: Profile,
    pub tweets: Option<Vec<Tweet>>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Instagram(r) => render_instagram(f, r),
            Report::Twitter(r) => render_twitter(f, r),
        }
    }
}

fn render_profile(out: &mut impl Write, profile: &Profile, posts_label: &str) -> fmt::Result {
    writeln!(out, "{} (@{})", profile.display_name, profile.username)?;
    if !profile.biography.is_empty() {
        writeln!(out, "Bio: {}", profile.biography)?;
    }
    writeln!(
        out,
        "{posts_label}: {} | Followers: {} | Following: {}",
        profile.post_count, profile.follower_count, profile.following_count
    )?;
    if let Some(kind) = &profile.account_type {
        writeln!(out, "Account type: {kind}")?;
    }
    if let Some(location) = &profile.location {
        writeln!(out, "Location: {location}")?;
    }
    if let Some(created) = profile.created_at {
        writeln!(out, "Joined: {}", created.format("%Y-%m-%d"))?;
    }
    if let Some(url) = &profile.external_url {
        writeln!(out, "Website: {url}")?;
    }
    if profile.is_private {
        writeln!(out, "Private account")?;
    }
    Ok(())
}

fn render_instagram(out: &mut impl Write, report: &InstagramReport) -> fmt::Result {
    render_profile(out, &report.profile, "Posts")?;
    if let Some(path) = &report.profile_picture {
        writeln!(out, "Profile picture: {}", path.display())?;
    }

    if !report.posts.is_empty() {
        writeln!(out, "\nRecent posts")?;
        for post in &report.posts {
            writeln!(out, "---")?;
            writeln!(out, "[{}] {}", post.media_kind, post.local_media_path.display())?;
            if !post.caption.is_empty() {
                writeln!(out, "Caption: {}", post.caption)?;
            }
            writeln!(out, "{} likes | {} comments", post.like_count, post.comment_count)?;
            if let Some(location) = &post.location_name {
                writeln!(out, "Location: {location}")?;
            }
            if let Some(posted) = format_epoch(post.created_at) {
                writeln!(out, "Posted on: {posted}")?;
            }
        }
    }

    if let Some(followers) = report.followers.as_ref().filter(|f| !f.is_empty()) {
        writeln!(out, "\nFollowing")?;
        for follower in followers {
            let private = match follower.is_private {
                Some(true) => "private",
                Some(false) => "public",
                None => "n/a",
            };
            writeln!(
                out,
                "{} (@{}) {private}",
                follower.full_name.as_deref().unwrap_or("N/A"),
                follower.username.as_deref().unwrap_or("N/A"),
            )?;
        }
    }
    Ok(())
}

fn render_twitter(out: &mut impl Write, report: &TwitterReport) -> fmt::Result {
    render_profile(out, &report.profile, "Tweets")?;
    if let Some(url) = &report.profile.profile_image_url {
        writeln!(out, "Profile image: {url}")?;
    }
    if let Some(url) = &report.profile.banner_url {
        writeln!(out, "Banner: {url}")?;
    }

    let Some(tweets) = report.tweets.as_ref().filter(|t| !t.is_empty()) else {
        return Ok(());
    };
    writeln!(out, "\nRecent tweets")?;
    for tweet in tweets {
        if tweet.is_pinned {
            writeln!(out, "Pinned tweet")?;
        }
        writeln!(out, "---")?;
        writeln!(out, "{}", tweet.text)?;
        writeln!(
            out,
            "{} retweets | {} likes | {} replies | {} quotes",
            tweet.retweet_count, tweet.favorite_count, tweet.reply_count, tweet.quote_count
        )?;
        if !tweet.created_at.is_empty() {
            writeln!(out, "Posted on: {}", tweet.created_at)?;
        }
        for media in tweet.media.iter().filter(|m| m.is_photo()) {
            writeln!(out, "Photo: {}", media.url)?;
        }
    }
    Ok(())
}

fn format_epoch(secs: i64) -> Option<String> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}
