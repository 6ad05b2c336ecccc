//! Normalized, platform-agnostic records handed to the presentation layer.
//!
//! Every record is built once per lookup from an upstream payload and never
//! mutated afterwards. None of them keep a reference to the raw JSON they
//! were built from.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::Twitter => write!(f, "twitter"),
        }
    }
}

/// Identity and headline stats for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub platform: Platform,
    /// Handle as reported upstream, or the requested handle when absent.
    pub username: String,
    /// Upstream numeric identifier (Instagram `id`, Twitter `rest_id`).
    pub platform_id: Option<String>,
    pub display_name: String,
    pub biography: String,
    pub post_count: u64,
    pub follower_count: u64,
    pub following_count: u64,
    pub is_private: bool,
    pub created_at: Option<NaiveDate>,
    pub external_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_url: Option<String>,
    pub location: Option<String>,
    pub account_type: Option<String>,
}

/// Instagram media type, mapped from the numeric `media_type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Carousel,
}

impl MediaKind {
    /// Maps Instagram's `media_type` code.
    ///
    /// `1` is a photo and `2` a video. A missing code is treated as a photo;
    /// `8` and any other code render as a carousel.
    #[must_use]
    pub fn from_code(code: Option<u64>) -> Self {
        match code {
            None | Some(1) => MediaKind::Photo,
            Some(2) => MediaKind::Video,
            Some(_) => MediaKind::Carousel,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "photo"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Carousel => write!(f, "carousel"),
        }
    }
}

/// An Instagram post whose image was downloaded to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Position of the item in the upstream posts list.
    pub index: usize,
    pub caption: String,
    pub like_count: u64,
    pub comment_count: u64,
    /// Unix epoch seconds; `0` when upstream omitted `taken_at`.
    pub created_at: i64,
    pub local_media_path: PathBuf,
    pub location_name: Option<String>,
    pub media_kind: MediaKind,
}

/// One entry of an account's following/followers list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Follower {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetMedia {
    /// Upstream media type, e.g. `photo`, `video`, `animated_gif`.
    pub kind: String,
    pub url: String,
}

impl TweetMedia {
    #[must_use]
    pub fn is_photo(&self) -> bool {
        self.kind == "photo"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tweet {
    pub id: Option<String>,
    pub text: String,
    /// Upstream timestamp string, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
    pub created_at: String,
    pub retweet_count: u64,
    pub favorite_count: u64,
    pub reply_count: u64,
    pub quote_count: u64,
    pub media: Vec<TweetMedia>,
    pub is_pinned: bool,
}
