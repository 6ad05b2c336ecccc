//! Normalization of Twitter user objects and timeline entries.
//!
//! Timeline payloads nest each tweet five levels deep under
//! `content.itemContent.tweet_results.result.legacy`. Cursor and ad entries
//! do not have that shape and are skipped silently.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use socialview_core::{Platform, Profile, Tweet, TweetMedia};
use socialview_fetch::json;

/// Path from a timeline entry to the tweet result object.
const TWEET_RESULT_PATH: [&str; 4] = ["content", "itemContent", "tweet_results", "result"];

/// Path from the `/user-tweets` body to the instruction list.
const INSTRUCTIONS_PATH: [&str; 3] = ["result", "timeline", "instructions"];

/// Upstream `created_at` format, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Timeline instruction kinds that carry tweets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    /// `TimelinePinEntry`: a single pinned `entry`.
    Pin,
    /// `TimelineAddEntries`: a batch of `entries`.
    AddEntries,
    Other,
}

impl InstructionKind {
    #[must_use]
    pub fn classify(instruction: &Value) -> Self {
        match json::str_field(instruction, "type") {
            Some("TimelinePinEntry") => InstructionKind::Pin,
            Some("TimelineAddEntries") => InstructionKind::AddEntries,
            _ => InstructionKind::Other,
        }
    }
}

/// Extracts a [`Tweet`] from one timeline entry.
///
/// Returns `None` at the first missing link of
/// `content → itemContent → tweet_results → result → legacy`. The returned
/// tweet is never pinned; pinning is decided by the enclosing instruction.
#[must_use]
pub fn normalize(entry: &Value) -> Option<Tweet> {
    let result = json::descend(entry, &TWEET_RESULT_PATH).and_then(json::non_empty)?;
    let legacy = result.get("legacy").and_then(json::non_empty)?;
    if !legacy.is_object() {
        return None;
    }

    let media = json::descend(legacy, &["extended_entities", "media"])
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(normalize_media).collect())
        .unwrap_or_default();

    Some(Tweet {
        id: json::scalar_string(result, "rest_id")
            .or_else(|| json::scalar_string(legacy, "id_str")),
        text: json::string_or_empty(legacy, "full_text"),
        created_at: json::string_or_empty(legacy, "created_at"),
        retweet_count: json::u64_field(legacy, "retweet_count").unwrap_or(0),
        favorite_count: json::u64_field(legacy, "favorite_count").unwrap_or(0),
        reply_count: json::u64_field(legacy, "reply_count").unwrap_or(0),
        quote_count: json::u64_field(legacy, "quote_count").unwrap_or(0),
        media,
        is_pinned: false,
    })
}

fn normalize_media(item: &Value) -> Option<TweetMedia> {
    let url = json::str_field(item, "media_url_https")?;
    Some(TweetMedia {
        kind: json::str_field(item, "type").unwrap_or("unknown").to_owned(),
        url: url.to_owned(),
    })
}

/// Walks the timeline instructions of a `/user-tweets` body in order.
///
/// The entry of a pin instruction is tagged pinned; every entry of an
/// add-entries batch is unpinned regardless of position. Other instruction
/// kinds and entries that do not resolve to a tweet are ignored.
#[must_use]
pub fn collect_timeline(raw: &Value) -> Vec<Tweet> {
    let instructions = json::descend(raw, &INSTRUCTIONS_PATH)
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let mut tweets = Vec::new();
    for instruction in instructions {
        match InstructionKind::classify(instruction) {
            InstructionKind::Pin => {
                if let Some(tweet) = instruction.get("entry").and_then(normalize) {
                    tweets.push(Tweet {
                        is_pinned: true,
                        ..tweet
                    });
                }
            }
            InstructionKind::AddEntries => {
                tweets.extend(json::array_field(instruction, "entries").iter().filter_map(normalize));
            }
            InstructionKind::Other => {}
        }
    }
    tweets
}

/// Converts a user result object (`result.data.user.result`) into a
/// [`Profile`].
///
/// Returns `None` when the object has no `legacy` block, which is how
/// suspended and unavailable accounts come back.
#[must_use]
pub fn normalize_user(user: &Value, requested_username: &str) -> Option<Profile> {
    let legacy = user.get("legacy").and_then(json::non_empty)?;

    let external_url = json::descend(legacy, &["entities", "url", "urls"])
        .and_then(Value::as_array)
        .and_then(|urls| urls.first())
        .and_then(|u| json::str_field(u, "expanded_url"))
        .or_else(|| json::str_field(legacy, "url"))
        .map(str::to_owned);

    Some(Profile {
        platform: Platform::Twitter,
        username: json::str_field(legacy, "screen_name")
            .unwrap_or(requested_username)
            .to_owned(),
        platform_id: json::scalar_string(user, "rest_id"),
        display_name: json::string_or_empty(legacy, "name"),
        biography: json::string_or_empty(legacy, "description"),
        post_count: json::u64_field(legacy, "statuses_count").unwrap_or(0),
        follower_count: json::u64_field(legacy, "followers_count").unwrap_or(0),
        following_count: json::u64_field(legacy, "friends_count").unwrap_or(0),
        is_private: json::bool_field(legacy, "protected").unwrap_or(false),
        created_at: json::str_field(legacy, "created_at").and_then(parse_created_at),
        external_url,
        profile_image_url: json::str_field(legacy, "profile_image_url_https").map(full_size_image_url),
        banner_url: json::str_field(legacy, "profile_banner_url").map(str::to_owned),
        location: json::str_field(legacy, "location").map(str::to_owned),
        account_type: None,
    })
}

/// Parses the upstream `created_at` string into a calendar date.
#[must_use]
pub fn parse_created_at(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Strips the `_normal` thumbnail suffix to get the original-size avatar.
#[must_use]
pub fn full_size_image_url(url: &str) -> String {
    url.replace("_normal", "")
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
