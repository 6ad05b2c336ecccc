//! Normalization of Instagram profile and following payloads into
//! [`socialview_core`] records.

use chrono::DateTime;
use serde_json::Value;
use socialview_core::{Follower, Platform, Profile};
use socialview_fetch::json;

/// Privacy assumed when a profile payload has no boolean `is_private` flag.
///
/// An account is treated as private unless upstream explicitly says
/// otherwise. This keeps the resolver from requesting posts and followers for
/// accounts of unknown visibility. Changing it changes which endpoints a
/// lookup calls.
pub const PRIVATE_WHEN_FLAG_MISSING: bool = true;

/// Reads the privacy flag, applying [`PRIVATE_WHEN_FLAG_MISSING`] when the
/// flag is absent, `null`, or not a boolean.
#[must_use]
pub fn is_private(profile: &Value) -> bool {
    json::bool_field(profile, "is_private").unwrap_or(PRIVATE_WHEN_FLAG_MISSING)
}

/// Converts a profile `data` object into a [`Profile`].
///
/// `requested_username` fills `username` when the payload omits it.
#[must_use]
pub fn normalize_profile(data: &Value, requested_username: &str) -> Profile {
    let created_at = json::i64_field(data, "created_time")
        .filter(|secs| *secs > 0)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.date_naive());

    let profile_image_url = json::descend(data, &["hd_profile_pic_url_info", "url"])
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    Profile {
        platform: Platform::Instagram,
        username: json::str_field(data, "username")
            .unwrap_or(requested_username)
            .to_owned(),
        platform_id: json::scalar_string(data, "id").or_else(|| json::scalar_string(data, "pk")),
        display_name: json::string_or_empty(data, "full_name"),
        biography: json::string_or_empty(data, "biography"),
        post_count: json::u64_field(data, "media_count").unwrap_or(0),
        follower_count: json::u64_field(data, "follower_count").unwrap_or(0),
        following_count: json::u64_field(data, "following_count").unwrap_or(0),
        is_private: is_private(data),
        created_at,
        external_url: json::str_field(data, "external_url").map(str::to_owned),
        profile_image_url,
        banner_url: None,
        location: None,
        account_type: json::scalar_string(data, "account_type"),
    }
}

/// Converts the following endpoint's `data` object into [`Follower`]s.
///
/// Entries that are not objects are skipped.
#[must_use]
pub fn normalize_followers(data: &Value) -> Vec<Follower> {
    json::array_field(data, "items")
        .iter()
        .filter(|item| item.is_object())
        .map(|item| Follower {
            full_name: json::str_field(item, "full_name").map(str::to_owned),
            username: json::str_field(item, "username").map(str::to_owned),
            is_private: json::bool_field(item, "is_private"),
        })
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
