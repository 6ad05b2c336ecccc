//! Instagram lookup pipeline: profile, private-account escalation, then
//! posts and following for public accounts.

use socialview_core::{FetchOutcome, InstagramFetch, UpstreamFailure};
use socialview_fetch::{json, FetchError};

use crate::client::InstagramClient;
use crate::normalize::{is_private, normalize_followers, normalize_profile};

impl InstagramClient {
    /// Resolves one username into a [`FetchOutcome`].
    ///
    /// Calls are issued strictly in sequence:
    ///
    /// 1. Primary profile. Any HTTP failure is an
    ///    [`FetchOutcome::UpstreamError`]; a missing or empty `data` object is
    ///    [`FetchOutcome::NotFound`].
    /// 2. Private (or unknown visibility) accounts escalate to the extended
    ///    profile endpoint, keep the primary payload if that fails, and
    ///    return without posts or followers.
    /// 3. Public accounts fetch posts and then following. Each failure only
    ///    clears its own field.
    pub async fn resolve_instagram(&self, username: &str) -> FetchOutcome<InstagramFetch> {
        let primary = match self.fetch_profile(username).await {
            Ok(data) => data,
            Err(FetchError::MissingData { context }) => {
                tracing::warn!(username, context = %context, "instagram profile payload has no data");
                return FetchOutcome::NotFound;
            }
            Err(e) => {
                tracing::error!(username, error = %e, "failed to fetch instagram profile");
                return FetchOutcome::UpstreamError(UpstreamFailure::from(&e));
            }
        };

        if json::non_empty(&primary).is_none() {
            tracing::warn!(username, "instagram profile data is empty");
            return FetchOutcome::NotFound;
        }

        if is_private(&primary) {
            let data = match self.fetch_extended_profile(username).await {
                Ok(extended) if json::non_empty(&extended).is_some() => extended,
                Ok(_) => {
                    tracing::warn!(username, "extended profile is empty, keeping primary profile");
                    primary
                }
                Err(e) => {
                    tracing::warn!(
                        username,
                        error = %e,
                        "extended profile fetch failed, keeping primary profile"
                    );
                    primary
                }
            };
            return FetchOutcome::Success(InstagramFetch {
                profile: normalize_profile(&data, username),
                posts: None,
                followers: None,
            });
        }

        let posts = match self.fetch_posts(username).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(username, error = %e, "failed to fetch instagram posts");
                None
            }
        };

        let followers = match self.fetch_following(username).await {
            Ok(data) => Some(normalize_followers(&data)),
            Err(e) => {
                tracing::warn!(username, error = %e, "failed to fetch instagram following");
                None
            }
        };

        FetchOutcome::Success(InstagramFetch {
            profile: normalize_profile(&primary, username),
            posts,
            followers,
        })
    }
}
