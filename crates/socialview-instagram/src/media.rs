//! Best-effort download of an Instagram profile picture and recent post
//! images.
//!
//! Nothing in here fails the lookup. A missing picture, an unresolvable post
//! image, or a failed download is logged and skipped; a [`Post`] is only
//! emitted once its image is on disk.

use std::path::{Path, PathBuf};

use serde_json::Value;
use socialview_core::{MediaKind, Post, Profile};
use socialview_fetch::{json, FetchError, HttpAdapter};

/// Upper bound on post images downloaded per lookup.
pub const MAX_POSTS: usize = 10;

const PROFILE_PICTURE_FILE: &str = "profile_pic.jpg";

/// Locally stored media for one lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDownload {
    pub profile_picture: Option<PathBuf>,
    pub posts: Vec<Post>,
}

/// Writes media under `<root>/instagram/{profile,posts}/`.
///
/// File names are fixed per run, so a second lookup overwrites the first.
#[derive(Debug, Clone)]
pub struct MediaDownloader {
    http: HttpAdapter,
    root: PathBuf,
}

impl MediaDownloader {
    #[must_use]
    pub fn new(http: HttpAdapter, root: impl Into<PathBuf>) -> Self {
        Self {
            http,
            root: root.into(),
        }
    }

    #[must_use]
    pub fn profile_dir(&self) -> PathBuf {
        self.root.join("instagram").join("profile")
    }

    #[must_use]
    pub fn posts_dir(&self) -> PathBuf {
        self.root.join("instagram").join("posts")
    }

    /// Downloads the profile picture and up to [`MAX_POSTS`] post images.
    ///
    /// `raw_posts` is the posts endpoint's `data` object; `None` means the
    /// account is private or the posts call failed.
    pub async fn download_media(&self, profile: &Profile, raw_posts: Option<&Value>) -> MediaDownload {
        let profile_picture = match self.download_profile_picture(profile).await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(username = %profile.username, error = %e, "could not download profile picture");
                None
            }
        };

        let posts = match raw_posts {
            Some(data) => self.download_posts(&profile.username, data).await,
            None => {
                tracing::warn!(
                    username = %profile.username,
                    "no posts data available, account might be private"
                );
                Vec::new()
            }
        };

        MediaDownload {
            profile_picture,
            posts,
        }
    }

    async fn download_profile_picture(&self, profile: &Profile) -> Result<Option<PathBuf>, FetchError> {
        let Some(url) = profile.profile_image_url.as_deref() else {
            return Ok(None);
        };
        let dir = self.profile_dir();
        create_dir(&dir).await?;
        let path = dir.join(PROFILE_PICTURE_FILE);
        self.save(url, &path).await?;
        Ok(Some(path))
    }

    async fn download_posts(&self, username: &str, data: &Value) -> Vec<Post> {
        let items = json::array_field(data, "items");
        if items.is_empty() {
            tracing::warn!(username, "no posts found for this account");
            return Vec::new();
        }

        let dir = self.posts_dir();
        if let Err(e) = create_dir(&dir).await {
            tracing::warn!(username, error = %e, "could not prepare posts directory");
            return Vec::new();
        }

        if items.len() > MAX_POSTS {
            tracing::debug!(username, total = items.len(), "only downloading the first {MAX_POSTS} posts");
        }

        let mut posts = Vec::new();
        for (index, item) in items.iter().take(MAX_POSTS).enumerate() {
            match self.download_post(&dir, index, item).await {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => {
                    tracing::warn!(username, post = index + 1, "post has no image url, skipping");
                }
                Err(e) => {
                    tracing::warn!(username, post = index + 1, error = %e, "could not process post");
                }
            }
        }
        posts
    }

    async fn download_post(&self, dir: &Path, index: usize, item: &Value) -> Result<Option<Post>, FetchError> {
        if !item.is_object() {
            return Err(FetchError::MissingData {
                context: format!("post {index} is not an object"),
            });
        }
        let Some(url) = resolve_image_url(item) else {
            return Ok(None);
        };
        let path = dir.join(format!("post_{index}.jpg"));
        self.save(url, &path).await?;
        Ok(Some(build_post(index, item, path)))
    }

    async fn save(&self, url: &str, path: &Path) -> Result<(), FetchError> {
        let bytes = self.http.get_bytes(url).await?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| FetchError::Storage {
                path: path.to_path_buf(),
                source,
            })
    }
}

async fn create_dir(dir: &Path) -> Result<(), FetchError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| FetchError::Storage {
            path: dir.to_path_buf(),
            source,
        })
}

/// Resolves the image URL for one post item.
///
/// Image candidate lists are tried in order and the first non-empty one
/// wins:
///
/// 1. `image_versions2.candidates`
/// 2. `carousel_media[0].image_versions2.candidates`
/// 3. `image_versions.items`
///
/// The URL is taken from the first entry of the winning list. Returns `None`
/// when no list has entries or that entry has no `url`.
#[must_use]
pub fn resolve_image_url(item: &Value) -> Option<&str> {
    image_candidates(item)?
        .first()
        .and_then(|candidate| json::str_field(candidate, "url"))
}

fn image_candidates(item: &Value) -> Option<&[Value]> {
    let direct = || candidate_list(item, &["image_versions2", "candidates"]);
    let carousel = || {
        item.get("carousel_media")
            .and_then(Value::as_array)
            .and_then(|children| children.first())
            .and_then(|child| candidate_list(child, &["image_versions2", "candidates"]))
    };
    let legacy = || candidate_list(item, &["image_versions", "items"]);

    direct().or_else(carousel).or_else(legacy)
}

fn candidate_list<'a>(value: &'a Value, path: &[&str]) -> Option<&'a [Value]> {
    json::descend(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .filter(|list| !list.is_empty())
}

/// Extracts the flat [`Post`] fields, defaulting anything absent.
#[must_use]
pub fn build_post(index: usize, item: &Value, local_media_path: PathBuf) -> Post {
    let caption = item
        .get("caption")
        .filter(|c| c.is_object())
        .map(|c| json::string_or_empty(c, "text"))
        .unwrap_or_default();

    let location_name = item
        .get("location")
        .and_then(|loc| json::str_field(loc, "name"))
        .map(str::to_owned);

    Post {
        index,
        caption,
        like_count: json::u64_field(item, "like_count").unwrap_or(0),
        comment_count: json::u64_field(item, "comment_count").unwrap_or(0),
        created_at: json::i64_field(item, "taken_at").unwrap_or(0),
        local_media_path,
        location_name,
        media_kind: MediaKind::from_code(json::u64_field(item, "media_type")),
    }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
