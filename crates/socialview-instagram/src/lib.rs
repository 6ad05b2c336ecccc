//! Instagram acquisition: upstream client, lookup pipeline, payload
//! normalization and media download.

pub mod client;
pub mod media;
pub mod normalize;
mod resolver;

pub use client::InstagramClient;
pub use media::{resolve_image_url, MediaDownload, MediaDownloader, MAX_POSTS};
pub use normalize::{is_private, normalize_followers, normalize_profile, PRIVATE_WHEN_FLAG_MISSING};
