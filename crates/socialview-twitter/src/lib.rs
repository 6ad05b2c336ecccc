//! Twitter acquisition: user lookup, timeline fetch and tweet normalization.

pub mod client;
pub mod normalize;

pub use client::{TwitterClient, DEFAULT_TWEET_COUNT};
pub use normalize::{collect_timeline, normalize, normalize_user, InstructionKind};
