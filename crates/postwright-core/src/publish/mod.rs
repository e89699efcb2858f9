//! LinkedIn feed publishing.
//!
//! Publishing is a strict four-step chain: resolve identity, register an
//! upload, PUT the image bytes, create the post. Each step consumes the
//! previous step's output, so a post can only reference an asset whose
//! upload was confirmed.

pub(crate) mod publisher;
pub(crate) mod types;
pub(crate) mod wire;

pub use publisher::FeedPublisher;
pub use types::{FeedPost, PublishOutcome, UploadSession, UploadedAsset, UserIdentity, Visibility};
pub use wire::FEED_IMAGE_RECIPE;
