//! Domain types that flow between the publish steps.

use serde::Serialize;

/// The user an access token belongs to. Fetched fresh for every publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    /// Stable subject identifier (`sub` claim)
    pub subject_id: String,
    /// Display name, if the token grants the profile scope
    pub name: Option<String>,
    /// Email, if the token grants the email scope
    pub email: Option<String>,
}

impl UserIdentity {
    /// Member URN used as owner and author, e.g. `urn:li:person:abc123`.
    pub fn person_urn(&self) -> String {
        format!("urn:li:person:{}", self.subject_id)
    }
}

/// A registered upload slot. Valid for exactly one binary upload, so it is
/// not `Clone` and `upload_binary` consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct UploadSession {
    pub upload_url: String,
    pub asset_reference: String,
}

/// Proof that an image was uploaded for an asset reference.
///
/// Only [`FeedPublisher::upload_binary`](super::FeedPublisher::upload_binary)
/// constructs this, after the upload endpoint answered 200 or 201.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    asset_reference: String,
}

impl UploadedAsset {
    pub(crate) fn confirmed(session: UploadSession) -> Self {
        Self {
            asset_reference: session.asset_reference,
        }
    }

    pub fn asset_reference(&self) -> &str {
        &self.asset_reference
    }
}

/// Who can see a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
}

impl Visibility {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "PUBLIC",
        }
    }
}

/// The publishable unit: author, caption and an uploaded image.
///
/// Fields are private; [`FeedPost::new`] is the only way to build one, so a
/// post always points at an asset whose upload was confirmed.
///
/// ```compile_fail
/// use postwright_core::publish::{FeedPost, Visibility};
///
/// let post = FeedPost {
///     author: "urn:li:person:abc".to_string(),
///     caption_text: "Stay curious.".to_string(),
///     asset_reference: "urn:li:digitalmediaAsset:NEVER_UPLOADED".to_string(),
///     visibility: Visibility::Public,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPost {
    author: String,
    caption_text: String,
    asset_reference: String,
    visibility: Visibility,
}

impl FeedPost {
    /// Build a public image post. Requires a confirmed upload.
    pub fn new(identity: &UserIdentity, asset: &UploadedAsset, caption_text: &str) -> Self {
        Self {
            author: identity.person_urn(),
            caption_text: caption_text.to_string(),
            asset_reference: asset.asset_reference().to_string(),
            visibility: Visibility::Public,
        }
    }

    /// Author URN.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn caption_text(&self) -> &str {
        &self.caption_text
    }

    /// Reference of the uploaded image.
    pub fn asset_reference(&self) -> &str {
        &self.asset_reference
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Result of a successful post creation.
#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    /// HTTP status of the post-creation call
    pub status: u16,
    /// Post URN, from the `X-RestLi-Id` header or the body `id`
    pub post_id: Option<String>,
    /// Asset the post references
    pub asset_reference: String,
    /// Raw response body
    pub body: String,
}
