//! LinkedIn v2 request and response bodies.

use super::types::FeedPost;
use serde::{Deserialize, Serialize};

/// Media recipe for images shared to the feed.
pub const FEED_IMAGE_RECIPE: &str = "urn:li:digitalmediaRecipe:feedshare-image";

const UPLOAD_MECHANISM_KEY: &str = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest";

// --- Identity ---

/// `/userinfo` (OpenID Connect) response.
#[derive(Deserialize)]
pub(crate) struct UserInfoResponse {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

// --- Upload registration ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterUploadBody {
    register_upload_request: RegisterUploadRequest,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterUploadRequest {
    recipes: Vec<String>,
    owner: String,
    service_relationships: Vec<ServiceRelationship>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceRelationship {
    relationship_type: String,
    identifier: String,
}

impl RegisterUploadBody {
    pub fn feed_image(owner_urn: String) -> Self {
        Self {
            register_upload_request: RegisterUploadRequest {
                recipes: vec![FEED_IMAGE_RECIPE.to_string()],
                owner: owner_urn,
                service_relationships: vec![ServiceRelationship {
                    relationship_type: "OWNER".to_string(),
                    identifier: "urn:li:userGeneratedContent".to_string(),
                }],
            },
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct RegisterUploadResponse {
    value: RegisterUploadValue,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterUploadValue {
    asset: String,
    upload_mechanism: UploadMechanism,
}

#[derive(Deserialize)]
struct UploadMechanism {
    #[serde(rename = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest")]
    http_request: Option<MediaUploadHttpRequest>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaUploadHttpRequest {
    upload_url: String,
}

impl RegisterUploadResponse {
    /// Split into `(upload_url, asset_reference)`.
    pub fn into_parts(self) -> Result<(String, String), String> {
        let http_request = self
            .value
            .upload_mechanism
            .http_request
            .ok_or_else(|| format!("response has no {UPLOAD_MECHANISM_KEY} upload mechanism"))?;
        Ok((http_request.upload_url, self.value.asset))
    }
}

// --- Post creation ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UgcPostBody {
    author: String,
    lifecycle_state: &'static str,
    specific_content: SpecificContent,
    visibility: VisibilityBody,
}

#[derive(Serialize)]
struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShareContent {
    share_commentary: TextValue,
    share_media_category: &'static str,
    media: Vec<ShareMedia>,
}

#[derive(Serialize)]
struct ShareMedia {
    status: &'static str,
    description: TextValue,
    media: String,
    title: TextValue,
}

#[derive(Serialize)]
struct TextValue {
    text: String,
}

#[derive(Serialize)]
struct VisibilityBody {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: &'static str,
}

impl UgcPostBody {
    pub fn image_share(post: &FeedPost, media_title: &str, media_description: &str) -> Self {
        Self {
            author: post.author().to_string(),
            lifecycle_state: "PUBLISHED",
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: TextValue {
                        text: post.caption_text().to_string(),
                    },
                    share_media_category: "IMAGE",
                    media: vec![ShareMedia {
                        status: "READY",
                        description: TextValue {
                            text: media_description.to_string(),
                        },
                        media: post.asset_reference().to_string(),
                        title: TextValue {
                            text: media_title.to_string(),
                        },
                    }],
                },
            },
            visibility: VisibilityBody {
                member_network_visibility: post.visibility().as_str(),
            },
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct UgcPostResponse {
    pub id: Option<String>,
}
