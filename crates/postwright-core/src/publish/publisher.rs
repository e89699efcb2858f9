//! Feed publisher for the LinkedIn v2 API.

use super::types::{FeedPost, PublishOutcome, UploadSession, UploadedAsset, UserIdentity};
use super::wire::{
    RegisterUploadBody, RegisterUploadResponse, UgcPostBody, UgcPostResponse, UserInfoResponse,
};
use crate::config::PublishConfig;
use crate::error::{ConfigError, PublishError};
use crate::http::client_with_timeout;
use reqwest::StatusCode;
use std::time::Duration;

/// Publishes an image and caption to the feed of the token's owner.
///
/// Every call is a remote mutation and nothing is retried or resumed.
/// Running `publish` twice registers two uploads and creates two posts.
pub struct FeedPublisher {
    api_base: String,
    protocol_version: String,
    media_title: String,
    media_description: String,
    client: reqwest::Client,
}

impl FeedPublisher {
    pub fn new(config: &PublishConfig) -> Result<Self, ConfigError> {
        let client = client_with_timeout(Duration::from_millis(config.timeout_ms))?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            protocol_version: config.protocol_version.clone(),
            media_title: config.media_title.clone(),
            media_description: config.media_description.clone(),
            client,
        })
    }

    /// Resolve, register, upload, post. Stops at the first failing step.
    pub async fn publish(
        &self,
        credential: &str,
        image_bytes: &[u8],
        mime_type: &str,
        caption_text: &str,
    ) -> Result<PublishOutcome, PublishError> {
        let identity = self.resolve_identity(credential).await?;
        self.publish_as(credential, &identity, image_bytes, mime_type, caption_text)
            .await
    }

    /// Run the three-step upload protocol for an already resolved identity.
    pub async fn publish_as(
        &self,
        credential: &str,
        identity: &UserIdentity,
        image_bytes: &[u8],
        mime_type: &str,
        caption_text: &str,
    ) -> Result<PublishOutcome, PublishError> {
        let session = self.register_upload(credential, identity).await?;
        let asset = self
            .upload_binary(credential, session, image_bytes, mime_type)
            .await?;
        let post = FeedPost::new(identity, &asset, caption_text);
        self.create_post(credential, &post).await
    }

    /// Look up the member behind `credential`.
    pub async fn resolve_identity(&self, credential: &str) -> Result<UserIdentity, PublishError> {
        tracing::info!("Fetching LinkedIn user info");

        let resp = self
            .client
            .get(format!("{}/userinfo", self.api_base))
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| PublishError::IdentityAuth {
                status: None,
                body: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "User info request rejected");
            tracing::debug!("User info error body: {body}");
            return Err(PublishError::IdentityAuth {
                status: Some(status.as_u16()),
                body,
            });
        }

        let info: UserInfoResponse =
            serde_json::from_str(&body).map_err(|e| PublishError::IdentityAuth {
                status: Some(status.as_u16()),
                body: format!("unparseable user info ({e}): {body}"),
            })?;

        tracing::info!("User info received");
        Ok(UserIdentity {
            subject_id: info.sub,
            name: info.name,
            email: info.email,
        })
    }

    /// Register a feed-image upload owned by `identity`.
    pub async fn register_upload(
        &self,
        credential: &str,
        identity: &UserIdentity,
    ) -> Result<UploadSession, PublishError> {
        tracing::info!("Registering image upload");

        let resp = self
            .client
            .post(format!("{}/assets", self.api_base))
            .query(&[("action", "registerUpload")])
            .bearer_auth(credential)
            .header("X-Restli-Protocol-Version", &self.protocol_version)
            .json(&RegisterUploadBody::feed_image(identity.person_urn()))
            .send()
            .await
            .map_err(|e| PublishError::UploadRegistration {
                status: None,
                body: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Upload registration failed: {body}");
            return Err(PublishError::UploadRegistration {
                status: Some(status.as_u16()),
                body,
            });
        }

        let parsed: RegisterUploadResponse = serde_json::from_str(&body).map_err(|e| {
            PublishError::UploadRegistration {
                status: Some(status.as_u16()),
                body: format!("unparseable registration ({e}): {body}"),
            }
        })?;
        let (upload_url, asset_reference) =
            parsed
                .into_parts()
                .map_err(|message| PublishError::UploadRegistration {
                    status: Some(status.as_u16()),
                    body: format!("{message}: {body}"),
                })?;

        tracing::info!(asset = %asset_reference, "Upload URL received");
        Ok(UploadSession {
            upload_url,
            asset_reference,
        })
    }

    /// PUT the raw image to the session's upload URL.
    ///
    /// On failure the session is simply dropped; LinkedIn expires unused
    /// registrations on its own.
    pub async fn upload_binary(
        &self,
        credential: &str,
        session: UploadSession,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<UploadedAsset, PublishError> {
        tracing::info!(bytes = image_bytes.len(), "Uploading image");

        let resp = self
            .client
            .put(&session.upload_url)
            .bearer_auth(credential)
            .header("Content-Type", mime_type)
            .body(image_bytes.to_vec())
            .send()
            .await
            .map_err(|e| PublishError::BinaryUpload {
                status: None,
                body: e.to_string(),
            })?;

        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                asset = %session.asset_reference,
                "Image upload failed: {body}"
            );
            return Err(PublishError::BinaryUpload {
                status: Some(status.as_u16()),
                body,
            });
        }

        tracing::info!("Image uploaded successfully");
        Ok(UploadedAsset::confirmed(session))
    }

    /// Create the feed post.
    pub async fn create_post(
        &self,
        credential: &str,
        post: &FeedPost,
    ) -> Result<PublishOutcome, PublishError> {
        tracing::info!("Publishing LinkedIn post");

        let resp = self
            .client
            .post(format!("{}/ugcPosts", self.api_base))
            .bearer_auth(credential)
            .header("X-Restli-Protocol-Version", &self.protocol_version)
            .json(&UgcPostBody::image_share(
                post,
                &self.media_title,
                &self.media_description,
            ))
            .send()
            .await
            .map_err(|e| PublishError::PostCreation {
                status: None,
                body: e.to_string(),
            })?;

        let status = resp.status();
        let header_id = resp
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await.unwrap_or_default();

        tracing::info!(status = status.as_u16(), "Post status");
        tracing::debug!("Post response: {body}");

        if !status.is_success() {
            return Err(PublishError::PostCreation {
                status: Some(status.as_u16()),
                body,
            });
        }

        let post_id = header_id.or_else(|| {
            serde_json::from_str::<UgcPostResponse>(&body)
                .ok()
                .and_then(|r| r.id)
        });

        Ok(PublishOutcome {
            status: status.as_u16(),
            post_id,
            asset_reference: post.asset_reference().to_string(),
            body,
        })
    }
}
