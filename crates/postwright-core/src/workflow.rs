//! End-to-end submission: caption the image, then publish it.

use crate::caption::{read_image, CaptionGenerator, GeminiProvider};
use crate::config::Config;
use crate::error::{PostwrightError, Result};
use crate::publish::{FeedPublisher, PublishOutcome, UserIdentity};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One form submission: who is posting, what the image is about, and where it is staged.
#[derive(Debug, Clone)]
pub struct Submission {
    pub credential: String,
    pub prompt: String,
    pub image_path: Option<PathBuf>,
}

/// What a successful submission produced.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    pub caption: String,
    pub identity: UserIdentity,
    pub outcome: PublishOutcome,
}

/// Caption generator and feed publisher wired together.
pub struct Postwright {
    generator: CaptionGenerator,
    publisher: FeedPublisher,
}

impl Postwright {
    pub fn new(generator: CaptionGenerator, publisher: FeedPublisher) -> Self {
        Self {
            generator,
            publisher,
        }
    }

    /// Build the Gemini-backed pipeline. `api_key` must already be resolved.
    pub fn from_config(config: &Config, api_key: &str) -> Result<Self> {
        let provider = GeminiProvider::new(
            &config.caption.endpoint,
            &config.caption.model,
            api_key,
            Duration::from_millis(config.caption.timeout_ms),
        )?;
        Ok(Self::new(
            CaptionGenerator::new(Box::new(provider), &config.caption.mime_type),
            FeedPublisher::new(&config.publish)?,
        ))
    }

    pub fn generator(&self) -> &CaptionGenerator {
        &self.generator
    }

    /// Generate a caption without publishing anything.
    pub async fn caption_only(&self, prompt: &str, image_path: Option<&Path>) -> Result<String> {
        Ok(self
            .generator
            .generate_from_file(prompt.trim(), image_path)
            .await?)
    }

    /// Caption the staged image and publish it to the token owner's feed.
    ///
    /// A caption failure aborts the submission so error text is never posted.
    pub async fn submit(&self, submission: &Submission) -> Result<SubmissionReport> {
        let credential = non_empty_credential(&submission.credential)?;
        let prompt = submission.prompt.trim();

        // Read once; the same bytes go to the caption service and the upload.
        let image = read_image(submission.image_path.as_deref()).await?;
        let caption = self.generator.generate(prompt, &image).await?;

        let identity = self.publisher.resolve_identity(credential).await?;
        let outcome = self
            .publisher
            .publish_as(
                credential,
                &identity,
                &image,
                self.generator.mime_type(),
                &caption,
            )
            .await?;

        tracing::info!(
            post_id = outcome.post_id.as_deref().unwrap_or("unknown"),
            "Submission published"
        );
        Ok(SubmissionReport {
            caption,
            identity,
            outcome,
        })
    }
}

fn non_empty_credential(credential: &str) -> Result<&str> {
    let credential = credential.trim();
    if credential.is_empty() {
        return Err(PostwrightError::MissingCredential);
    }
    Ok(credential)
}
