//! Caption provider trait and request types.

use crate::error::CaptionError;
use async_trait::async_trait;
use base64::Engine;
use std::time::Duration;

/// Base64-encoded image ready to send to a generation API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub mime_type: String,
}

impl ImageInput {
    /// Encode raw bytes with the configured MIME type. No content sniffing.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
        }
    }
}

/// A single-turn caption request: rendered prompt plus the image.
#[derive(Debug, Clone)]
pub struct CaptionRequest {
    prompt_text: String,
    image: ImageInput,
}

impl CaptionRequest {
    pub fn new(prompt_text: String, image: ImageInput) -> Self {
        Self { prompt_text, image }
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn image(&self) -> &ImageInput {
        &self.image
    }
}

/// Trait that caption backends implement.
///
/// Uses `async_trait` so the generator can hold a `Box<dyn CaptionProvider>`.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// Provider name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Make exactly one generation call and return the first candidate text.
    async fn generate(&self, request: &CaptionRequest) -> Result<String, CaptionError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}
