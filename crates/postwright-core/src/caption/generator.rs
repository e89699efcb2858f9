//! Caption generator: input checks and prompt rendering around a provider.

use super::prompt::build_prompt;
use super::provider::{CaptionProvider, CaptionRequest, ImageInput};
use crate::error::CaptionError;
use std::path::Path;

/// Produces one caption per call. Never retries.
pub struct CaptionGenerator {
    provider: Box<dyn CaptionProvider>,
    mime_type: String,
}

impl CaptionGenerator {
    pub fn new(provider: Box<dyn CaptionProvider>, mime_type: &str) -> Self {
        Self {
            provider,
            mime_type: mime_type.to_string(),
        }
    }

    /// MIME type attached to every image this generator sends.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Generate a caption for `image_bytes`, using `prompt_text` as image context.
    ///
    /// Empty image bytes fail with [`CaptionError::MissingImage`] before the
    /// provider is contacted.
    pub async fn generate(
        &self,
        prompt_text: &str,
        image_bytes: &[u8],
    ) -> Result<String, CaptionError> {
        if image_bytes.is_empty() {
            return Err(CaptionError::MissingImage);
        }

        let request = CaptionRequest::new(
            build_prompt(prompt_text),
            ImageInput::from_bytes(image_bytes, &self.mime_type),
        );

        tracing::info!(
            provider = self.provider.name(),
            image_bytes = image_bytes.len(),
            timeout_ms = self.provider.timeout().as_millis() as u64,
            "Generating caption"
        );

        match self.provider.generate(&request).await {
            Ok(caption) => {
                tracing::info!(chars = caption.chars().count(), "Caption generated");
                Ok(caption)
            }
            Err(e) => {
                tracing::warn!("Caption generation failed: {e}");
                Err(e)
            }
        }
    }

    /// Read a staged image from disk and generate a caption for it.
    pub async fn generate_from_file(
        &self,
        prompt_text: &str,
        image_path: Option<&Path>,
    ) -> Result<String, CaptionError> {
        let bytes = read_image(image_path).await?;
        self.generate(prompt_text, &bytes).await
    }
}

/// Read a staged image. A missing or empty path means no image was uploaded.
pub async fn read_image(image_path: Option<&Path>) -> Result<Vec<u8>, CaptionError> {
    let path = match image_path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(CaptionError::MissingImage),
    };

    tokio::fs::read(path)
        .await
        .map_err(|source| CaptionError::ImageRead {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CaptionErrorCategory;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Provider double that records calls and replays a fixed outcome.
    pub(crate) struct FakeProvider {
        pub calls: Arc<AtomicUsize>,
        pub last_prompt: Arc<Mutex<Option<String>>>,
        pub reply: Result<String, (u16, String)>,
    }

    impl FakeProvider {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                last_prompt: Arc::new(Mutex::new(None)),
                reply: Ok(text.to_string()),
            }
        }

        pub(crate) fn failing(status: u16, body: &str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                last_prompt: Arc::new(Mutex::new(None)),
                reply: Err((status, body.to_string())),
            }
        }
    }

    #[async_trait]
    impl CaptionProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        async fn generate(&self, request: &CaptionRequest) -> Result<String, CaptionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(request.prompt_text().to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, body)) => Err(CaptionError::Api {
                    status: *status,
                    body: body.clone(),
                }),
            }
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(1)
        }
    }

    #[tokio::test]
    async fn test_empty_image_never_reaches_provider() {
        let fake = FakeProvider::replying("unused");
        let calls = fake.calls.clone();
        let generator = CaptionGenerator::new(Box::new(fake), "image/jpeg");

        let err = generator.generate("career growth", &[]).await.unwrap_err();
        assert!(matches!(err, CaptionError::MissingImage));
        assert_eq!(err.to_string(), "No image provided.");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_prompt_is_embedded_in_template() {
        let fake = FakeProvider::replying("Stay curious. #Growth #Career");
        let last_prompt = fake.last_prompt.clone();
        let generator = CaptionGenerator::new(Box::new(fake), "image/jpeg");

        let caption = generator
            .generate("career growth", &[0xFF, 0xD8, 0xFF])
            .await
            .unwrap();
        assert_eq!(caption, "Stay curious. #Growth #Career");
        assert_eq!(
            last_prompt.lock().unwrap().as_deref(),
            Some(build_prompt("career growth").as_str())
        );
    }

    #[tokio::test]
    async fn test_provider_error_passes_through() {
        let generator =
            CaptionGenerator::new(Box::new(FakeProvider::failing(500, "internal")), "image/jpeg");

        let err = generator.generate("x", &[1, 2, 3]).await.unwrap_err();
        assert_eq!(err.category(), CaptionErrorCategory::Api);
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("internal"));
    }

    #[tokio::test]
    async fn test_generate_from_file_without_path_is_missing_image() {
        let fake = FakeProvider::replying("unused");
        let calls = fake.calls.clone();
        let generator = CaptionGenerator::new(Box::new(fake), "image/jpeg");

        let err = generator.generate_from_file("x", None).await.unwrap_err();
        assert!(matches!(err, CaptionError::MissingImage));

        let err = generator
            .generate_from_file("x", Some(Path::new("")))
            .await
            .unwrap_err();
        assert!(matches!(err, CaptionError::MissingImage));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_from_file_unreadable_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jpg");
        let generator =
            CaptionGenerator::new(Box::new(FakeProvider::replying("unused")), "image/jpeg");

        let err = generator
            .generate_from_file("x", Some(missing.as_path()))
            .await
            .unwrap_err();
        assert_eq!(err.category(), CaptionErrorCategory::Read);
        assert!(err.to_string().contains("nope.jpg"));
    }

    #[tokio::test]
    async fn test_generate_from_file_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        let fake = FakeProvider::replying("From disk #Growth");
        let calls = fake.calls.clone();
        let generator = CaptionGenerator::new(Box::new(fake), "image/jpeg");

        let caption = generator
            .generate_from_file("desk setup", Some(file.path()))
            .await
            .unwrap();
        assert_eq!(caption, "From disk #Growth");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_file_is_missing_image() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let generator =
            CaptionGenerator::new(Box::new(FakeProvider::replying("unused")), "image/jpeg");

        let err = generator
            .generate_from_file("x", Some(file.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, CaptionError::MissingImage));
    }
}
