//! Error types for Postwright.
//!
//! Errors are organized by stage so the caller can tell which part of a
//! submission failed and still show the remote service's raw response.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Postwright operations.
#[derive(Error, Debug)]
pub enum PostwrightError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No access credential was supplied
    #[error("Please enter a valid LinkedIn access token.")]
    MissingCredential,

    /// Caption generation failed; nothing was published
    #[error("Caption generation failed: {0}")]
    Caption(#[from] CaptionError),

    /// One of the publish steps failed
    #[error("Failed to post on LinkedIn during {stage}: {0}", stage = .0.stage())]
    Publish(#[from] PublishError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// A required secret could not be resolved
    #[error("{0} is not set. Export it or add it to your .env file.")]
    MissingSecret(String),

    /// The HTTP client could not be built with the configured timeout
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Caption generation errors.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// No image bytes (or no image path) were supplied
    #[error("No image provided.")]
    MissingImage,

    /// The staged image could not be read
    #[error("Error reading image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generation service answered with a non-success status
    #[error("API Error {status}\n{body}")]
    Api { status: u16, body: String },

    /// The service answered 200 but without a usable candidate
    #[error("Unexpected generation response: {message}")]
    InvalidResponse { message: String },

    /// Connection-level failure before a response arrived
    #[error("Request failed: {message}")]
    Transport { message: String },

    /// No response within the configured timeout
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Broad failure category so callers can branch without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionErrorCategory {
    Input,
    Read,
    Api,
    Transport,
}

impl CaptionError {
    pub fn category(&self) -> CaptionErrorCategory {
        match self {
            CaptionError::MissingImage => CaptionErrorCategory::Input,
            CaptionError::ImageRead { .. } => CaptionErrorCategory::Read,
            CaptionError::Api { .. } | CaptionError::InvalidResponse { .. } => {
                CaptionErrorCategory::Api
            }
            CaptionError::Transport { .. } | CaptionError::Timeout { .. } => {
                CaptionErrorCategory::Transport
            }
        }
    }
}

/// The four steps of a feed publish, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStage {
    ResolveIdentity,
    RegisterUpload,
    UploadBinary,
    CreatePost,
}

impl fmt::Display for PublishStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStage::ResolveIdentity => write!(f, "identity lookup"),
            PublishStage::RegisterUpload => write!(f, "upload registration"),
            PublishStage::UploadBinary => write!(f, "image upload"),
            PublishStage::CreatePost => write!(f, "post creation"),
        }
    }
}

/// Feed publish errors, one variant per step.
///
/// `status` is `None` when the request never produced an HTTP response;
/// `body` then holds the transport error text.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Token rejected or identity endpoint unreachable
    #[error("Invalid or expired access token (status {}): {body}", fmt_status(.status))]
    IdentityAuth { status: Option<u16>, body: String },

    /// Upload registration failed
    #[error("Upload registration failed (status {}): {body}", fmt_status(.status))]
    UploadRegistration { status: Option<u16>, body: String },

    /// Binary upload to the registered URL failed
    #[error("Image upload failed (status {}): {body}", fmt_status(.status))]
    BinaryUpload { status: Option<u16>, body: String },

    /// Feed post creation failed
    #[error("Post creation failed (status {}): {body}", fmt_status(.status))]
    PostCreation { status: Option<u16>, body: String },
}

impl PublishError {
    /// The step that failed.
    pub fn stage(&self) -> PublishStage {
        match self {
            PublishError::IdentityAuth { .. } => PublishStage::ResolveIdentity,
            PublishError::UploadRegistration { .. } => PublishStage::RegisterUpload,
            PublishError::BinaryUpload { .. } => PublishStage::UploadBinary,
            PublishError::PostCreation { .. } => PublishStage::CreatePost,
        }
    }

    /// HTTP status returned by the remote platform, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PublishError::IdentityAuth { status, .. }
            | PublishError::UploadRegistration { status, .. }
            | PublishError::BinaryUpload { status, .. }
            | PublishError::PostCreation { status, .. } => *status,
        }
    }

    /// Raw diagnostic payload from the remote platform.
    pub fn body(&self) -> &str {
        match self {
            PublishError::IdentityAuth { body, .. }
            | PublishError::UploadRegistration { body, .. }
            | PublishError::BinaryUpload { body, .. }
            | PublishError::PostCreation { body, .. } => body,
        }
    }
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "none".to_string(), |s| s.to_string())
}

/// Convenience type alias for Postwright results.
pub type Result<T> = std::result::Result<T, PostwrightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_contains_status_and_body() {
        let err = CaptionError::Api {
            status: 403,
            body: r#"{"error":{"message":"API key not valid"}}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains(r#"{"error":{"message":"API key not valid"}}"#));
    }

    #[test]
    fn test_caption_error_categories() {
        assert_eq!(
            CaptionError::MissingImage.category(),
            CaptionErrorCategory::Input
        );
        let read = CaptionError::ImageRead {
            path: PathBuf::from("missing.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(read.category(), CaptionErrorCategory::Read);
        assert_eq!(
            CaptionError::Timeout { timeout_ms: 10 }.category(),
            CaptionErrorCategory::Transport
        );
        assert_eq!(
            CaptionError::InvalidResponse {
                message: "no candidates".into()
            }
            .category(),
            CaptionErrorCategory::Api
        );
    }

    #[test]
    fn test_publish_error_exposes_stage_and_body() {
        let err = PublishError::BinaryUpload {
            status: Some(500),
            body: "boom".to_string(),
        };
        assert_eq!(err.stage(), PublishStage::UploadBinary);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), "boom");
    }

    #[test]
    fn test_top_level_publish_message_names_stage() {
        let err: PostwrightError = PublishError::IdentityAuth {
            status: Some(401),
            body: "unauthorized".to_string(),
        }
        .into();
        let text = err.to_string();
        assert!(text.contains("identity lookup"));
        assert!(text.contains("401"));
    }

    #[test]
    fn test_question_mark_lifts_publish_error() {
        fn post() -> Result<()> {
            Err(PublishError::PostCreation {
                status: Some(422),
                body: "duplicate".to_string(),
            })?;
            Ok(())
        }

        let err = post().unwrap_err();
        assert!(matches!(err, PostwrightError::Publish(_)));
        assert_eq!(
            err.to_string(),
            "Failed to post on LinkedIn during post creation: \
             Post creation failed (status 422): duplicate"
        );
    }

    #[test]
    fn test_transport_failure_has_no_status() {
        let err = PublishError::UploadRegistration {
            status: None,
            body: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("status none"));
    }
}
