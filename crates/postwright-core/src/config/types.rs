//! Sub-configuration structs with defaults for the hosted services.

use serde::{Deserialize, Serialize};

/// Caption generation (Gemini `generateContent`) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Base URL of the generation API, without the `/models/...` suffix
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// MIME type sent with the image. Not sniffed from the file.
    pub mime_type: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: "${GEMINI_API_KEY}".to_string(),
            mime_type: "image/jpeg".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// LinkedIn publish settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Base URL of the LinkedIn v2 API
    pub api_base: String,

    /// Value of the `X-Restli-Protocol-Version` header
    pub protocol_version: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Title attached to the shared image
    pub media_title: String,

    /// Description attached to the shared image
    pub media_description: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.linkedin.com/v2".to_string(),
            protocol_version: "2.0.0".to_string(),
            timeout_ms: 30_000,
            media_title: "Shared with Postwright".to_string(),
            media_description: "This image was uploaded via LinkedIn API".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
