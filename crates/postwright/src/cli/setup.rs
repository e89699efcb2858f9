//! Shared setup: config loading, CLI overrides and secret resolution.

use postwright_core::config::{require_secret, Config};
use postwright_core::Postwright;

/// Load config and apply a MIME type override from the command line.
pub fn load_config(mime_type: Option<&str>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;

    if let Some(mime_type) = mime_type {
        if !mime_type.starts_with("image/") {
            anyhow::bail!(
                "Unsupported MIME type: {mime_type}\n\n  Hint: Only image types such as image/jpeg or image/png can be shared."
            );
        }
        config.caption.mime_type = mime_type.to_string();
    }

    Ok(config)
}

/// Build the caption + publish pipeline, resolving the Gemini API key.
pub fn build_pipeline(config: &Config) -> anyhow::Result<Postwright> {
    let api_key = require_secret(&config.caption.api_key)?;
    tracing::debug!(
        model = %config.caption.model,
        mime_type = %config.caption.mime_type,
        "Caption provider configured"
    );
    Ok(Postwright::from_config(config, &api_key)?)
}

/// Reject a missing or blank access token before any network call.
pub fn require_token(token: Option<String>) -> anyhow::Result<String> {
    match token.map(|t| t.trim().to_string()) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => anyhow::bail!(
            "Please provide a valid LinkedIn access token.\n\n  Hint: Pass --token or set LINKEDIN_ACCESS_TOKEN (a .env file works too)."
        ),
    }
}
