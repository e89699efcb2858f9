//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.caption.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "caption.endpoint must not be empty".into(),
            ));
        }
        if self.caption.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "caption.model must not be empty".into(),
            ));
        }
        if !self.caption.mime_type.starts_with("image/") {
            return Err(ConfigError::ValidationError(format!(
                "caption.mime_type must be an image type, got '{}'",
                self.caption.mime_type
            )));
        }
        if self.caption.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "caption.timeout_ms must be > 0".into(),
            ));
        }
        if self.publish.api_base.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "publish.api_base must not be empty".into(),
            ));
        }
        if self.publish.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "publish.timeout_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_caption_timeout() {
        let mut config = Config::default();
        config.caption.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("caption.timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_non_image_mime_type() {
        let mut config = Config::default();
        config.caption.mime_type = "video/mp4".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("mime_type"));
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = Config::default();
        config.publish.api_base = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("publish.api_base"));
    }
}
