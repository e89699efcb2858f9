//! Configuration management for Postwright.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Secrets are referenced as `${ENV_VAR}` and resolved at the edge
//! with [`resolve_env_var`], never inside the caption or publish code.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Postwright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Caption generation service settings
    pub caption: CaptionConfig,

    /// LinkedIn publish settings
    pub publish: PublishConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path (`~` is expanded).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&path_str).into_owned());
        let content = std::fs::read_to_string(expanded)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.postwright.postwright/config.toml
    /// - Linux: ~/.config/postwright/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\postwright\config\config.toml
    ///
    /// Falls back to ~/.postwright/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "postwright", "postwright")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = shellexpand::tilde("~").into_owned();
                PathBuf::from(home).join(".postwright").join("config.toml")
            })
    }

    /// Copy of the config safe to print: literal secrets are masked,
    /// `${ENV_VAR}` references are kept as written.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        let key = &config.caption.api_key;
        if !key.is_empty() && env_reference(key).is_none() {
            config.caption.api_key = SECRET_MASK.to_string();
        }
        config
    }

    /// Names of `${ENV_VAR}` secret references that do not resolve.
    pub fn unset_secrets(&self) -> Vec<String> {
        [self.caption.api_key.as_str()]
            .into_iter()
            .filter_map(|value| env_reference(value).map(|name| (value, name)))
            .filter(|(value, _)| resolve_env_var(value).is_none())
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Printed in place of a literal secret.
pub const SECRET_MASK: &str = "********";

fn env_reference(value: &str) -> Option<&str> {
    value.strip_prefix("${").and_then(|v| v.strip_suffix('}'))
}

/// Resolve `${ENV_VAR}` references in config strings.
///
/// Plain values pass through; empty values and unset variables yield `None`.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if let Some(var_name) = env_reference(value) {
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve a secret or report which variable is missing.
pub fn require_secret(value: &str) -> Result<String, ConfigError> {
    resolve_env_var(value).ok_or_else(|| {
        ConfigError::MissingSecret(env_reference(value).unwrap_or("secret").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.caption.model, "gemini-1.5-flash");
        assert_eq!(config.caption.mime_type, "image/jpeg");
        assert_eq!(config.publish.protocol_version, "2.0.0");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[caption]"));
        assert!(toml.contains("[publish]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[caption]\nmodel = \"gemini-2.0-flash\"\ntimeout_ms = 5000").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.caption.model, "gemini-2.0-flash");
        assert_eq!(config.caption.timeout_ms, 5000);
        assert_eq!(config.caption.mime_type, "image/jpeg");
        assert_eq!(config.publish.api_base, "https://api.linkedin.com/v2");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[publish]\ntimeout_ms = 0").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("publish.timeout_ms"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[caption\nmodel = ").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_resolve_env_var() {
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        assert_eq!(resolve_env_var(""), None);
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_POSTWRIGHT_42}"), None);
    }

    #[test]
    fn test_require_secret_names_missing_variable() {
        let err = require_secret("${DEFINITELY_NOT_SET_POSTWRIGHT_42}").unwrap_err();
        assert!(err.to_string().contains("DEFINITELY_NOT_SET_POSTWRIGHT_42"));
    }

    #[test]
    fn test_redacted_masks_literal_api_key() {
        let mut config = Config::default();
        config.caption.api_key = "AIzaSy-literal-key".to_string();

        let toml = config.redacted().to_toml().unwrap();
        assert!(!toml.contains("AIzaSy-literal-key"));
        assert!(toml.contains(SECRET_MASK));
        assert_eq!(config.caption.api_key, "AIzaSy-literal-key");
    }

    #[test]
    fn test_redacted_keeps_env_reference() {
        let config = Config::default().redacted();
        assert_eq!(config.caption.api_key, "${GEMINI_API_KEY}");
    }

    #[test]
    fn test_unset_secrets_lists_unresolved_references() {
        let mut config = Config::default();
        config.caption.api_key = "${DEFINITELY_NOT_SET_POSTWRIGHT_42}".to_string();
        assert_eq!(
            config.unset_secrets(),
            vec!["DEFINITELY_NOT_SET_POSTWRIGHT_42".to_string()]
        );

        config.caption.api_key = "${PATH}".to_string();
        assert!(config.unset_secrets().is_empty());

        config.caption.api_key = "literal".to_string();
        assert!(config.unset_secrets().is_empty());
    }
}
