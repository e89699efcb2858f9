//! Shared HTTP client construction.

use crate::error::ConfigError;
use std::time::Duration;

/// Build a client whose every request is bounded by `timeout`.
///
/// A builder failure is returned rather than replaced by an unbounded
/// default client.
pub(crate) fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client, ConfigError> {
    if timeout.is_zero() {
        return Err(ConfigError::HttpClient(
            "request timeout must be greater than zero".to_string(),
        ));
    }

    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = client_with_timeout(Duration::ZERO).unwrap_err();
        assert!(matches!(err, ConfigError::HttpClient(_)));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_bounded_client_builds() {
        assert!(client_with_timeout(Duration::from_millis(250)).is_ok());
    }
}
