//! Partner network configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Partner forwarding configuration (SurveyTitans)
///
/// Forwarding is best-effort and can be disabled entirely; when enabled
/// both endpoint URLs must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerConfig {
    /// Whether outbound partner calls are made at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Completion-ping endpoint (GET, username appended as a query param)
    #[serde(default = "default_completion_url")]
    pub completion_url: String,

    /// Response-push endpoint (POST with sid/responses/email)
    #[serde(default = "default_track_url")]
    pub track_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PartnerConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate partner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if !self.completion_url.starts_with("http") {
            return Err(ValidationError::InvalidPartnerUrl("completion_url"));
        }
        if !self.track_url.starts_with("http") {
            return Err(ValidationError::InvalidPartnerUrl("track_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            completion_url: default_completion_url(),
            track_url: default_track_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_completion_url() -> String {
    "https://surveytitans.com/spb/8da25a1e059f422ce141624517dd10a0".to_string()
}

fn default_track_url() -> String {
    "https://surveytitans.com/track".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_config_defaults() {
        let config = PartnerConfig::default();
        assert!(config.enabled);
        assert!(config.completion_url.starts_with("https://surveytitans.com"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_bad_url() {
        let config = PartnerConfig {
            completion_url: "not-a-url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_skips_url_validation() {
        let config = PartnerConfig {
            enabled: false,
            completion_url: String::new(),
            track_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
