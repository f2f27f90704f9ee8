//! Text generator port - interface for the generation model.
//!
//! Abstracts the model provider behind a prompt-in, text-out call. The
//! model's output is free-form; validating and structuring it is the
//! caller's job. Empty output is returned as-is, not treated as an
//! error here.

use async_trait::async_trait;
use serde::Serialize;

/// Port for text-generation model calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt in a single round trip.
    ///
    /// # Errors
    ///
    /// - `AuthenticationFailed` if the provider rejects the API key
    /// - `Unavailable` / `Network` / `Timeout` on transport problems
    /// - `Parse` if the provider response cannot be decoded
    async fn generate(&self, prompt: &str, sampling: &SamplingConfig)
        -> Result<String, GeneratorError>;

    /// Provider name and model identifier, for logs.
    fn generator_info(&self) -> GeneratorInfo;
}

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

impl SamplingConfig {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Provider identification for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub model: String,
}

impl GeneratorInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        GeneratorInfo {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Text generator errors.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GeneratorError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sampling_matches_generation_settings() {
        let sampling = SamplingConfig::default();
        assert_eq!(sampling.temperature, 0.7);
        assert_eq!(sampling.top_p, 0.8);
        assert_eq!(sampling.top_k, 40);
        assert_eq!(sampling.max_output_tokens, 1024);
    }

    #[test]
    fn sampling_builder_overrides_fields() {
        let sampling = SamplingConfig::default()
            .with_temperature(0.2)
            .with_max_output_tokens(2048);
        assert_eq!(sampling.temperature, 0.2);
        assert_eq!(sampling.max_output_tokens, 2048);
        assert_eq!(sampling.top_k, 40);
    }

    #[test]
    fn generator_errors_display_details() {
        let err = GeneratorError::unavailable("503 from upstream");
        assert_eq!(err.to_string(), "provider unavailable: 503 from upstream");

        let err = GeneratorError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "request timed out after 30s");

        let err = GeneratorError::AuthenticationFailed;
        assert_eq!(err.to_string(), "authentication failed");
    }
}
