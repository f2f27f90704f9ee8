//! Mock text generator for testing.
//!
//! Provides a configurable mock implementation of the TextGenerator
//! port, allowing tests to run without calling the real Gemini API.
//!
//! # Features
//!
//! - Pre-configured outputs consumed in order
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_text("1. How satisfied are you? (Rating)");
//!
//! let text = generator.generate("prompt", &SamplingConfig::default()).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GeneratorError, GeneratorInfo, SamplingConfig, TextGenerator};

/// Mock text generator for testing.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    /// Pre-configured outputs (consumed in order).
    outputs: Arc<Mutex<VecDeque<MockGeneration>>>,
    /// Generator info to return.
    info: GeneratorInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// One recorded generate call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub sampling: SamplingConfig,
}

/// A configured mock output.
#[derive(Debug, Clone)]
pub enum MockGeneration {
    /// Return this text.
    Text(String),
    /// Return an error.
    Error(MockGeneratorError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockGeneratorError {
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockGeneratorError> for GeneratorError {
    fn from(err: MockGeneratorError) -> Self {
        match err {
            MockGeneratorError::Unavailable { message } => GeneratorError::unavailable(message),
            MockGeneratorError::AuthenticationFailed => GeneratorError::AuthenticationFailed,
            MockGeneratorError::Network { message } => GeneratorError::network(message),
            MockGeneratorError::Timeout { timeout_secs } => GeneratorError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTextGenerator {
    /// Creates a new mock generator with default settings.
    pub fn new() -> Self {
        Self {
            outputs: Arc::new(Mutex::new(VecDeque::new())),
            info: GeneratorInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a text output to the queue.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let mut outputs = self.outputs.lock().unwrap();
        outputs.push_back(MockGeneration::Text(text.into()));
        drop(outputs);
        self
    }

    /// Adds an error output to the queue.
    pub fn with_error(self, error: MockGeneratorError) -> Self {
        let mut outputs = self.outputs.lock().unwrap();
        outputs.push_back(MockGeneration::Error(error));
        drop(outputs);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Gets the next output or a default.
    fn next_output(&self) -> MockGeneration {
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockGeneration::Text("Mock response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, GeneratorError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            sampling: *sampling,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_output() {
            MockGeneration::Text(text) => Ok(text),
            MockGeneration::Error(err) => Err(err.into()),
        }
    }

    fn generator_info(&self) -> GeneratorInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_outputs_in_order() {
        let generator = MockTextGenerator::new()
            .with_text("First")
            .with_text("Second");

        let sampling = SamplingConfig::default();
        assert_eq!(generator.generate("p", &sampling).await.unwrap(), "First");
        assert_eq!(generator.generate("p", &sampling).await.unwrap(), "Second");
    }

    #[tokio::test]
    async fn returns_default_after_exhausted() {
        let generator = MockTextGenerator::new().with_text("Only one");

        let sampling = SamplingConfig::default();
        generator.generate("p", &sampling).await.unwrap();
        let text = generator.generate("p", &sampling).await.unwrap();
        assert_eq!(text, "Mock response");
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let generator = MockTextGenerator::new().with_error(MockGeneratorError::Unavailable {
            message: "down".to_string(),
        });

        let result = generator.generate("p", &SamplingConfig::default()).await;
        assert!(matches!(result, Err(GeneratorError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn records_prompts_and_sampling() {
        let generator = MockTextGenerator::new().with_text("ok");

        let sampling = SamplingConfig::default().with_temperature(0.3);
        generator.generate("the prompt", &sampling).await.unwrap();

        assert_eq!(generator.call_count(), 1);
        let calls = generator.get_calls();
        assert_eq!(calls[0].prompt, "the prompt");
        assert_eq!(calls[0].sampling.temperature, 0.3);
    }

    #[tokio::test]
    async fn respects_delay() {
        let generator = MockTextGenerator::new()
            .with_text("slow")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        generator
            .generate("p", &SamplingConfig::default())
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
