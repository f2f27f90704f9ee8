//! Text Generator Adapters.
//!
//! Implementations of the TextGenerator port.
//!
//! ## Available Adapters
//!
//! - `GeminiGenerator` - Google Gemini models via the Generative Language API
//! - `MockTextGenerator` - Configurable mock for testing

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiGenerator};
pub use mock::{MockGeneration, MockGeneratorError, MockTextGenerator, RecordedCall};
