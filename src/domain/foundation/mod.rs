//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier value objects, timestamp wrapper, and error types
//! that form the vocabulary of the Survey Loom domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuestionId, ResponseId, SurveyId, TrackingId};
pub use timestamp::Timestamp;
