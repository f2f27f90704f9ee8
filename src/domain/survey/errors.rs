//! Survey-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while turning model output into questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The model returned nothing to parse.
    #[error("Empty response text received")]
    EmptyText,

    /// Every candidate question was filtered out.
    #[error("No valid questions were parsed from the response")]
    NoValidQuestions,
}

/// Survey-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// Caller-supplied data failed validation.
    ValidationFailed { field: String, message: String },
    /// A theme color failed hex validation.
    InvalidColor(String),
    /// Model output could not be parsed into questions.
    Parse(ParseError),
    /// Survey lookup missed.
    SurveyNotFound(String),
    /// Response lookup missed.
    ResponseNotFound(String),
    /// Tracking record lookup missed.
    TrackingNotFound(String),
    /// A question id was not present in the survey.
    QuestionNotFound(String),
    /// The retry budget was exhausted without a usable survey.
    GenerationFailed {
        attempts: u32,
        last_error: String,
        raw_output: String,
    },
    /// The model provider failed.
    Upstream(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl SurveyError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn invalid_color(value: impl Into<String>) -> Self {
        SurveyError::InvalidColor(value.into())
    }
    pub fn survey_not_found(id: impl Into<String>) -> Self {
        SurveyError::SurveyNotFound(id.into())
    }
    pub fn response_not_found(id: impl Into<String>) -> Self {
        SurveyError::ResponseNotFound(id.into())
    }
    pub fn tracking_not_found(id: impl Into<String>) -> Self {
        SurveyError::TrackingNotFound(id.into())
    }
    pub fn question_not_found(id: impl Into<String>) -> Self {
        SurveyError::QuestionNotFound(id.into())
    }
    pub fn generation_failed(
        attempts: u32,
        last_error: impl Into<String>,
        raw_output: impl Into<String>,
    ) -> Self {
        SurveyError::GenerationFailed {
            attempts,
            last_error: last_error.into(),
            raw_output: raw_output.into(),
        }
    }
    pub fn upstream(message: impl Into<String>) -> Self {
        SurveyError::Upstream(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SurveyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SurveyError::InvalidColor(_) => ErrorCode::InvalidColor,
            SurveyError::Parse(_) => ErrorCode::ParseFailed,
            SurveyError::SurveyNotFound(_) => ErrorCode::SurveyNotFound,
            SurveyError::ResponseNotFound(_) => ErrorCode::ResponseNotFound,
            SurveyError::TrackingNotFound(_) => ErrorCode::TrackingNotFound,
            SurveyError::QuestionNotFound(_) => ErrorCode::SurveyNotFound,
            SurveyError::GenerationFailed { .. } => ErrorCode::GenerationFailed,
            SurveyError::Upstream(_) => ErrorCode::UpstreamError,
            SurveyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SurveyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SurveyError::InvalidColor(value) => format!("Invalid hex color code: {}", value),
            SurveyError::Parse(err) => err.to_string(),
            SurveyError::SurveyNotFound(_) => "Survey not found".to_string(),
            SurveyError::ResponseNotFound(_) => "No matching pending survey found".to_string(),
            SurveyError::TrackingNotFound(id) => format!("Tracking record not found: {}", id),
            SurveyError::QuestionNotFound(_) => "Question not found".to_string(),
            SurveyError::GenerationFailed {
                attempts,
                last_error,
                ..
            } => format!("Failed after {} attempts: {}", attempts, last_error),
            SurveyError::Upstream(msg) => format!("Model provider error: {}", msg),
            SurveyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SurveyError {}

impl From<ParseError> for SurveyError {
    fn from(err: ParseError) -> Self {
        SurveyError::Parse(err)
    }
}

impl From<ValidationError> for SurveyError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        SurveyError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SurveyError {
    fn from(err: DomainError) -> Self {
        let id = err.details.get("id").cloned().unwrap_or_default();
        match err.code {
            ErrorCode::SurveyNotFound => SurveyError::SurveyNotFound(id),
            ErrorCode::ResponseNotFound => SurveyError::ResponseNotFound(id),
            ErrorCode::TrackingNotFound => SurveyError::TrackingNotFound(id),
            ErrorCode::ValidationFailed => SurveyError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            ErrorCode::UpstreamError => SurveyError::Upstream(err.message),
            _ => SurveyError::Infrastructure(err.message),
        }
    }
}
