//! Shared HTTP error body.
//!
//! Every endpoint answers failures with `{code, message, details?}`.
//! Area handler modules own the domain-error-to-status mapping; the
//! conversion from [`SurveyError`] to a body lives here so the wire
//! shape stays uniform.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::domain::foundation::ErrorCode;
use crate::domain::survey::SurveyError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds the wire body for a domain error.
    ///
    /// Generation failures carry their retry diagnostics in `details`.
    pub fn from_error(err: &SurveyError) -> Self {
        let details = match err {
            SurveyError::GenerationFailed {
                attempts,
                last_error,
                raw_output,
            } => Some(json!({
                "attempts": attempts,
                "last_error": last_error,
                "raw_output": raw_output,
            })),
            SurveyError::ValidationFailed { field, .. } => Some(json!({ "field": field })),
            _ => None,
        };
        Self {
            code: err.code().to_string(),
            message: err.message(),
            details,
        }
    }
}

/// Status code for a domain error class.
pub fn status_for(err: &SurveyError) -> StatusCode {
    match err.code() {
        ErrorCode::ValidationFailed | ErrorCode::InvalidColor => StatusCode::BAD_REQUEST,
        ErrorCode::SurveyNotFound | ErrorCode::ResponseNotFound | ErrorCode::TrackingNotFound => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400_with_field_detail() {
        let err = SurveyError::validation("prompt", "Prompt is required");
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);

        let body = ErrorResponse::from_error(&err);
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(body.details.unwrap()["field"], "prompt");
    }

    #[test]
    fn not_found_classes_map_to_404() {
        assert_eq!(
            status_for(&SurveyError::survey_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&SurveyError::response_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&SurveyError::tracking_not_found("x")),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn generation_failures_carry_diagnostics() {
        let err = SurveyError::generation_failed(3, "too few questions", "1. only one");
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorResponse::from_error(&err);
        assert_eq!(body.code, "GENERATION_FAILED");
        let details = body.details.unwrap();
        assert_eq!(details["attempts"], 3);
        assert_eq!(details["last_error"], "too few questions");
        assert_eq!(details["raw_output"], "1. only one");
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        assert_eq!(
            status_for(&SurveyError::infrastructure("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&SurveyError::upstream("down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
