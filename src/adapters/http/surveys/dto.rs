//! HTTP DTOs for survey endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::branching::BranchingOutcome;
use crate::domain::survey::Survey;

/// Request to generate a survey.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSurveyRequest {
    pub prompt: String,
    #[serde(default)]
    pub template_type: Option<String>,
    #[serde(default)]
    pub response_type: Option<String>,
    #[serde(default)]
    pub question_count: Option<u32>,
    #[serde(default)]
    pub theme: Option<serde_json::Value>,
}

/// Response for a generated survey.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSurveyResponse {
    pub survey_id: String,
    pub questions: serde_json::Value,
    pub template_type: String,
    pub theme: serde_json::Value,
    pub shareable_link: String,
    pub public_link: String,
}

impl GenerateSurveyResponse {
    pub fn from_survey(survey: &Survey) -> Self {
        Self {
            survey_id: survey.id().to_string(),
            questions: serde_json::to_value(survey.questions())
                .unwrap_or(serde_json::Value::Null),
            template_type: survey.template_type().to_string(),
            theme: serde_json::to_value(survey.theme()).unwrap_or(serde_json::Value::Null),
            shareable_link: survey.links().shareable_link.clone(),
            public_link: survey.links().public_link.clone(),
        }
    }
}

/// Query parameters for viewing a survey.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewSurveyQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Listing wrapper for all surveys.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyListResponse {
    pub surveys: Vec<serde_json::Value>,
}

/// Confirmation body for edits.
#[derive(Debug, Clone, Serialize)]
pub struct EditSurveyResponse {
    pub message: String,
}

/// Request for one branching step.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchingRequest {
    pub question_id: String,
    pub answer: serde_json::Value,
    #[serde(default)]
    pub current_visible_questions: Vec<String>,
}

/// Response for one branching step.
#[derive(Debug, Clone, Serialize)]
pub struct BranchingResponse {
    pub next_questions: Vec<String>,
    pub message: String,
    pub total_questions: usize,
    pub current_progress: usize,
}

impl From<BranchingOutcome> for BranchingResponse {
    fn from(outcome: BranchingOutcome) -> Self {
        Self {
            next_questions: outcome
                .next_questions
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            message: outcome.message,
            total_questions: outcome.total_questions,
            current_progress: outcome.current_progress,
        }
    }
}
