//! Respondent submissions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResponseId, Timestamp};

/// Status written at submission time.
pub const STATUS_SUBMITTED: &str = "submitted";
/// Status a partner postback looks for before claiming a response.
pub const STATUS_PENDING: &str = "pending";

/// A respondent's answers to one survey.
///
/// `survey_id` echoes the identifier the caller submitted against; the
/// survey itself may have been looked up by either its primary or its
/// embedded id. Status starts as `submitted` and may later be merged
/// over by partner postback data, so it stays a free-form string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    id: ResponseId,
    survey_id: String,
    responses: serde_json::Map<String, serde_json::Value>,
    submitted_at: Timestamp,
    is_public: bool,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tracking_id: Option<String>,
}

impl SurveyResponse {
    pub fn new(
        survey_id: impl Into<String>,
        responses: serde_json::Map<String, serde_json::Value>,
        email: Option<String>,
        username: Option<String>,
        tracking_id: Option<String>,
    ) -> Self {
        SurveyResponse {
            id: ResponseId::new(),
            survey_id: survey_id.into(),
            responses,
            submitted_at: Timestamp::now(),
            is_public: true,
            status: STATUS_SUBMITTED.to_string(),
            email,
            username,
            tracking_id,
        }
    }

    pub fn id(&self) -> &ResponseId {
        &self.id
    }

    pub fn survey_id(&self) -> &str {
        &self.survey_id
    }

    pub fn responses(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.responses
    }

    pub fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    /// Flattens answers into `question: answer` lines for analysis
    /// prompts. String answers render without quotes.
    pub fn flatten_answers(&self) -> Vec<String> {
        self.responses
            .iter()
            .map(|(question, answer)| match answer {
                serde_json::Value::String(s) => format!("{}: {}", question, s),
                other => format!("{}: {}", question, other),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers() -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("q1".to_string(), json!("Yes"));
        map.insert("q2".to_string(), json!(4));
        map
    }

    #[test]
    fn new_responses_are_public_and_submitted() {
        let response = SurveyResponse::new("survey-1", answers(), None, None, None);
        assert_eq!(response.status(), STATUS_SUBMITTED);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["is_public"], json!(true));
        assert_eq!(value["survey_id"], "survey-1");
    }

    #[test]
    fn optional_contact_fields_are_omitted_when_absent() {
        let response = SurveyResponse::new("survey-1", answers(), None, None, None);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("email").is_none());
        assert!(value.get("username").is_none());

        let response = SurveyResponse::new(
            "survey-1",
            answers(),
            Some("a@b.com".to_string()),
            Some("alice".to_string()),
            Some("track-1".to_string()),
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["username"], "alice");
        assert_eq!(value["tracking_id"], "track-1");
    }

    #[test]
    fn flatten_renders_question_answer_lines() {
        let response = SurveyResponse::new("survey-1", answers(), None, None, None);
        let lines = response.flatten_answers();
        assert_eq!(lines, vec!["q1: Yes".to_string(), "q2: 4".to_string()]);
    }

    #[test]
    fn merged_postback_fields_survive_deserialization() {
        let response = SurveyResponse::new("survey-1", answers(), None, None, None);
        let mut value = serde_json::to_value(&response).unwrap();
        value["status"] = json!("confirmed");
        value["username"] = json!("partner-user");
        let back: SurveyResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back.status(), "confirmed");
        assert_eq!(back.username(), Some("partner-user"));
    }
}
