//! HTTP DTOs for response endpoints.

use serde::{Deserialize, Serialize};

/// Request to submit answers for a survey.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponseRequest {
    #[serde(default)]
    pub responses: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Confirmation body for a stored submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponseResponse {
    pub message: String,
    pub response_id: String,
    pub survey_id: String,
}

/// One survey's responses.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseListResponse {
    pub survey_id: String,
    pub total_responses: usize,
    pub responses: Vec<serde_json::Value>,
}

/// Every stored response, for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct AllResponsesResponse {
    pub total_responses: usize,
    pub responses: Vec<serde_json::Value>,
}

/// Request for response insights.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightsRequest {
    pub survey_id: String,
}

/// Oracle-produced insights.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    pub insights: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submit_request_tolerates_missing_fields() {
        let req: SubmitResponseRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.responses.is_none());
        assert!(req.tracking_id.is_none());

        let req: SubmitResponseRequest = serde_json::from_value(json!({
            "responses": {"q1": "Yes"},
            "username": "alice"
        }))
        .unwrap();
        assert_eq!(req.responses.unwrap()["q1"], "Yes");
        assert_eq!(req.username.as_deref(), Some("alice"));
    }
}
