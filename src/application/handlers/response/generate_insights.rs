//! GenerateInsightsHandler - Summarizes responses into business ideas.
//!
//! Flattens every stored answer for a survey into one analysis prompt
//! and returns the oracle's completion verbatim (trimmed).

use std::sync::Arc;

use crate::domain::response::SurveyResponse;
use crate::domain::survey::SurveyError;
use crate::ports::{ResponseStore, SamplingConfig, TextGenerator};

/// Handler for response insights.
pub struct GenerateInsightsHandler {
    responses: Arc<dyn ResponseStore>,
    generator: Arc<dyn TextGenerator>,
}

impl GenerateInsightsHandler {
    pub fn new(responses: Arc<dyn ResponseStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            responses,
            generator,
        }
    }

    pub async fn handle(&self, survey_id: &str) -> Result<String, SurveyError> {
        let docs = self.responses.find_by_survey(survey_id).await?;
        if docs.is_empty() {
            return Err(SurveyError::response_not_found(survey_id));
        }

        let mut lines = Vec::new();
        for doc in docs {
            // Postback merges can leave extra fields; tolerate documents
            // that no longer deserialize and mine what we can.
            match serde_json::from_value::<SurveyResponse>(doc.clone()) {
                Ok(response) => lines.extend(response.flatten_answers()),
                Err(_) => {
                    if let Some(answers) = doc.get("responses").and_then(|v| v.as_object()) {
                        for (question, answer) in answers {
                            match answer {
                                serde_json::Value::String(s) => {
                                    lines.push(format!("{}: {}", question, s))
                                }
                                other => lines.push(format!("{}: {}", question, other)),
                            }
                        }
                    }
                }
            }
        }

        let prompt = format!(
            "Based on the following customer survey responses, suggest business strategies, improvements, or new market segments.\nResponses:\n{}\n\nBusiness Ideas:",
            lines.join("\n")
        );

        let insights = self
            .generator
            .generate(&prompt, &SamplingConfig::default())
            .await
            .map_err(|err| SurveyError::upstream(err.to_string()))?;

        Ok(insights.trim().to_string())
    }
}
