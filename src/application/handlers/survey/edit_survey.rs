//! EditSurveyHandler - Merge-updates a survey document.
//!
//! Accepts arbitrary JSON from the caller and merges it over the
//! stored document. Identity and provenance fields are stripped so a
//! caller can never rewrite them.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::ports::SurveyStore;

/// Fields a caller may not overwrite.
const PROTECTED_FIELDS: &[&str] = &["id", "_id", "created_at"];

/// Command to edit a survey document.
#[derive(Debug, Clone)]
pub struct EditSurveyCommand {
    pub survey_id: String,
    pub fields: serde_json::Value,
}

/// Handler for survey edits.
pub struct EditSurveyHandler {
    surveys: Arc<dyn SurveyStore>,
}

impl EditSurveyHandler {
    pub fn new(surveys: Arc<dyn SurveyStore>) -> Self {
        Self { surveys }
    }

    pub async fn handle(&self, cmd: EditSurveyCommand) -> Result<(), SurveyError> {
        let mut fields = match cmd.fields {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(SurveyError::validation(
                    "body",
                    "Update payload must be a JSON object",
                ))
            }
        };

        for field in PROTECTED_FIELDS {
            fields.remove(*field);
        }

        self.surveys
            .merge_update(&cmd.survey_id, serde_json::Value::Object(fields))
            .await?;

        tracing::info!(survey_id = %cmd.survey_id, "Survey updated");
        Ok(())
    }
}
