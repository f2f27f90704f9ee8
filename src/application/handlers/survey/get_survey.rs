//! GetSurveyHandler - Fetches one survey document for viewing.
//!
//! When the caller identifies themselves (both email and username) the
//! view is recorded as a survey click; that write never fails the read.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::domain::tracking::SurveyClick;
use crate::ports::{ClickStore, SurveyStore};

/// Query for viewing one survey.
#[derive(Debug, Clone)]
pub struct GetSurveyQuery {
    pub survey_id: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Handler for survey views.
pub struct GetSurveyHandler {
    surveys: Arc<dyn SurveyStore>,
    clicks: Arc<dyn ClickStore>,
}

impl GetSurveyHandler {
    pub fn new(surveys: Arc<dyn SurveyStore>, clicks: Arc<dyn ClickStore>) -> Self {
        Self { surveys, clicks }
    }

    pub async fn handle(&self, query: GetSurveyQuery) -> Result<serde_json::Value, SurveyError> {
        let doc = self
            .surveys
            .find_document(&query.survey_id)
            .await?
            .ok_or_else(|| SurveyError::survey_not_found(&query.survey_id))?;

        if let (Some(email), Some(username)) = (&query.email, &query.username) {
            let click = SurveyClick::new(&query.survey_id, email, username);
            if let Err(err) = self.clicks.record_survey_click(&click).await {
                tracing::warn!(survey_id = %query.survey_id, error = %err, "Failed to record survey click");
            }
        }

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClickStore, InMemorySurveyStore};
    use crate::domain::foundation::{QuestionId, SurveyId};
    use crate::domain::survey::{Question, QuestionKind, Survey, SurveyLinks, TemplateType, Theme};

    async fn seeded() -> (GetSurveyHandler, Arc<InMemoryClickStore>, String) {
        let surveys = Arc::new(InMemorySurveyStore::new());
        let clicks = Arc::new(InMemoryClickStore::new());

        let id = SurveyId::new();
        let survey = Survey::new(
            id.clone(),
            "coffee",
            "multiple_choice",
            TemplateType::Standard,
            vec![Question::new(
                QuestionId::from_position(1),
                "How satisfied are you?",
                QuestionKind::Rating,
            )],
            Theme::default(),
            SurveyLinks::build("http://localhost:8080", "http://localhost:5173", &id),
        );
        crate::ports::SurveyStore::insert(surveys.as_ref(), &survey)
            .await
            .unwrap();

        let handler = GetSurveyHandler::new(surveys, clicks.clone());
        (handler, clicks, id.to_string())
    }

    #[tokio::test]
    async fn returns_the_survey_document() {
        let (handler, clicks, id) = seeded().await;

        let doc = handler
            .handle(GetSurveyQuery {
                survey_id: id.clone(),
                email: None,
                username: None,
            })
            .await
            .unwrap();

        assert_eq!(doc["id"], serde_json::Value::String(id));
        assert!(clicks.survey_clicks().await.is_empty());
    }

    #[tokio::test]
    async fn records_a_click_when_fully_identified() {
        let (handler, clicks, id) = seeded().await;

        handler
            .handle(GetSurveyQuery {
                survey_id: id,
                email: Some("a@b.com".to_string()),
                username: Some("alice".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(clicks.survey_clicks().await.len(), 1);
    }

    #[tokio::test]
    async fn partial_identity_records_nothing() {
        let (handler, clicks, id) = seeded().await;

        handler
            .handle(GetSurveyQuery {
                survey_id: id,
                email: Some("a@b.com".to_string()),
                username: None,
            })
            .await
            .unwrap();

        assert!(clicks.survey_clicks().await.is_empty());
    }

    #[tokio::test]
    async fn missing_survey_is_not_found() {
        let (handler, _, _) = seeded().await;

        let result = handler
            .handle(GetSurveyQuery {
                survey_id: "missing".to_string(),
                email: None,
                username: None,
            })
            .await;
        assert!(matches!(result, Err(SurveyError::SurveyNotFound(_))));
    }
}
