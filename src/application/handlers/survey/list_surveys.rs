//! ListSurveysHandler - All surveys, newest first.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::ports::SurveyStore;

/// Handler for listing surveys.
pub struct ListSurveysHandler {
    surveys: Arc<dyn SurveyStore>,
}

impl ListSurveysHandler {
    pub fn new(surveys: Arc<dyn SurveyStore>) -> Self {
        Self { surveys }
    }

    pub async fn handle(&self) -> Result<Vec<serde_json::Value>, SurveyError> {
        Ok(self.surveys.list_documents().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySurveyStore;
    use crate::domain::foundation::SurveyId;
    use crate::domain::survey::{Survey, SurveyLinks, TemplateType, Theme};
    use crate::ports::SurveyStore as _;

    fn survey(prompt: &str) -> Survey {
        let id = SurveyId::new();
        Survey::new(
            id.clone(),
            prompt,
            "multiple_choice",
            TemplateType::Standard,
            Vec::new(),
            Theme::default(),
            SurveyLinks::build("http://localhost:8080", "http://localhost:5173", &id),
        )
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let store = Arc::new(InMemorySurveyStore::new());
        store.insert(&survey("first")).await.unwrap();
        store.insert(&survey("second")).await.unwrap();

        let handler = ListSurveysHandler::new(store);
        let docs = handler.handle().await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["prompt"], "second");
        assert_eq!(docs[1]["prompt"], "first");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListSurveysHandler::new(Arc::new(InMemorySurveyStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
