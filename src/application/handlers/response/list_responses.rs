//! Response listing - per survey and the debug firehose.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::ports::ResponseStore;

/// Handler for listing one survey's responses.
pub struct ListResponsesHandler {
    responses: Arc<dyn ResponseStore>,
}

impl ListResponsesHandler {
    pub fn new(responses: Arc<dyn ResponseStore>) -> Self {
        Self { responses }
    }

    pub async fn handle(&self, survey_id: &str) -> Result<Vec<serde_json::Value>, SurveyError> {
        Ok(self.responses.find_by_survey(survey_id).await?)
    }
}

/// Handler for the all-responses debug listing.
pub struct ListAllResponsesHandler {
    responses: Arc<dyn ResponseStore>,
}

impl ListAllResponsesHandler {
    pub fn new(responses: Arc<dyn ResponseStore>) -> Self {
        Self { responses }
    }

    pub async fn handle(&self) -> Result<Vec<serde_json::Value>, SurveyError> {
        Ok(self.responses.list_documents().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryResponseStore;
    use crate::domain::response::SurveyResponse;
    use serde_json::json;

    fn response(survey_id: &str) -> SurveyResponse {
        let mut answers = serde_json::Map::new();
        answers.insert("q1".to_string(), json!("Yes"));
        SurveyResponse::new(survey_id.to_string(), answers, None, None, None)
    }

    #[tokio::test]
    async fn lists_only_the_requested_survey() {
        let store = Arc::new(InMemoryResponseStore::new());
        store.insert(&response("s-1")).await.unwrap();
        store.insert(&response("s-2")).await.unwrap();

        let handler = ListResponsesHandler::new(store.clone());
        assert_eq!(handler.handle("s-1").await.unwrap().len(), 1);
        assert!(handler.handle("s-3").await.unwrap().is_empty());

        let all = ListAllResponsesHandler::new(store);
        assert_eq!(all.handle().await.unwrap().len(), 2);
    }
}
