//! In-memory implementation of ResponseStore.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::response::SurveyResponse;
use crate::ports::ResponseStore;

use super::merge_document;

/// In-memory response store, documents kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResponseStore {
    docs: Arc<RwLock<Vec<(String, serde_json::Value)>>>,
}

impl InMemoryResponseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn insert(&self, response: &SurveyResponse) -> Result<(), DomainError> {
        let doc = serde_json::to_value(response).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize response: {}", e),
            )
        })?;
        let mut docs = self.docs.write().await;
        docs.push((response.id().to_string(), doc));
        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<serde_json::Value>, DomainError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|(_, doc)| doc.get("survey_id").and_then(|v| v.as_str()) == Some(survey_id))
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn list_documents(&self) -> Result<Vec<serde_json::Value>, DomainError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().map(|(_, doc)| doc.clone()).collect())
    }

    async fn find_pending_by_tracking(
        &self,
        tracking_id: &str,
    ) -> Result<Option<serde_json::Value>, DomainError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .find(|(_, doc)| {
                doc.get("tracking_id").and_then(|v| v.as_str()) == Some(tracking_id)
                    && doc.get("status").and_then(|v| v.as_str()) == Some("pending")
            })
            .map(|(_, doc)| doc.clone()))
    }

    async fn merge_update(&self, id: &str, fields: serde_json::Value) -> Result<(), DomainError> {
        let mut docs = self.docs.write().await;
        let entry = docs
            .iter_mut()
            .find(|(key, doc)| {
                key == id || doc.get("id").and_then(|v| v.as_str()) == Some(id)
            })
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ResponseNotFound,
                    format!("Response not found: {}", id),
                )
                .with_detail("id", id)
            })?;
        merge_document(&mut entry.1, &fields);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response(survey_id: &str, tracking_id: Option<&str>) -> SurveyResponse {
        let mut answers = serde_json::Map::new();
        answers.insert("q1".to_string(), json!("Yes"));
        SurveyResponse::new(
            survey_id.to_string(),
            answers,
            None,
            None,
            tracking_id.map(|t| t.to_string()),
        )
    }

    #[tokio::test]
    async fn find_by_survey_filters_on_survey_id() {
        let store = InMemoryResponseStore::new();
        store.insert(&sample_response("s-1", None)).await.unwrap();
        store.insert(&sample_response("s-2", None)).await.unwrap();
        store.insert(&sample_response("s-1", None)).await.unwrap();

        let found = store.find_by_survey("s-1").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(store.list_documents().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn pending_lookup_requires_pending_status() {
        let store = InMemoryResponseStore::new();
        let response = sample_response("s-1", Some("track-9"));
        store.insert(&response).await.unwrap();

        // Freshly submitted responses are not pending.
        assert!(store
            .find_pending_by_tracking("track-9")
            .await
            .unwrap()
            .is_none());

        store
            .merge_update(&response.id().to_string(), json!({"status": "pending"}))
            .await
            .unwrap();
        let found = store.find_pending_by_tracking("track-9").await.unwrap();
        assert_eq!(found.unwrap()["tracking_id"], "track-9");
    }

    #[tokio::test]
    async fn merge_update_unknown_id_is_not_found() {
        let store = InMemoryResponseStore::new();
        let err = store.merge_update("missing", json!({})).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResponseNotFound);
    }
}
