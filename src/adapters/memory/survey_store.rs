//! In-memory implementation of SurveyStore.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::Survey;
use crate::ports::SurveyStore;

use super::merge_document;

/// In-memory survey store, documents kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurveyStore {
    docs: Arc<RwLock<Vec<(String, serde_json::Value)>>>,
}

impl InMemorySurveyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored surveys.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// True when no surveys are stored.
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

fn matches(key: &str, doc: &serde_json::Value, id: &str) -> bool {
    key == id || doc.get("id").and_then(|v| v.as_str()) == Some(id)
}

#[async_trait]
impl SurveyStore for InMemorySurveyStore {
    async fn insert(&self, survey: &Survey) -> Result<(), DomainError> {
        let doc = serde_json::to_value(survey).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize survey: {}", e),
            )
        })?;
        let mut docs = self.docs.write().await;
        docs.push((survey.id().to_string(), doc));
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Survey>, DomainError> {
        let docs = self.docs.read().await;
        docs.iter()
            .find(|(key, doc)| matches(key, doc, id))
            .map(|(_, doc)| {
                serde_json::from_value(doc.clone()).map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Stored survey document is malformed: {}", e),
                    )
                })
            })
            .transpose()
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().any(|(key, doc)| matches(key, doc, id)))
    }

    async fn find_document(&self, id: &str) -> Result<Option<serde_json::Value>, DomainError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .find(|(_, doc)| doc.get("id").and_then(|v| v.as_str()) == Some(id))
            .map(|(_, doc)| doc.clone()))
    }

    async fn list_documents(&self) -> Result<Vec<serde_json::Value>, DomainError> {
        let docs = self.docs.read().await;
        // Insertion order is creation order, so newest first is reverse.
        Ok(docs.iter().rev().map(|(_, doc)| doc.clone()).collect())
    }

    async fn merge_update(&self, id: &str, fields: serde_json::Value) -> Result<(), DomainError> {
        let mut docs = self.docs.write().await;
        let entry = docs
            .iter_mut()
            .find(|(key, doc)| matches(key, doc, id))
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SurveyNotFound,
                    format!("Survey not found: {}", id),
                )
                .with_detail("id", id)
            })?;
        merge_document(&mut entry.1, &fields);
        Ok(())
    }
}
