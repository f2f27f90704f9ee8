//! In-memory implementation of TrackingStore.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ResponseId, Timestamp};
use crate::domain::tracking::TrackingRecord;
use crate::ports::TrackingStore;

use super::merge_document;

/// In-memory tracking store, documents kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackingStore {
    docs: Arc<RwLock<Vec<(String, serde_json::Value)>>>,
}

impl InMemoryTrackingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn read_record(doc: &serde_json::Value) -> Result<TrackingRecord, DomainError> {
    serde_json::from_value(doc.clone()).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Stored tracking document is malformed: {}", e),
        )
    })
}

#[async_trait]
impl TrackingStore for InMemoryTrackingStore {
    async fn insert(&self, record: &TrackingRecord) -> Result<(), DomainError> {
        let doc = serde_json::to_value(record).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize tracking record: {}", e),
            )
        })?;
        let mut docs = self.docs.write().await;
        docs.push((record.id().to_string(), doc));
        Ok(())
    }

    async fn find(&self, tracking_id: &str) -> Result<Option<TrackingRecord>, DomainError> {
        let docs = self.docs.read().await;
        docs.iter()
            .find(|(key, _)| key == tracking_id)
            .map(|(_, doc)| read_record(doc))
            .transpose()
    }

    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<TrackingRecord>, DomainError> {
        let docs = self.docs.read().await;
        docs.iter()
            .filter(|(_, doc)| doc.get("survey_id").and_then(|v| v.as_str()) == Some(survey_id))
            .map(|(_, doc)| read_record(doc))
            .collect()
    }

    async fn mark_submitted(
        &self,
        tracking_id: &str,
        response_id: &ResponseId,
    ) -> Result<(), DomainError> {
        let fields = json!({
            "submitted": true,
            "submitted_at": Timestamp::now(),
            "response_id": response_id,
        });

        let mut docs = self.docs.write().await;
        let entry = docs
            .iter_mut()
            .find(|(key, _)| key == tracking_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::TrackingNotFound,
                    format!("Tracking record not found: {}", tracking_id),
                )
                .with_detail("id", tracking_id)
            })?;
        merge_document(&mut entry.1, &fields);
        Ok(())
    }
}
