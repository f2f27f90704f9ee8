//! In-memory implementation of ClickStore.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::tracking::SurveyClick;
use crate::ports::ClickStore;

/// In-memory click store. Exposes the recorded events for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClickStore {
    survey_clicks: Arc<RwLock<Vec<SurveyClick>>>,
    webhook_events: Arc<RwLock<Vec<serde_json::Value>>>,
}

impl InMemoryClickStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded survey-link clicks.
    pub async fn survey_clicks(&self) -> Vec<SurveyClick> {
        self.survey_clicks.read().await.clone()
    }

    /// All recorded webhook payloads.
    pub async fn webhook_events(&self) -> Vec<serde_json::Value> {
        self.webhook_events.read().await.clone()
    }
}

#[async_trait]
impl ClickStore for InMemoryClickStore {
    async fn record_survey_click(&self, click: &SurveyClick) -> Result<(), DomainError> {
        // Serialization mirrors the durable adapter's failure surface.
        serde_json::to_value(click).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize click: {}", e),
            )
        })?;
        self.survey_clicks.write().await.push(click.clone());
        Ok(())
    }

    async fn record_webhook_event(&self, payload: serde_json::Value) -> Result<(), DomainError> {
        self.webhook_events.write().await.push(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_clicks_and_webhook_events() {
        let store = InMemoryClickStore::new();
        store
            .record_survey_click(&SurveyClick::new("s-1", "a@b.com", "alice"))
            .await
            .unwrap();
        store
            .record_webhook_event(json!({"event": "click"}))
            .await
            .unwrap();

        assert_eq!(store.survey_clicks().await.len(), 1);
        assert_eq!(store.webhook_events().await[0]["event"], "click");
    }
}
