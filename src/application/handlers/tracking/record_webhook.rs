//! RecordWebhookHandler - Stores raw partner click payloads.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::survey::SurveyError;
use crate::ports::ClickStore;

/// Handler for inbound click webhooks.
pub struct RecordWebhookHandler {
    clicks: Arc<dyn ClickStore>,
}

impl RecordWebhookHandler {
    pub fn new(clicks: Arc<dyn ClickStore>) -> Self {
        Self { clicks }
    }

    pub async fn handle(&self, mut payload: serde_json::Value) -> Result<(), SurveyError> {
        if let Some(map) = payload.as_object_mut() {
            map.insert(
                "created_at".to_string(),
                serde_json::to_value(Timestamp::now())
                    .map_err(|e| SurveyError::infrastructure(e.to_string()))?,
            );
        }
        self.clicks.record_webhook_event(payload).await?;
        Ok(())
    }
}
