//! StartTrackingHandler - Records that a respondent opened a survey.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::domain::tracking::TrackingRecord;
use crate::ports::TrackingStore;

/// Command to start tracking a survey view.
#[derive(Debug, Clone)]
pub struct StartTrackingCommand {
    pub survey_id: String,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Handler for view tracking.
pub struct StartTrackingHandler {
    tracking: Arc<dyn TrackingStore>,
}

impl StartTrackingHandler {
    pub fn new(tracking: Arc<dyn TrackingStore>) -> Self {
        Self { tracking }
    }

    pub async fn handle(&self, cmd: StartTrackingCommand) -> Result<String, SurveyError> {
        let record = TrackingRecord::new(cmd.survey_id.clone(), cmd.username, cmd.email);
        self.tracking.insert(&record).await?;

        tracing::info!(
            survey_id = %cmd.survey_id,
            tracking_id = %record.id(),
            "Survey view tracked"
        );
        Ok(record.id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTrackingStore;

    #[tokio::test]
    async fn creates_an_unsubmitted_record() {
        let store = Arc::new(InMemoryTrackingStore::new());
        let handler = StartTrackingHandler::new(store.clone());

        let tracking_id = handler
            .handle(StartTrackingCommand {
                survey_id: "s-1".to_string(),
                username: Some("alice".to_string()),
                email: None,
            })
            .await
            .unwrap();

        let record = store.find(&tracking_id).await.unwrap().unwrap();
        assert_eq!(record.survey_id(), "s-1");
        assert!(!record.submitted());
    }
}
