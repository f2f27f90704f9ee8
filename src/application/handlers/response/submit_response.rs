//! SubmitResponseHandler - Stores a respondent's answers.
//!
//! The insert is the only fatal step. Linking the tracking record and
//! pinging the partner are best-effort: the tracking update is logged
//! and swallowed, the partner ping runs as a spawned task.

use std::sync::Arc;

use crate::domain::response::SurveyResponse;
use crate::domain::survey::SurveyError;
use crate::ports::{PartnerForwarder, ResponseStore, SurveyStore, TrackingStore};

/// Command to submit answers for a survey.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub survey_id: String,
    pub responses: serde_json::Map<String, serde_json::Value>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub tracking_id: Option<String>,
}

/// Result of a stored submission.
#[derive(Debug, Clone)]
pub struct SubmitResponseResult {
    pub response_id: String,
    pub survey_id: String,
}

/// Handler for response submission.
pub struct SubmitResponseHandler {
    surveys: Arc<dyn SurveyStore>,
    responses: Arc<dyn ResponseStore>,
    tracking: Arc<dyn TrackingStore>,
    partner: Arc<dyn PartnerForwarder>,
}

impl SubmitResponseHandler {
    pub fn new(
        surveys: Arc<dyn SurveyStore>,
        responses: Arc<dyn ResponseStore>,
        tracking: Arc<dyn TrackingStore>,
        partner: Arc<dyn PartnerForwarder>,
    ) -> Self {
        Self {
            surveys,
            responses,
            tracking,
            partner,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
    ) -> Result<SubmitResponseResult, SurveyError> {
        if cmd.responses.is_empty() {
            return Err(SurveyError::validation("responses", "Responses are required"));
        }

        if !self.surveys.exists(&cmd.survey_id).await? {
            return Err(SurveyError::survey_not_found(&cmd.survey_id));
        }

        let response = SurveyResponse::new(
            cmd.survey_id.clone(),
            cmd.responses,
            cmd.email,
            cmd.username.clone(),
            cmd.tracking_id.clone(),
        );
        self.responses.insert(&response).await?;

        if let Some(tracking_id) = &cmd.tracking_id {
            if let Err(err) = self.tracking.mark_submitted(tracking_id, response.id()).await {
                tracing::warn!(
                    tracking_id = %tracking_id,
                    error = %err,
                    "Failed to mark tracking record submitted"
                );
            }
        }

        if let Some(username) = cmd.username {
            let partner = Arc::clone(&self.partner);
            tokio::spawn(async move {
                if let Err(err) = partner.completion_ping(&username).await {
                    tracing::warn!(username = %username, error = %err, "Partner completion ping failed");
                }
            });
        }

        tracing::info!(
            survey_id = %cmd.survey_id,
            response_id = %response.id(),
            "Response submitted"
        );
        Ok(SubmitResponseResult {
            response_id: response.id().to_string(),
            survey_id: cmd.survey_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryResponseStore, InMemorySurveyStore, InMemoryTrackingStore,
    };
    use crate::adapters::partners::RecordingPartnerForwarder;
    use crate::domain::foundation::SurveyId;
    use crate::domain::survey::{Survey, SurveyLinks, TemplateType, Theme};
    use crate::domain::tracking::TrackingRecord;
    use serde_json::json;

    struct Fixture {
        handler: SubmitResponseHandler,
        responses: Arc<InMemoryResponseStore>,
        tracking: Arc<InMemoryTrackingStore>,
        partner: Arc<RecordingPartnerForwarder>,
        survey_id: String,
    }

    async fn fixture() -> Fixture {
        let surveys = Arc::new(InMemorySurveyStore::new());
        let responses = Arc::new(InMemoryResponseStore::new());
        let tracking = Arc::new(InMemoryTrackingStore::new());
        let partner = Arc::new(RecordingPartnerForwarder::new());

        let id = SurveyId::new();
        let survey = Survey::new(
            id.clone(),
            "coffee",
            "multiple_choice",
            TemplateType::Standard,
            Vec::new(),
            Theme::default(),
            SurveyLinks::build("http://localhost:8080", "http://localhost:5173", &id),
        );
        crate::ports::SurveyStore::insert(surveys.as_ref(), &survey)
            .await
            .unwrap();

        Fixture {
            handler: SubmitResponseHandler::new(
                surveys,
                responses.clone(),
                tracking.clone(),
                partner.clone(),
            ),
            responses,
            tracking,
            partner,
            survey_id: id.to_string(),
        }
    }

    fn answers() -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("q1".to_string(), json!("Yes"));
        map
    }

    #[tokio::test]
    async fn stores_the_response() {
        let fx = fixture().await;

        let result = fx
            .handler
            .handle(SubmitResponseCommand {
                survey_id: fx.survey_id.clone(),
                responses: answers(),
                email: None,
                username: None,
                tracking_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.survey_id, fx.survey_id);
        let stored = fx.responses.find_by_survey(&fx.survey_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["status"], "submitted");
        assert!(fx.partner.pings().await.is_empty());
    }

    #[tokio::test]
    async fn empty_responses_are_rejected() {
        let fx = fixture().await;

        let result = fx
            .handler
            .handle(SubmitResponseCommand {
                survey_id: fx.survey_id,
                responses: serde_json::Map::new(),
                email: None,
                username: None,
                tracking_id: None,
            })
            .await;
        assert!(matches!(result, Err(SurveyError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn unknown_survey_is_not_found() {
        let fx = fixture().await;

        let result = fx
            .handler
            .handle(SubmitResponseCommand {
                survey_id: "missing".to_string(),
                responses: answers(),
                email: None,
                username: None,
                tracking_id: None,
            })
            .await;
        assert!(matches!(result, Err(SurveyError::SurveyNotFound(_))));
    }

    #[tokio::test]
    async fn marks_the_tracking_record_submitted() {
        let fx = fixture().await;
        let record = TrackingRecord::new(fx.survey_id.clone(), None, None);
        fx.tracking.insert(&record).await.unwrap();

        fx.handler
            .handle(SubmitResponseCommand {
                survey_id: fx.survey_id,
                responses: answers(),
                email: None,
                username: None,
                tracking_id: Some(record.id().to_string()),
            })
            .await
            .unwrap();

        let updated = fx
            .tracking
            .find(&record.id().to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(updated.submitted());
    }

    #[tokio::test]
    async fn unknown_tracking_id_does_not_fail_the_submission() {
        let fx = fixture().await;

        let result = fx
            .handler
            .handle(SubmitResponseCommand {
                survey_id: fx.survey_id,
                responses: answers(),
                email: None,
                username: None,
                tracking_id: Some("missing".to_string()),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn pings_the_partner_when_a_username_is_present() {
        let fx = fixture().await;

        fx.handler
            .handle(SubmitResponseCommand {
                survey_id: fx.survey_id,
                responses: answers(),
                email: None,
                username: Some("alice".to_string()),
                tracking_id: None,
            })
            .await
            .unwrap();

        // The ping runs on a spawned task.
        tokio::task::yield_now().await;
        assert_eq!(fx.partner.pings().await, vec!["alice".to_string()]);
    }
}
