//! HandlePostbackHandler - Claims a pending response for the partner.
//!
//! The partner calls back with the tracking id it was given as `sid1`.
//! The matching pending response is stamped with the transaction fields
//! and its answers are pushed back to the partner tracker. The push and
//! the completion ping are best-effort.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::ports::{PartnerForwarder, ResponseStore};

/// Transaction fields from a partner postback.
#[derive(Debug, Clone, Default)]
pub struct PostbackCommand {
    /// Tracking id the partner echoes back.
    pub sid: String,
    pub transaction_id: Option<String>,
    pub status: Option<String>,
    pub reward: Option<f64>,
    pub currency: Option<String>,
    pub clicked_at: Option<String>,
    pub username: Option<String>,
}

/// Handler for partner postbacks.
pub struct HandlePostbackHandler {
    responses: Arc<dyn ResponseStore>,
    partner: Arc<dyn PartnerForwarder>,
}

impl HandlePostbackHandler {
    pub fn new(responses: Arc<dyn ResponseStore>, partner: Arc<dyn PartnerForwarder>) -> Self {
        Self { responses, partner }
    }

    pub async fn handle(&self, cmd: PostbackCommand) -> Result<(), SurveyError> {
        let doc = self
            .responses
            .find_pending_by_tracking(&cmd.sid)
            .await?
            .ok_or_else(|| SurveyError::response_not_found(&cmd.sid))?;

        let response_id = doc
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let fields = serde_json::json!({
            "username": cmd.username,
            "transaction_id": cmd.transaction_id,
            "reward": cmd.reward.unwrap_or(0.0),
            "currency": cmd.currency.unwrap_or_else(|| "USD".to_string()),
            "clicked_at": cmd.clicked_at,
            "status": cmd.status.unwrap_or_else(|| "confirmed".to_string()),
        });
        self.responses.merge_update(&response_id, fields).await?;

        if let Some(username) = &cmd.username {
            if let Err(err) = self.partner.completion_ping(username).await {
                tracing::warn!(username = %username, error = %err, "Partner completion ping failed");
            }
        }

        let answers = doc
            .get("responses")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        let email = doc
            .get("email")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        if let Err(err) = self.partner.push_responses(&cmd.sid, &answers, &email).await {
            tracing::warn!(sid = %cmd.sid, error = %err, "Partner response push failed");
        }

        tracing::info!(sid = %cmd.sid, response_id = %response_id, "Postback processed");
        Ok(())
    }
}
