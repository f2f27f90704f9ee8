//! Click store port.
//!
//! Two audit collections share this port: identified survey-link
//! clicks, and raw partner webhook payloads accepted as-is.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::tracking::SurveyClick;

/// Store port for click logs.
#[async_trait]
pub trait ClickStore: Send + Sync {
    /// Record an identified survey-link click.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn record_survey_click(&self, click: &SurveyClick) -> Result<(), DomainError>;

    /// Record a raw webhook payload, already stamped by the caller.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn record_webhook_event(&self, payload: serde_json::Value) -> Result<(), DomainError>;
}
