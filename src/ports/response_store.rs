//! Response store port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::response::SurveyResponse;

/// Store port for respondent submissions.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Insert a new submission.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, response: &SurveyResponse) -> Result<(), DomainError>;

    /// Raw response documents for one survey, in insertion order.
    async fn find_by_survey(&self, survey_id: &str)
        -> Result<Vec<serde_json::Value>, DomainError>;

    /// Every response document in the store. Debug use only.
    async fn list_documents(&self) -> Result<Vec<serde_json::Value>, DomainError>;

    /// The first response carrying this tracking id that is still
    /// pending. Returns `None` when nothing matches.
    async fn find_pending_by_tracking(
        &self,
        tracking_id: &str,
    ) -> Result<Option<serde_json::Value>, DomainError>;

    /// Merge postback fields into a stored response.
    ///
    /// # Errors
    ///
    /// - `ResponseNotFound` if no document matched
    /// - `DatabaseError` on persistence failure
    async fn merge_update(&self, id: &str, fields: serde_json::Value) -> Result<(), DomainError>;
}
