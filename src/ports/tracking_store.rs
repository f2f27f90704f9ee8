//! Tracking store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ResponseId};
use crate::domain::tracking::TrackingRecord;

/// Store port for survey view tracking.
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Insert a new tracking record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, record: &TrackingRecord) -> Result<(), DomainError>;

    /// Find a tracking record by id.
    ///
    /// Returns `None` if not found.
    async fn find(&self, tracking_id: &str) -> Result<Option<TrackingRecord>, DomainError>;

    /// All tracking records for one survey.
    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<TrackingRecord>, DomainError>;

    /// Mark a tracked view as submitted, linking the response.
    ///
    /// # Errors
    ///
    /// - `TrackingNotFound` if no record matched
    /// - `DatabaseError` on persistence failure
    async fn mark_submitted(
        &self,
        tracking_id: &str,
        response_id: &ResponseId,
    ) -> Result<(), DomainError>;
}
