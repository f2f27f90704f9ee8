//! TrackingStatsHandler - Aggregated view/submission counts.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::domain::tracking::TrackingStats;
use crate::ports::TrackingStore;

/// Handler for per-survey tracking stats.
pub struct TrackingStatsHandler {
    tracking: Arc<dyn TrackingStore>,
}

impl TrackingStatsHandler {
    pub fn new(tracking: Arc<dyn TrackingStore>) -> Self {
        Self { tracking }
    }

    pub async fn handle(&self, survey_id: &str) -> Result<TrackingStats, SurveyError> {
        let records = self.tracking.find_by_survey(survey_id).await?;
        Ok(TrackingStats::from_records(survey_id, records))
    }
}
