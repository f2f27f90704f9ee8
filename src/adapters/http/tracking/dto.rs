//! HTTP DTOs for tracking endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::tracking::TrackingStats;

/// Request to start tracking a survey view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartTrackingRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Confirmation body for a tracked view.
#[derive(Debug, Clone, Serialize)]
pub struct StartTrackingResponse {
    pub tracking_id: String,
    pub message: String,
}

/// Aggregated per-survey tracking stats.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingStatsResponse {
    pub survey_id: String,
    pub total_views: usize,
    pub total_submissions: usize,
    pub completion_rate: f64,
    pub view_data: Vec<serde_json::Value>,
}

impl From<TrackingStats> for TrackingStatsResponse {
    fn from(stats: TrackingStats) -> Self {
        Self {
            survey_id: stats.survey_id,
            total_views: stats.total_views,
            total_submissions: stats.total_submissions,
            completion_rate: stats.completion_rate,
            view_data: stats
                .view_data
                .into_iter()
                .filter_map(|record| serde_json::to_value(record).ok())
                .collect(),
        }
    }
}

/// Confirmation body for a stored webhook payload.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub status: String,
}

/// Request to save an email.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Confirmation body for a saved email.
#[derive(Debug, Clone, Serialize)]
pub struct SaveEmailResponse {
    pub message: String,
    pub id: String,
}
