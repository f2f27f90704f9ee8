//! HTTP handlers for tracking endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::tracking::{
    RecordWebhookHandler, SaveEmailHandler, StartTrackingCommand, StartTrackingHandler,
    TrackingStatsHandler,
};
use crate::domain::survey::SurveyError;

use super::dto::{
    SaveEmailRequest, SaveEmailResponse, StartTrackingRequest, StartTrackingResponse,
    TrackingStatsResponse, WebhookResponse,
};

/// State for the tracking routes.
#[derive(Clone)]
pub struct TrackingHandlers {
    start_handler: Arc<StartTrackingHandler>,
    stats_handler: Arc<TrackingStatsHandler>,
    webhook_handler: Arc<RecordWebhookHandler>,
    email_handler: Arc<SaveEmailHandler>,
}

impl TrackingHandlers {
    pub fn new(
        start_handler: Arc<StartTrackingHandler>,
        stats_handler: Arc<TrackingStatsHandler>,
        webhook_handler: Arc<RecordWebhookHandler>,
        email_handler: Arc<SaveEmailHandler>,
    ) -> Self {
        Self {
            start_handler,
            stats_handler,
            webhook_handler,
            email_handler,
        }
    }
}

/// POST /survey/:id/track - Record a survey view
pub async fn start_tracking(
    State(handlers): State<TrackingHandlers>,
    Path(survey_id): Path<String>,
    Json(req): Json<StartTrackingRequest>,
) -> Response {
    let cmd = StartTrackingCommand {
        survey_id,
        username: req.username,
        email: req.email,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(tracking_id) => (
            StatusCode::OK,
            Json(StartTrackingResponse {
                tracking_id,
                message: "Survey view tracked".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_tracking_error(e),
    }
}

/// GET /survey/:id/tracking - Aggregated tracking stats
pub async fn tracking_stats(
    State(handlers): State<TrackingHandlers>,
    Path(survey_id): Path<String>,
) -> Response {
    match handlers.stats_handler.handle(&survey_id).await {
        Ok(stats) => {
            let response: TrackingStatsResponse = stats.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_tracking_error(e),
    }
}

/// POST /webhook - Store a raw partner click payload
pub async fn record_webhook(
    State(handlers): State<TrackingHandlers>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    match handlers.webhook_handler.handle(payload).await {
        Ok(()) => (
            StatusCode::OK,
            Json(WebhookResponse {
                status: "success".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_tracking_error(e),
    }
}

/// POST /save-email - Capture an email from the landing form
pub async fn save_email(
    State(handlers): State<TrackingHandlers>,
    Json(req): Json<SaveEmailRequest>,
) -> Response {
    let Some(email) = req.email else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Email is required")),
        )
            .into_response();
    };

    match handlers.email_handler.handle(&email).await {
        Ok(id) => (
            StatusCode::OK,
            Json(SaveEmailResponse {
                message: "Email saved successfully".to_string(),
                id,
            }),
        )
            .into_response(),
        Err(e) => handle_tracking_error(e),
    }
}

/// Maps tracking domain errors onto HTTP statuses.
fn handle_tracking_error(err: SurveyError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Tracking request failed");
    }
    (status, Json(ErrorResponse::from_error(&err))).into_response()
}
