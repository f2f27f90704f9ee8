//! HTTP routes for tracking endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    record_webhook, save_email, start_tracking, tracking_stats, TrackingHandlers,
};

/// Creates the tracking router.
pub fn tracking_routes(handlers: TrackingHandlers) -> Router {
    Router::new()
        .route("/survey/:id/track", post(start_tracking))
        .route("/survey/:id/tracking", get(tracking_stats))
        .route("/webhook", post(record_webhook))
        .route("/save-email", post(save_email))
        .with_state(handlers)
}
