//! HTTP adapters - the inbound REST surface.
//!
//! One router per API area, merged into a single application router
//! with tracing, CORS and timeout layers applied once at the top.

pub mod error;
pub mod partner;
pub mod responses;
pub mod surveys;
pub mod tracking;

pub use error::ErrorResponse;
pub use partner::{partner_routes, PartnerHandlers};
pub use responses::{response_routes, ResponseHandlers};
pub use surveys::{survey_routes, SurveyHandlers};
pub use tracking::{tracking_routes, TrackingHandlers};

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// GET / - service health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "survey-loom",
    }))
}

/// Exact origins with credentials when configured, permissive otherwise.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}

/// Composes the full application router.
pub fn build_router(
    surveys: SurveyHandlers,
    responses: ResponseHandlers,
    tracking: TrackingHandlers,
    partner: PartnerHandlers,
    config: &ServerConfig,
) -> Router {
    Router::new()
        .route("/", get(health))
        .merge(survey_routes(surveys))
        .merge(response_routes(responses))
        .merge(tracking_routes(tracking))
        .merge(partner_routes(partner))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
}
