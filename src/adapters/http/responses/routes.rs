//! HTTP routes for response endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    generate_insights, list_all_responses, list_responses, submit_response, ResponseHandlers,
};

/// Creates the response router.
pub fn response_routes(handlers: ResponseHandlers) -> Router {
    Router::new()
        .route("/survey/:id/respond", post(submit_response))
        .route("/survey/:id/responses", get(list_responses))
        .route("/debug/all-responses", get(list_all_responses))
        .route("/insights", post(generate_insights))
        .with_state(handlers)
}
