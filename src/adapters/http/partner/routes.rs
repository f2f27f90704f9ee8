//! HTTP routes for partner endpoints.

use axum::{routing::get, Router};

use super::handlers::{handle_postback, PartnerHandlers};

/// Creates the partner router.
pub fn partner_routes(handlers: PartnerHandlers) -> Router {
    Router::new()
        .route("/postback-handler", get(handle_postback))
        .with_state(handlers)
}
