//! HTTP handlers for partner endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::partner::{HandlePostbackHandler, PostbackCommand};
use crate::domain::survey::SurveyError;

use super::dto::{PostbackQuery, PostbackResponse};

/// State for the partner routes.
#[derive(Clone)]
pub struct PartnerHandlers {
    postback_handler: Arc<HandlePostbackHandler>,
}

impl PartnerHandlers {
    pub fn new(postback_handler: Arc<HandlePostbackHandler>) -> Self {
        Self { postback_handler }
    }
}

/// GET /postback-handler - Partner claims a completed survey
pub async fn handle_postback(
    State(handlers): State<PartnerHandlers>,
    Query(params): Query<PostbackQuery>,
) -> Response {
    let Some(sid) = params.sid1 else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(
                "Missing required parameter: sid1 (tracking_id)",
            )),
        )
            .into_response();
    };

    let cmd = PostbackCommand {
        sid,
        transaction_id: params.transaction_id,
        status: params.status,
        reward: params.reward,
        currency: params.currency,
        clicked_at: params.clicked_at,
        username: params.username,
    };

    match handlers.postback_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(PostbackResponse {
                message: "Survey forwarded to SurveyTitans".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_partner_error(e),
    }
}

/// Maps partner domain errors onto HTTP statuses.
fn handle_partner_error(err: SurveyError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Partner request failed");
    }
    (status, Json(ErrorResponse::from_error(&err))).into_response()
}
