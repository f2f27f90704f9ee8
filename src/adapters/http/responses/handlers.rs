//! HTTP handlers for response endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::response::{
    GenerateInsightsHandler, ListAllResponsesHandler, ListResponsesHandler, SubmitResponseCommand,
    SubmitResponseHandler,
};
use crate::domain::survey::SurveyError;

use super::dto::{
    AllResponsesResponse, InsightsRequest, InsightsResponse, ResponseListResponse,
    SubmitResponseRequest, SubmitResponseResponse,
};

/// State for the response routes.
#[derive(Clone)]
pub struct ResponseHandlers {
    submit_handler: Arc<SubmitResponseHandler>,
    list_handler: Arc<ListResponsesHandler>,
    list_all_handler: Arc<ListAllResponsesHandler>,
    insights_handler: Arc<GenerateInsightsHandler>,
}

impl ResponseHandlers {
    pub fn new(
        submit_handler: Arc<SubmitResponseHandler>,
        list_handler: Arc<ListResponsesHandler>,
        list_all_handler: Arc<ListAllResponsesHandler>,
        insights_handler: Arc<GenerateInsightsHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
            list_all_handler,
            insights_handler,
        }
    }
}

/// POST /survey/:id/respond - Submit answers
pub async fn submit_response(
    State(handlers): State<ResponseHandlers>,
    Path(survey_id): Path<String>,
    Json(req): Json<SubmitResponseRequest>,
) -> Response {
    let Some(responses) = req.responses else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Responses are required")),
        )
            .into_response();
    };

    let cmd = SubmitResponseCommand {
        survey_id,
        responses,
        email: req.email,
        username: req.username,
        tracking_id: req.tracking_id,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(SubmitResponseResponse {
                message: "Survey response submitted successfully".to_string(),
                response_id: result.response_id,
                survey_id: result.survey_id,
            }),
        )
            .into_response(),
        Err(e) => handle_response_error(e),
    }
}

/// GET /survey/:id/responses - One survey's responses
pub async fn list_responses(
    State(handlers): State<ResponseHandlers>,
    Path(survey_id): Path<String>,
) -> Response {
    match handlers.list_handler.handle(&survey_id).await {
        Ok(responses) => (
            StatusCode::OK,
            Json(ResponseListResponse {
                survey_id,
                total_responses: responses.len(),
                responses,
            }),
        )
            .into_response(),
        Err(e) => handle_response_error(e),
    }
}

/// GET /debug/all-responses - Every stored response
pub async fn list_all_responses(State(handlers): State<ResponseHandlers>) -> Response {
    match handlers.list_all_handler.handle().await {
        Ok(responses) => (
            StatusCode::OK,
            Json(AllResponsesResponse {
                total_responses: responses.len(),
                responses,
            }),
        )
            .into_response(),
        Err(e) => handle_response_error(e),
    }
}

/// POST /insights - Summarize a survey's responses
pub async fn generate_insights(
    State(handlers): State<ResponseHandlers>,
    Json(req): Json<InsightsRequest>,
) -> Response {
    match handlers.insights_handler.handle(&req.survey_id).await {
        Ok(insights) => (StatusCode::OK, Json(InsightsResponse { insights })).into_response(),
        Err(SurveyError::ResponseNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("No responses found for this survey")),
        )
            .into_response(),
        Err(e) => handle_response_error(e),
    }
}

/// Maps response domain errors onto HTTP statuses.
fn handle_response_error(err: SurveyError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Response request failed");
    }
    (status, Json(ErrorResponse::from_error(&err))).into_response()
}
