//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{status_for, ErrorResponse};
use crate::application::handlers::survey::{
    BranchQuestionsCommand, BranchQuestionsHandler, EditSurveyCommand, EditSurveyHandler,
    GenerateSurveyCommand, GenerateSurveyHandler, GetSurveyHandler, GetSurveyQuery,
    ListSurveysHandler,
};
use crate::domain::foundation::QuestionId;
use crate::domain::survey::SurveyError;

use super::dto::{
    BranchingRequest, BranchingResponse, EditSurveyResponse, GenerateSurveyRequest,
    GenerateSurveyResponse, SurveyListResponse, ViewSurveyQuery,
};

/// State for the survey routes.
#[derive(Clone)]
pub struct SurveyHandlers {
    generate_handler: Arc<GenerateSurveyHandler>,
    get_handler: Arc<GetSurveyHandler>,
    list_handler: Arc<ListSurveysHandler>,
    edit_handler: Arc<EditSurveyHandler>,
    branch_handler: Arc<BranchQuestionsHandler>,
}

impl SurveyHandlers {
    pub fn new(
        generate_handler: Arc<GenerateSurveyHandler>,
        get_handler: Arc<GetSurveyHandler>,
        list_handler: Arc<ListSurveysHandler>,
        edit_handler: Arc<EditSurveyHandler>,
        branch_handler: Arc<BranchQuestionsHandler>,
    ) -> Self {
        Self {
            generate_handler,
            get_handler,
            list_handler,
            edit_handler,
            branch_handler,
        }
    }
}

/// POST /generate - Generate a new survey from a prompt
pub async fn generate_survey(
    State(handlers): State<SurveyHandlers>,
    Json(req): Json<GenerateSurveyRequest>,
) -> Response {
    let cmd = GenerateSurveyCommand {
        prompt: req.prompt,
        template_type: req.template_type,
        response_type: req.response_type,
        question_count: req.question_count,
        theme: req.theme,
    };

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(GenerateSurveyResponse::from_survey(&result.survey)),
        )
            .into_response(),
        Err(e) => handle_survey_error(e),
    }
}

/// GET /surveys - List all surveys, newest first
pub async fn list_surveys(State(handlers): State<SurveyHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(surveys) => (StatusCode::OK, Json(SurveyListResponse { surveys })).into_response(),
        Err(e) => handle_survey_error(e),
    }
}

/// GET /survey/:id/view - Fetch one survey document
pub async fn view_survey(
    State(handlers): State<SurveyHandlers>,
    Path(survey_id): Path<String>,
    Query(params): Query<ViewSurveyQuery>,
) -> Response {
    let query = GetSurveyQuery {
        survey_id,
        email: params.email,
        username: params.username,
    };

    match handlers.get_handler.handle(query).await {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => handle_survey_error(e),
    }
}

/// PUT /survey/:id/edit - Merge-update a survey document
pub async fn edit_survey(
    State(handlers): State<SurveyHandlers>,
    Path(survey_id): Path<String>,
    Json(fields): Json<serde_json::Value>,
) -> Response {
    let cmd = EditSurveyCommand { survey_id, fields };

    match handlers.edit_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(EditSurveyResponse {
                message: "Survey updated successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_survey_error(e),
    }
}

/// POST /survey/:id/branching - Run one adaptive-reveal step
pub async fn branch_questions(
    State(handlers): State<SurveyHandlers>,
    Path(survey_id): Path<String>,
    Json(req): Json<BranchingRequest>,
) -> Response {
    let question_id = match QuestionId::new(req.question_id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid question id")),
            )
                .into_response()
        }
    };

    let mut current_visible = Vec::with_capacity(req.current_visible_questions.len());
    for id in req.current_visible_questions {
        match QuestionId::new(id) {
            Ok(id) => current_visible.push(id),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request("Invalid question id in visible set")),
                )
                    .into_response()
            }
        }
    }

    let cmd = BranchQuestionsCommand {
        survey_id,
        question_id,
        answer: req.answer,
        current_visible,
    };

    match handlers.branch_handler.handle(cmd).await {
        Ok(outcome) => {
            let response: BranchingResponse = outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_survey_error(e),
    }
}

/// Maps survey domain errors onto HTTP statuses.
fn handle_survey_error(err: SurveyError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Survey request failed");
    }
    (status, Json(ErrorResponse::from_error(&err))).into_response()
}
