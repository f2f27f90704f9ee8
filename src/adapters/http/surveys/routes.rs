//! HTTP routes for survey endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    branch_questions, edit_survey, generate_survey, list_surveys, view_survey, SurveyHandlers,
};

/// Creates the survey router.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/generate", post(generate_survey))
        .route("/surveys", get(list_surveys))
        .route("/survey/:id/view", get(view_survey))
        .route("/survey/:id/edit", put(edit_survey))
        .route("/survey/:id/branching", post(branch_questions))
        .with_state(handlers)
}
