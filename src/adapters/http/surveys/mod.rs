//! Survey HTTP area.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SurveyHandlers;
pub use routes::survey_routes;
