//! Response handlers.

mod generate_insights;
mod list_responses;
mod submit_response;

pub use generate_insights::GenerateInsightsHandler;
pub use list_responses::{ListAllResponsesHandler, ListResponsesHandler};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};
