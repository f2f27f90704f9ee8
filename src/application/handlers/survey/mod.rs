//! Survey handlers.

mod branch_questions;
mod edit_survey;
mod generate_survey;
mod get_survey;
mod list_surveys;

pub use branch_questions::{BranchQuestionsCommand, BranchQuestionsHandler};
pub use edit_survey::{EditSurveyCommand, EditSurveyHandler};
pub use generate_survey::{GenerateSurveyCommand, GenerateSurveyHandler, GenerateSurveyResult};
pub use get_survey::{GetSurveyHandler, GetSurveyQuery};
pub use list_surveys::ListSurveysHandler;
