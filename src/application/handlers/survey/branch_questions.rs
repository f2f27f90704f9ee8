//! BranchQuestionsHandler - Runs one adaptive-reveal step.

use std::sync::Arc;

use crate::domain::branching::{next_visible, BranchingOutcome};
use crate::domain::foundation::QuestionId;
use crate::domain::survey::SurveyError;
use crate::ports::SurveyStore;

/// Command for one branching step.
#[derive(Debug, Clone)]
pub struct BranchQuestionsCommand {
    pub survey_id: String,
    pub question_id: QuestionId,
    pub answer: serde_json::Value,
    pub current_visible: Vec<QuestionId>,
}

/// Handler for adaptive branching.
pub struct BranchQuestionsHandler {
    surveys: Arc<dyn SurveyStore>,
}

impl BranchQuestionsHandler {
    pub fn new(surveys: Arc<dyn SurveyStore>) -> Self {
        Self { surveys }
    }

    pub async fn handle(
        &self,
        cmd: BranchQuestionsCommand,
    ) -> Result<BranchingOutcome, SurveyError> {
        let survey = self
            .surveys
            .find(&cmd.survey_id)
            .await?
            .ok_or_else(|| SurveyError::survey_not_found(&cmd.survey_id))?;

        next_visible(&survey, &cmd.question_id, &cmd.answer, &cmd.current_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySurveyStore;
    use crate::domain::foundation::SurveyId;
    use crate::domain::survey::{Question, QuestionKind, Survey, SurveyLinks, TemplateType, Theme};
    use crate::ports::SurveyStore as _;
    use serde_json::json;

    async fn seeded() -> (BranchQuestionsHandler, String) {
        let store = Arc::new(InMemorySurveyStore::new());
        let id = SurveyId::new();
        let questions = vec![
            Question::new(
                QuestionId::from_position(1),
                "How satisfied are you with our service?",
                QuestionKind::Rating,
            ),
            Question::new(
                QuestionId::from_position(2),
                "What went wrong?",
                QuestionKind::ShortAnswer,
            ),
            Question::new(
                QuestionId::from_position(3),
                "Would you recommend us?",
                QuestionKind::YesNo,
            ),
            Question::new(
                QuestionId::from_position(4),
                "Anything else?",
                QuestionKind::ShortAnswer,
            ),
        ];
        let survey = Survey::new(
            id.clone(),
            "coffee",
            "multiple_choice",
            TemplateType::Standard,
            questions,
            Theme::default(),
            SurveyLinks::build("http://localhost:8080", "http://localhost:5173", &id),
        );
        store.insert(&survey).await.unwrap();
        (BranchQuestionsHandler::new(store), id.to_string())
    }

    #[tokio::test]
    async fn negative_satisfaction_reveals_two_questions() {
        let (handler, survey_id) = seeded().await;

        let outcome = handler
            .handle(BranchQuestionsCommand {
                survey_id,
                question_id: QuestionId::from_position(1),
                answer: json!("very dissatisfied"),
                current_visible: vec![QuestionId::from_position(1)],
            })
            .await
            .unwrap();

        let ids: Vec<&str> = outcome.next_questions.iter().map(|q| q.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
        assert_eq!(outcome.total_questions, 4);
        assert!(outcome.message.contains("very dissatisfied"));
    }

    #[tokio::test]
    async fn missing_survey_is_not_found() {
        let (handler, _) = seeded().await;

        let result = handler
            .handle(BranchQuestionsCommand {
                survey_id: "missing".to_string(),
                question_id: QuestionId::from_position(1),
                answer: json!("yes"),
                current_visible: Vec::new(),
            })
            .await;
        assert!(matches!(result, Err(SurveyError::SurveyNotFound(_))));
    }

    #[tokio::test]
    async fn unknown_question_is_reported() {
        let (handler, survey_id) = seeded().await;

        let result = handler
            .handle(BranchQuestionsCommand {
                survey_id,
                question_id: QuestionId::from_position(99),
                answer: json!("yes"),
                current_visible: Vec::new(),
            })
            .await;
        assert!(matches!(result, Err(SurveyError::QuestionNotFound(_))));
    }
}
