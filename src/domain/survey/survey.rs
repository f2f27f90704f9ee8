//! The survey aggregate.

use serde::{Deserialize, Serialize};

use super::question::Question;
use super::template::TemplateType;
use super::theme::Theme;
use crate::domain::foundation::{QuestionId, SurveyId, Timestamp};

/// Links handed to clients for filling out and sharing a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyLinks {
    pub shareable_link: String,
    pub public_link: String,
}

impl SurveyLinks {
    /// Builds respond/share URLs from the configured service and
    /// frontend origins.
    pub fn build(base_url: &str, frontend_url: &str, id: &SurveyId) -> Self {
        SurveyLinks {
            shareable_link: format!("{}/survey/{}/respond", base_url.trim_end_matches('/'), id),
            public_link: format!("{}/survey/{}", frontend_url.trim_end_matches('/'), id),
        }
    }
}

/// A generated survey with its questions, theme and share links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    id: SurveyId,
    prompt: String,
    response_type: String,
    template_type: TemplateType,
    questions: Vec<Question>,
    theme: Theme,
    created_at: Timestamp,
    #[serde(flatten)]
    links: SurveyLinks,
}

impl Survey {
    pub fn new(
        id: SurveyId,
        prompt: impl Into<String>,
        response_type: impl Into<String>,
        template_type: TemplateType,
        questions: Vec<Question>,
        theme: Theme,
        links: SurveyLinks,
    ) -> Self {
        Survey {
            id,
            prompt: prompt.into(),
            response_type: response_type.into(),
            template_type,
            questions,
            theme,
            created_at: Timestamp::now(),
            links,
        }
    }

    pub fn id(&self) -> &SurveyId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    pub fn template_type(&self) -> TemplateType {
        self.template_type
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn links(&self) -> &SurveyLinks {
        &self.links
    }

    /// Position of a question in the survey, if present.
    pub fn position_of(&self, question_id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == question_id)
    }

    pub fn question(&self, question_id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::question::QuestionKind;

    fn sample_survey() -> Survey {
        let id = SurveyId::new();
        let questions = vec![
            Question::new(
                QuestionId::from_position(1),
                "How satisfied are you?",
                QuestionKind::Rating,
            ),
            Question::new(
                QuestionId::from_position(2),
                "Would you recommend us?",
                QuestionKind::YesNo,
            ),
        ];
        let links = SurveyLinks::build("http://localhost:8080", "http://localhost:5173", &id);
        Survey::new(
            id,
            "coffee shops",
            "multiple_choice",
            TemplateType::CustomerFeedback,
            questions,
            Theme::default(),
            links,
        )
    }

    #[test]
    fn links_embed_survey_id() {
        let id = SurveyId::new();
        let links = SurveyLinks::build("http://localhost:8080/", "http://localhost:5173", &id);
        assert_eq!(
            links.shareable_link,
            format!("http://localhost:8080/survey/{}/respond", id)
        );
        assert_eq!(links.public_link, format!("http://localhost:5173/survey/{}", id));
    }

    #[test]
    fn serializes_with_flattened_links() {
        let survey = sample_survey();
        let value = serde_json::to_value(&survey).unwrap();
        assert!(value["shareable_link"].as_str().unwrap().ends_with("/respond"));
        assert!(value["public_link"].is_string());
        assert_eq!(value["template_type"], "customer_feedback");
        assert_eq!(value["questions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn finds_questions_by_id() {
        let survey = sample_survey();
        assert_eq!(survey.position_of(&QuestionId::from_position(2)), Some(1));
        assert!(survey.question(&QuestionId::from_position(2)).is_some());
        assert_eq!(survey.position_of(&QuestionId::from_position(9)), None);
    }

    #[test]
    fn round_trips_through_json() {
        let survey = sample_survey();
        let json = serde_json::to_string(&survey).unwrap();
        let back: Survey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, survey);
    }
}
