//! GenerateSurveyHandler - Turns a free-text prompt into a persisted survey.
//!
//! Validates the request, renders the template prompt, calls the text
//! generator with a small retry budget and persists the parsed survey.
//! Retries cover flaky model output only; a store failure after a
//! successful generation is fatal.

use std::sync::Arc;

use crate::domain::foundation::SurveyId;
use crate::domain::survey::{
    parse_questions, Survey, SurveyError, SurveyLinks, TemplateType, Theme,
};
use crate::ports::{SamplingConfig, SurveyStore, TextGenerator};

/// Total attempts against the generator before giving up.
const MAX_ATTEMPTS: u32 = 3;

/// Question count used when the caller does not specify one.
const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Response type used when the caller does not specify one.
const DEFAULT_RESPONSE_TYPE: &str = "multiple_choice";

/// Command to generate a new survey.
#[derive(Debug, Clone)]
pub struct GenerateSurveyCommand {
    pub prompt: String,
    pub template_type: Option<String>,
    pub response_type: Option<String>,
    pub question_count: Option<u32>,
    pub theme: Option<serde_json::Value>,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateSurveyResult {
    pub survey: Survey,
    /// Attempts spent, including the successful one.
    pub attempts: u32,
}

/// Handler for survey generation.
pub struct GenerateSurveyHandler {
    generator: Arc<dyn TextGenerator>,
    surveys: Arc<dyn SurveyStore>,
    base_url: String,
    frontend_url: String,
}

impl GenerateSurveyHandler {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        surveys: Arc<dyn SurveyStore>,
        base_url: impl Into<String>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            surveys,
            base_url: base_url.into(),
            frontend_url: frontend_url.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSurveyCommand,
    ) -> Result<GenerateSurveyResult, SurveyError> {
        // 1. Validate before spending any generator budget
        let prompt = cmd.prompt.trim();
        if prompt.is_empty() {
            return Err(SurveyError::validation("prompt", "Prompt is required"));
        }

        let template = match &cmd.template_type {
            Some(name) => TemplateType::parse(name)?,
            None => TemplateType::default(),
        };

        let question_count = cmd.question_count.unwrap_or(DEFAULT_QUESTION_COUNT);
        template.validate_count(question_count)?;

        let theme = Theme::from_value(cmd.theme.as_ref())?;

        let response_type = cmd
            .response_type
            .unwrap_or_else(|| DEFAULT_RESPONSE_TYPE.to_string());

        // 2. Generate with retries
        let rendered = template.render_prompt(prompt, question_count);
        let sampling = SamplingConfig::default();
        // Survivor floor: at least 3, or half of what was asked for.
        let min_questions = std::cmp::max(3, question_count / 2) as usize;

        let mut last_error = String::new();
        let mut raw_output = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            let text = match self.generator.generate(&rendered, &sampling).await {
                Ok(text) => text,
                Err(err) => {
                    last_error = err.to_string();
                    tracing::warn!(attempt, error = %last_error, "Generator call failed");
                    continue;
                }
            };

            if text.trim().is_empty() {
                last_error = "Empty response text received".to_string();
                raw_output = text;
                tracing::warn!(attempt, "Generator returned empty text");
                continue;
            }

            let questions = match parse_questions(&text) {
                Ok(questions) => questions,
                Err(err) => {
                    last_error = err.to_string();
                    raw_output = text;
                    tracing::warn!(attempt, error = %last_error, "Parsing failed");
                    continue;
                }
            };

            if questions.len() < min_questions {
                last_error = format!(
                    "Only got {} valid questions, needed at least {}",
                    questions.len(),
                    min_questions
                );
                raw_output = text;
                tracing::warn!(attempt, error = %last_error, "Too few questions survived");
                continue;
            }

            // 3. Build and persist
            let id = SurveyId::new();
            let links = SurveyLinks::build(&self.base_url, &self.frontend_url, &id);
            let survey = Survey::new(
                id,
                prompt,
                response_type.clone(),
                template,
                questions,
                theme.clone(),
                links,
            );

            self.surveys.insert(&survey).await?;

            tracing::info!(
                survey_id = %survey.id(),
                attempt,
                questions = survey.questions().len(),
                "Survey generated"
            );
            return Ok(GenerateSurveyResult {
                survey,
                attempts: attempt,
            });
        }

        Err(SurveyError::generation_failed(
            MAX_ATTEMPTS,
            last_error,
            raw_output,
        ))
    }
}
