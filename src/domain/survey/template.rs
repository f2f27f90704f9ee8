//! Prompt templates for survey generation.

use serde::{Deserialize, Serialize};

use super::errors::SurveyError;

/// Which prompt template to build the generation request from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    /// Open-ended surveys with a wider question budget.
    Custom,
    /// Customer-feedback surveys with a fixed type distribution.
    CustomerFeedback,
    /// General-purpose surveys.
    #[serde(rename = "default")]
    Standard,
}

impl Default for TemplateType {
    fn default() -> Self {
        TemplateType::CustomerFeedback
    }
}

impl TemplateType {
    /// Wire names accepted by the API, in listing order.
    pub const AVAILABLE: &'static [&'static str] = &["custom", "customer_feedback", "default"];

    pub fn parse(value: &str) -> Result<Self, SurveyError> {
        match value {
            "custom" => Ok(TemplateType::Custom),
            "customer_feedback" => Ok(TemplateType::CustomerFeedback),
            "default" => Ok(TemplateType::Standard),
            _ => Err(SurveyError::validation(
                "template_type",
                format!(
                    "Invalid template type. Available templates: {}",
                    Self::AVAILABLE.join(", ")
                ),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Custom => "custom",
            TemplateType::CustomerFeedback => "customer_feedback",
            TemplateType::Standard => "default",
        }
    }

    /// Inclusive question-count bounds for this template.
    pub fn count_range(&self) -> (u32, u32) {
        match self {
            TemplateType::Custom => (5, 100),
            _ => (1, 50),
        }
    }

    pub fn validate_count(&self, count: u32) -> Result<(), SurveyError> {
        let (min, max) = self.count_range();
        if count < min || count > max {
            let message = match self {
                TemplateType::Custom => {
                    "For custom surveys, question count must be between 5 and 100".to_string()
                }
                _ => "Question count must be between 1 and 50".to_string(),
            };
            return Err(SurveyError::validation("question_count", message));
        }
        Ok(())
    }

    /// Renders the full generation prompt for the oracle.
    pub fn render_prompt(&self, prompt: &str, question_count: u32) -> String {
        match self {
            TemplateType::Custom => format!(
                r#"Generate a comprehensive survey about "{prompt}" with as many questions as needed to thoroughly explore this topic.

Create {count} questions that cover all important aspects. Be creative and thorough.

Use this exact format:

1. Question text here (Multiple Choice)
A) Option 1
B) Option 2
C) Option 3
D) Option 4

2. Question text here (Rating 1-10)

3. Question text here (Yes/No)
A) Yes
B) No

4. Question text here (Short Answer)

5. Question text here (Opinion Scale 1-5)

Important Rules:
- Start each question with a number and period (1. 2. 3. etc)
- Include the question type in parentheses
- Multiple Choice = 4 options (A-D)
- Yes/No = Only two options: A) Yes, B) No
- Rating, Short Answer, and Opinion Scale = No options needed
- Ask follow-up questions, demographic questions, suggestions, and detailed feedback
- Cover different angles: satisfaction, recommendations, improvements, future needs, etc."#,
                prompt = prompt,
                count = question_count,
            ),
            TemplateType::CustomerFeedback => format!(
                r#"Generate exactly {count} survey questions for customer feedback about "{prompt}".

Use this exact format:

1. Question text here (Multiple Choice)
A) Option 1
B) Option 2
C) Option 3
D) Option 4

2. Question text here (Rating 1-5)

3. Question text here (Yes/No)
A) Yes
B) No

4. Question text here (Short Answer)

5. Question text here (Opinion Scale 1-10)

Important Rules:
- Start each question with a number and period (1. 2. 3. etc)
- Include the question type in parentheses exactly as shown
- Multiple Choice = 4 options (A-D)
- Yes/No = Only two options: A) Yes, B) No
- Rating, Short Answer, and Opinion Scale = No options needed

Distribution:
- 3 Multiple Choice questions
- 2 Rating questions
- 2 Yes/No questions
- 2 Short Answer questions
- 1 Opinion Scale question

Do not include any explanation — only return the {count} formatted questions in order."#,
                prompt = prompt,
                count = question_count,
            ),
            TemplateType::Standard => format!(
                r#"Generate exactly {count} survey questions about "{prompt}".

Use this exact format:

1. Question text here (Multiple Choice)
A) Option 1
B) Option 2
C) Option 3
D) Option 4

2. Question text here (Rating 1-5)

3. Question text here (Yes/No)
A) Yes
B) No

4. Question text here (Short Answer)

5. Question text here (Opinion Scale 1-10)

Important Rules:
- Start each question with a number and period (1. 2. 3. etc)
- Include the question type in parentheses exactly as shown
- Multiple Choice = 4 options (A-D)
- Yes/No = Only two options: A) Yes, B) No
- Rating, Short Answer, and Opinion Scale = No options needed

Do not include any explanation — only return the formatted questions."#,
                prompt = prompt,
                count = question_count,
            ),
        }
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_template_names() {
        assert_eq!(TemplateType::parse("custom").unwrap(), TemplateType::Custom);
        assert_eq!(
            TemplateType::parse("customer_feedback").unwrap(),
            TemplateType::CustomerFeedback
        );
        assert_eq!(TemplateType::parse("default").unwrap(), TemplateType::Standard);
    }

    #[test]
    fn unknown_template_lists_available_names() {
        let err = TemplateType::parse("quiz").unwrap_err();
        match err {
            SurveyError::ValidationFailed { message, .. } => {
                assert_eq!(
                    message,
                    "Invalid template type. Available templates: custom, customer_feedback, default"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn wire_names_round_trip_through_serde() {
        for name in TemplateType::AVAILABLE {
            let parsed = TemplateType::parse(name).unwrap();
            let json = serde_json::to_value(parsed).unwrap();
            assert_eq!(json, serde_json::Value::String(name.to_string()));
        }
    }

    #[test]
    fn custom_allows_wider_count_range() {
        assert!(TemplateType::Custom.validate_count(5).is_ok());
        assert!(TemplateType::Custom.validate_count(100).is_ok());
        assert!(TemplateType::Custom.validate_count(4).is_err());
        assert!(TemplateType::Custom.validate_count(101).is_err());
    }

    #[test]
    fn standard_templates_cap_at_fifty() {
        assert!(TemplateType::Standard.validate_count(1).is_ok());
        assert!(TemplateType::Standard.validate_count(50).is_ok());
        assert!(TemplateType::Standard.validate_count(0).is_err());
        assert!(TemplateType::CustomerFeedback.validate_count(51).is_err());
    }

    #[test]
    fn count_messages_match_template_kind() {
        let err = TemplateType::Custom.validate_count(3).unwrap_err();
        match err {
            SurveyError::ValidationFailed { message, .. } => {
                assert_eq!(message, "For custom surveys, question count must be between 5 and 100");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = TemplateType::Standard.validate_count(0).unwrap_err();
        match err {
            SurveyError::ValidationFailed { message, .. } => {
                assert_eq!(message, "Question count must be between 1 and 50");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn prompts_interpolate_topic_and_count() {
        let rendered = TemplateType::CustomerFeedback.render_prompt("coffee shops", 12);
        assert!(rendered.contains("Generate exactly 12 survey questions"));
        assert!(rendered.contains("\"coffee shops\""));
        assert!(rendered.contains("Distribution:"));

        let rendered = TemplateType::Custom.render_prompt("remote work", 25);
        assert!(rendered.contains("Create 25 questions"));
        assert!(rendered.contains("\"remote work\""));

        let rendered = TemplateType::Standard.render_prompt("gym habits", 10);
        assert!(rendered.contains("Generate exactly 10 survey questions about \"gym habits\""));
    }

    #[test]
    fn default_template_is_customer_feedback() {
        assert_eq!(TemplateType::default(), TemplateType::CustomerFeedback);
    }
}
