//! Survey questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// The answer format a question expects.
///
/// Only multiple-choice questions carry free-form options. Yes/no
/// questions always present the same fixed pair, and the remaining
/// kinds render their own input controls client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String> },
    Rating,
    YesNo,
    ShortAnswer,
}

impl QuestionKind {
    /// Wire name used in stored documents and API payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::Rating => "rating",
            QuestionKind::YesNo => "yes_no",
            QuestionKind::ShortAnswer => "short_answer",
        }
    }

    /// Options as presented to respondents.
    pub fn options(&self) -> Vec<String> {
        match self {
            QuestionKind::MultipleChoice { options } => options.clone(),
            QuestionKind::YesNo => vec!["Yes".to_string(), "No".to_string()],
            QuestionKind::Rating | QuestionKind::ShortAnswer => Vec::new(),
        }
    }

    /// Rebuilds a kind from its stored wire form.
    ///
    /// Unrecognized type names fall back to multiple choice so older
    /// documents keep loading.
    pub fn from_wire(type_name: &str, options: Vec<String>) -> Self {
        match type_name {
            "rating" => QuestionKind::Rating,
            "yes_no" => QuestionKind::YesNo,
            "short_answer" => QuestionKind::ShortAnswer,
            _ => QuestionKind::MultipleChoice { options },
        }
    }
}

/// A single survey question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionWire", into = "QuestionWire")]
pub struct Question {
    id: QuestionId,
    text: String,
    kind: QuestionKind,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Self {
        Question {
            id,
            text: text.into(),
            kind,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }
}

/// Stored document shape: `{id, question, type, options}`.
#[derive(Debug, Serialize, Deserialize)]
struct QuestionWire {
    id: QuestionId,
    question: String,
    #[serde(rename = "type")]
    question_type: String,
    #[serde(default)]
    options: Vec<String>,
}

impl From<QuestionWire> for Question {
    fn from(wire: QuestionWire) -> Self {
        Question {
            id: wire.id,
            text: wire.question,
            kind: QuestionKind::from_wire(&wire.question_type, wire.options),
        }
    }
}

impl From<Question> for QuestionWire {
    fn from(question: Question) -> Self {
        QuestionWire {
            id: question.id.clone(),
            question: question.text.clone(),
            question_type: question.kind.type_name().to_string(),
            options: question.kind.options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn qid(n: usize) -> QuestionId {
        QuestionId::from_position(n)
    }

    #[test]
    fn serializes_to_document_shape() {
        let question = Question::new(
            qid(1),
            "How satisfied are you?",
            QuestionKind::MultipleChoice {
                options: vec!["Very".to_string(), "Somewhat".to_string()],
            },
        );
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "q1",
                "question": "How satisfied are you?",
                "type": "multiple_choice",
                "options": ["Very", "Somewhat"],
            })
        );
    }

    #[test]
    fn yes_no_always_carries_fixed_pair() {
        let question = Question::new(qid(2), "Would you recommend us?", QuestionKind::YesNo);
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["options"], json!(["Yes", "No"]));
    }

    #[test]
    fn rating_serializes_without_options() {
        let question = Question::new(qid(3), "Rate our service", QuestionKind::Rating);
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["options"], json!([]));
        assert_eq!(value["type"], "rating");
    }

    #[test]
    fn deserializes_known_types() {
        let question: Question = serde_json::from_value(json!({
            "id": "q4",
            "question": "Any comments?",
            "type": "short_answer",
            "options": [],
        }))
        .unwrap();
        assert_eq!(question.kind(), &QuestionKind::ShortAnswer);
    }

    #[test]
    fn unknown_type_falls_back_to_multiple_choice() {
        let question: Question = serde_json::from_value(json!({
            "id": "q5",
            "question": "Pick one",
            "type": "dropdown",
            "options": ["A", "B"],
        }))
        .unwrap();
        assert_eq!(
            question.kind(),
            &QuestionKind::MultipleChoice {
                options: vec!["A".to_string(), "B".to_string()],
            }
        );
    }

    #[test]
    fn missing_options_default_to_empty() {
        let question: Question = serde_json::from_value(json!({
            "id": "q6",
            "question": "Rate it",
            "type": "rating",
        }))
        .unwrap();
        assert_eq!(question.kind(), &QuestionKind::Rating);
    }
}
