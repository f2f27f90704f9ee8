//! Plain-text question parser.
//!
//! Models are prompted to emit numbered questions with an optional
//! parenthesized type annotation, followed by lettered option lines:
//!
//! ```text
//! 1. How satisfied are you? (Multiple Choice)
//! A) Very satisfied
//! B) Somewhat satisfied
//! 2. Rate our support (Rating 1-5)
//! ```
//!
//! The parser folds over lines, opening a draft on each numbered line
//! and attaching options to the open draft. Drafts survive a final
//! filter pass before becoming [`Question`]s with contiguous ids.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ParseError;
use super::question::{Question, QuestionKind};
use crate::domain::foundation::QuestionId;

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.\s*(.+?)(?:\s*\(([^)]+)\))?$")
        .unwrap_or_else(|e| panic!("invalid question regex: {}", e))
});

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Da-d])\)\s*(.+)$").unwrap_or_else(|e| panic!("invalid option regex: {}", e))
});

/// Minimum character count for a question to survive filtering.
const MIN_QUESTION_LEN: usize = 5;

/// Kind assigned to a draft before options are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindTag {
    MultipleChoice,
    Rating,
    YesNo,
    ShortAnswer,
}

/// An in-progress question accumulated during the fold.
#[derive(Debug)]
struct Draft {
    text: String,
    tag: KindTag,
    options: Vec<String>,
}

impl Draft {
    fn finalize(self, position: usize) -> Option<Question> {
        let text = self.text.trim().to_string();
        if text.chars().count() < MIN_QUESTION_LEN {
            return None;
        }
        let kind = match self.tag {
            KindTag::MultipleChoice => {
                // Fewer than two options is not a usable choice list.
                let options = if self.options.len() < 2 {
                    vec!["Yes".to_string(), "No".to_string()]
                } else {
                    self.options
                };
                QuestionKind::MultipleChoice { options }
            }
            KindTag::Rating => QuestionKind::Rating,
            KindTag::YesNo => QuestionKind::YesNo,
            KindTag::ShortAnswer => QuestionKind::ShortAnswer,
        };
        Some(Question::new(QuestionId::from_position(position), text, kind))
    }
}

/// Parses raw model output into survey questions.
///
/// Lines that match neither pattern are skipped, as are option lines
/// with no open draft. Questions shorter than five characters after
/// trimming are dropped, and ids are assigned over the survivors so
/// they stay contiguous.
pub fn parse_questions(response_text: &str) -> Result<Vec<Question>, ParseError> {
    if response_text.is_empty() {
        return Err(ParseError::EmptyText);
    }

    let mut drafts: Vec<Draft> = Vec::new();
    let mut current: Option<Draft> = None;

    for line in response_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = QUESTION_LINE.captures(line) {
            if let Some(open) = current.take() {
                drafts.push(open);
            }
            let text = caps[2].trim().replace('*', "");
            let annotation = caps
                .get(3)
                .map(|m| m.as_str().to_lowercase().trim().to_string())
                .unwrap_or_default();
            current = Some(Draft {
                tag: classify(&annotation, &text),
                text,
                options: Vec::new(),
            });
        } else if let Some(caps) = OPTION_LINE.captures(line) {
            if let Some(draft) = current.as_mut() {
                let option = caps[2].trim().to_string();
                if !option.is_empty() {
                    draft.options.push(option);
                }
            }
        }
    }
    if let Some(open) = current.take() {
        drafts.push(open);
    }

    let mut questions = Vec::with_capacity(drafts.len());
    for draft in drafts {
        if let Some(question) = draft.finalize(questions.len() + 1) {
            questions.push(question);
        }
    }

    if questions.is_empty() {
        return Err(ParseError::NoValidQuestions);
    }
    Ok(questions)
}

/// Resolves a question kind from its annotation, falling back to the
/// question text when the annotation is empty or unrecognized.
fn classify(annotation: &str, text: &str) -> KindTag {
    if annotation.contains("multiple choice") || annotation.contains("mcq") {
        KindTag::MultipleChoice
    } else if annotation.contains("rating") || annotation.contains("scale") {
        KindTag::Rating
    } else if annotation.contains("yes") && annotation.contains("no") {
        KindTag::YesNo
    } else if annotation.contains("short") || annotation.contains("answer") {
        KindTag::ShortAnswer
    } else if annotation.contains("opinion scale") {
        // Subsumed by the scale arm above; kept so the annotation set
        // reads completely here.
        KindTag::Rating
    } else {
        let lowered = text.to_lowercase();
        if lowered.contains("rate") || lowered.contains("scale") {
            KindTag::Rating
        } else if lowered.contains("recommend") || lowered.contains("would you") {
            KindTag::YesNo
        } else {
            KindTag::MultipleChoice
        }
    }
}
