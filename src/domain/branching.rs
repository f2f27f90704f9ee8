//! Adaptive question reveal.
//!
//! Surveys open with a subset of questions visible. Each submitted
//! answer widens the visible set: negative or low answers reveal two
//! follow-up questions, everything else reveals one. The engine is a
//! pure function of the survey, the answered question and the caller's
//! visible set; callers persist the growing set themselves.

use crate::domain::foundation::QuestionId;
use crate::domain::survey::{Survey, SurveyError};

/// Result of one branching step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchingOutcome {
    /// Updated visible set, in reveal order.
    pub next_questions: Vec<QuestionId>,
    /// Human-readable progress line echoing the raw answer.
    pub message: String,
    pub total_questions: usize,
    pub current_progress: usize,
}

/// Question topics with answer-sensitive reveal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Satisfaction,
    Recommend,
    Rating,
    ProductService,
    Generic,
}

const SATISFACTION_NEGATIVE: &[&str] = &["no", "very dissatisfied", "dissatisfied", "poor", "1", "2"];
const RECOMMEND_NEGATIVE: &[&str] = &["no", "never", "unlikely", "0", "1", "2", "3", "4"];

/// Computes the updated visible-question set after an answer.
///
/// Ids already visible are never removed or duplicated, and ids beyond
/// the end of the survey are never produced. Unknown ids in the
/// caller's visible set are dropped from the result.
pub fn next_visible(
    survey: &Survey,
    question_id: &QuestionId,
    answer: &serde_json::Value,
    current_visible: &[QuestionId],
) -> Result<BranchingOutcome, SurveyError> {
    let position = survey
        .position_of(question_id)
        .ok_or_else(|| SurveyError::question_not_found(question_id.as_str()))?;

    let question = &survey.questions()[position];
    let normalized = answer_text(answer).to_lowercase().trim().to_string();
    let reveal = reveal_count(classify_topic(question.text()), &normalized);

    let all_ids: Vec<&QuestionId> = survey.questions().iter().map(|q| q.id()).collect();
    let mut next_questions: Vec<QuestionId> = current_visible.to_vec();

    for offset in 1..=reveal {
        let Some(candidate) = all_ids.get(position + offset) else {
            break;
        };
        if !next_questions.contains(candidate) {
            next_questions.push((*candidate).clone());
        }
    }

    next_questions.retain(|id| all_ids.contains(&id));

    let current_progress = next_questions.len();
    let message = format!(
        "Based on your answer '{}', showing {} questions",
        answer_text(answer),
        current_progress
    );

    Ok(BranchingOutcome {
        next_questions,
        message,
        total_questions: all_ids.len(),
        current_progress,
    })
}

fn classify_topic(question_text: &str) -> Topic {
    let text = question_text.to_lowercase();
    if text.contains("satisfaction") || text.contains("satisfied") {
        Topic::Satisfaction
    } else if text.contains("recommend") {
        Topic::Recommend
    } else if text.contains("rating") || text.contains("rate") {
        Topic::Rating
    } else if text.contains("product") || text.contains("service") {
        Topic::ProductService
    } else {
        Topic::Generic
    }
}

fn reveal_count(topic: Topic, normalized_answer: &str) -> usize {
    match topic {
        Topic::Satisfaction => {
            if SATISFACTION_NEGATIVE.contains(&normalized_answer) {
                2
            } else {
                1
            }
        }
        Topic::Recommend => {
            if RECOMMEND_NEGATIVE.contains(&normalized_answer) {
                2
            } else {
                1
            }
        }
        Topic::Rating => match normalized_answer.parse::<f64>() {
            Ok(rating) if rating <= 5.0 => 2,
            _ => 1,
        },
        // TODO: decide whether negative answers (no, poor, bad,
        // terrible, awful) should reveal two questions here like the
        // other topics do.
        Topic::ProductService => 1,
        Topic::Generic => 1,
    }
}

fn answer_text(answer: &serde_json::Value) -> String {
    match answer {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
