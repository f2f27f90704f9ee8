//! View tracking, click logs and saved emails.
//!
//! Tracking records tie a survey view to an eventual submission so
//! completion rates can be reported. Click and email records are plain
//! audit trails with no behavior of their own.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResponseId, Timestamp, TrackingId};

/// One respondent's view of a survey, updated in place on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    id: TrackingId,
    survey_id: String,
    username: Option<String>,
    email: Option<String>,
    viewed_at: Timestamp,
    submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    submitted_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_id: Option<ResponseId>,
}

impl TrackingRecord {
    pub fn new(
        survey_id: impl Into<String>,
        username: Option<String>,
        email: Option<String>,
    ) -> Self {
        TrackingRecord {
            id: TrackingId::new(),
            survey_id: survey_id.into(),
            username,
            email,
            viewed_at: Timestamp::now(),
            submitted: false,
            submitted_at: None,
            response_id: None,
        }
    }

    pub fn id(&self) -> &TrackingId {
        &self.id
    }

    pub fn survey_id(&self) -> &str {
        &self.survey_id
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn response_id(&self) -> Option<&ResponseId> {
        self.response_id.as_ref()
    }

    /// Marks the view as converted into a submission.
    pub fn mark_submitted(&mut self, response_id: ResponseId) {
        self.submitted = true;
        self.submitted_at = Some(Timestamp::now());
        self.response_id = Some(response_id);
    }
}

/// Aggregated view/submission counts for one survey.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingStats {
    pub survey_id: String,
    pub total_views: usize,
    pub total_submissions: usize,
    pub completion_rate: f64,
    pub view_data: Vec<TrackingRecord>,
}

impl TrackingStats {
    pub fn from_records(survey_id: impl Into<String>, records: Vec<TrackingRecord>) -> Self {
        let total_views = records.len();
        let total_submissions = records.iter().filter(|r| r.submitted).count();
        let completion_rate = if total_views > 0 {
            (total_submissions as f64 / total_views as f64) * 100.0
        } else {
            0.0
        };
        TrackingStats {
            survey_id: survey_id.into(),
            total_views,
            total_submissions,
            completion_rate,
            view_data: records,
        }
    }
}

/// A tracked open of a survey link, recorded only when the caller
/// identifies themselves with both email and username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyClick {
    email: String,
    username: String,
    survey_id: String,
    clicked_at: Timestamp,
}

impl SurveyClick {
    pub fn new(
        survey_id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        SurveyClick {
            email: email.into(),
            username: username.into(),
            survey_id: survey_id.into(),
            clicked_at: Timestamp::now(),
        }
    }

    pub fn survey_id(&self) -> &str {
        &self.survey_id
    }
}

/// An email address captured from the landing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    id: String,
    email: String,
    saved_at: Timestamp,
}

impl EmailRecord {
    pub fn new(email: impl Into<String>) -> Self {
        EmailRecord {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            saved_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
