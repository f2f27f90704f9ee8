//! SaveEmailHandler - Captures an email from the landing form.

use std::sync::Arc;

use crate::domain::survey::SurveyError;
use crate::domain::tracking::EmailRecord;
use crate::ports::EmailStore;

/// Handler for email capture.
pub struct SaveEmailHandler {
    emails: Arc<dyn EmailStore>,
}

impl SaveEmailHandler {
    pub fn new(emails: Arc<dyn EmailStore>) -> Self {
        Self { emails }
    }

    /// Stores the email and returns the new record's id.
    pub async fn handle(&self, email: &str) -> Result<String, SurveyError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SurveyError::validation("email", "Email is required"));
        }

        let record = EmailRecord::new(email);
        self.emails.insert(&record).await?;

        tracing::info!(id = %record.id(), "Email saved");
        Ok(record.id().to_string())
    }
}
