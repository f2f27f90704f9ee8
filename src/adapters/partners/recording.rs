//! Recording partner forwarder for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ForwardError, PartnerForwarder};

/// One recorded `push_responses` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PushedResponse {
    pub sid: String,
    pub responses: serde_json::Value,
    pub email: String,
}

/// Test double that records calls instead of making them.
#[derive(Debug, Clone, Default)]
pub struct RecordingPartnerForwarder {
    pings: Arc<RwLock<Vec<String>>>,
    pushes: Arc<RwLock<Vec<PushedResponse>>>,
    fail_with_status: Arc<RwLock<Option<u16>>>,
}

impl RecordingPartnerForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with the given status.
    pub async fn reject_with(&self, status: u16) {
        *self.fail_with_status.write().await = Some(status);
    }

    /// Usernames pinged so far.
    pub async fn pings(&self) -> Vec<String> {
        self.pings.read().await.clone()
    }

    /// Response pushes so far.
    pub async fn pushes(&self) -> Vec<PushedResponse> {
        self.pushes.read().await.clone()
    }

    async fn maybe_fail(&self) -> Result<(), ForwardError> {
        if let Some(status) = *self.fail_with_status.read().await {
            return Err(ForwardError::Rejected { status });
        }
        Ok(())
    }
}

#[async_trait]
impl PartnerForwarder for RecordingPartnerForwarder {
    async fn completion_ping(&self, username: &str) -> Result<(), ForwardError> {
        self.pings.write().await.push(username.to_string());
        self.maybe_fail().await
    }

    async fn push_responses(
        &self,
        sid: &str,
        responses: &serde_json::Value,
        email: &str,
    ) -> Result<(), ForwardError> {
        self.pushes.write().await.push(PushedResponse {
            sid: sid.to_string(),
            responses: responses.clone(),
            email: email.to_string(),
        });
        self.maybe_fail().await
    }
}
