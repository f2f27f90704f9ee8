//! No-op partner forwarder, used when forwarding is disabled.

use async_trait::async_trait;

use crate::ports::{ForwardError, PartnerForwarder};

/// Forwarder that drops every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPartnerForwarder;

#[async_trait]
impl PartnerForwarder for NoopPartnerForwarder {
    async fn completion_ping(&self, username: &str) -> Result<(), ForwardError> {
        tracing::debug!(username = %username, "Partner forwarding disabled, dropping completion ping");
        Ok(())
    }

    async fn push_responses(
        &self,
        sid: &str,
        _responses: &serde_json::Value,
        _email: &str,
    ) -> Result<(), ForwardError> {
        tracing::debug!(sid = %sid, "Partner forwarding disabled, dropping response push");
        Ok(())
    }
}
