//! Partner forwarder port.
//!
//! Outbound calls to the partner network. Every call here is
//! best-effort from the caller's point of view: failures are logged
//! and never fail the request that triggered them.

use async_trait::async_trait;

/// Port for partner notification calls.
#[async_trait]
pub trait PartnerForwarder: Send + Sync {
    /// Notify the partner that a respondent completed a survey.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the partner answered with a non-success status
    /// - `Network` on transport problems
    async fn completion_ping(&self, username: &str) -> Result<(), ForwardError>;

    /// Push a claimed response's answers to the partner tracker.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the partner answered with a non-success status
    /// - `Network` on transport problems
    async fn push_responses(
        &self,
        sid: &str,
        responses: &serde_json::Value,
        email: &str,
    ) -> Result<(), ForwardError>;
}

/// Partner forwarding errors.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// Partner answered with a non-success status.
    #[error("partner rejected the call with status {status}")]
    Rejected {
        /// HTTP status returned by the partner.
        status: u16,
    },

    /// Network error during the call.
    #[error("network error: {0}")]
    Network(String),
}

impl ForwardError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
