//! HTTP partner forwarder for the SurveyTitans network.
//!
//! Two outbound calls: a completion ping (GET with the username as a
//! query parameter) and a response push (POST of sid/responses/email).
//! Callers treat both as best-effort; this adapter only reports what
//! happened.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::PartnerConfig;
use crate::ports::{ForwardError, PartnerForwarder};

/// Partner forwarder speaking HTTP to the configured endpoints.
#[derive(Clone)]
pub struct HttpPartnerForwarder {
    config: PartnerConfig,
    client: Client,
}

impl HttpPartnerForwarder {
    /// Creates a forwarder from partner configuration.
    pub fn new(config: PartnerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[derive(Debug, Serialize)]
struct TrackPayload<'a> {
    sid: &'a str,
    responses: &'a serde_json::Value,
    email: &'a str,
}

#[async_trait]
impl PartnerForwarder for HttpPartnerForwarder {
    async fn completion_ping(&self, username: &str) -> Result<(), ForwardError> {
        let response = self
            .client
            .get(&self.config.completion_url)
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|e| ForwardError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ForwardError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    async fn push_responses(
        &self,
        sid: &str,
        responses: &serde_json::Value,
        email: &str,
    ) -> Result<(), ForwardError> {
        let payload = TrackPayload {
            sid,
            responses,
            email,
        };
        let response = self
            .client
            .post(&self.config.track_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ForwardError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ForwardError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn track_payload_shape() {
        let responses = json!({"q1": "Yes"});
        let payload = TrackPayload {
            sid: "track-1",
            responses: &responses,
            email: "a@b.com",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"sid": "track-1", "responses": {"q1": "Yes"}, "email": "a@b.com"})
        );
    }
}
