//! HTTP DTOs for partner endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters on a partner postback.
///
/// `sid1` echoes the tracking id the partner was handed; everything
/// else is transaction metadata merged onto the claimed response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostbackQuery {
    #[serde(default)]
    pub sid1: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reward: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub clicked_at: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Confirmation body for a processed postback.
#[derive(Debug, Clone, Serialize)]
pub struct PostbackResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn postback_query_tolerates_missing_fields() {
        let query: PostbackQuery = serde_json::from_value(json!({
            "sid1": "track-7",
            "reward": 1.5,
            "username": "alice"
        }))
        .unwrap();
        assert_eq!(query.sid1.as_deref(), Some("track-7"));
        assert_eq!(query.reward, Some(1.5));
        assert_eq!(query.username.as_deref(), Some("alice"));
        assert!(query.transaction_id.is_none());

        let empty: PostbackQuery = serde_json::from_value(json!({})).unwrap();
        assert!(empty.sid1.is_none());
    }
}
