//! In-memory adapters - store implementations backed by process memory.
//!
//! Behaviorally equivalent to the PostgreSQL adapters (alt-id lookup,
//! shallow merge-update, insertion-order listings) so handlers and
//! integration tests can run without a database.

mod click_store;
mod email_store;
mod response_store;
mod survey_store;
mod tracking_store;

pub use click_store::InMemoryClickStore;
pub use email_store::InMemoryEmailStore;
pub use response_store::InMemoryResponseStore;
pub use survey_store::InMemorySurveyStore;
pub use tracking_store::InMemoryTrackingStore;

/// Shallow-merges `fields` into `doc`, matching JSONB `||` semantics.
pub(crate) fn merge_document(doc: &mut serde_json::Value, fields: &serde_json::Value) {
    if let (Some(target), Some(updates)) = (doc.as_object_mut(), fields.as_object()) {
        for (key, value) in updates {
            target.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_replaces_top_level_keys_only() {
        let mut doc = json!({"a": 1, "nested": {"x": 1, "y": 2}});
        merge_document(&mut doc, &json!({"a": 2, "nested": {"x": 9}, "b": 3}));
        assert_eq!(doc, json!({"a": 2, "nested": {"x": 9}, "b": 3}));
    }
}
