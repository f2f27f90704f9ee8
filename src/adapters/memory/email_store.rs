//! In-memory implementation of EmailStore.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::tracking::EmailRecord;
use crate::ports::EmailStore;

/// In-memory email store. Exposes the saved records for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailStore {
    records: Arc<RwLock<Vec<EmailRecord>>>,
}

impl InMemoryEmailStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All saved email records.
    pub async fn records(&self) -> Vec<EmailRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl EmailStore for InMemoryEmailStore {
    async fn insert(&self, record: &EmailRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saves_records_in_order() {
        let store = InMemoryEmailStore::new();
        store.insert(&EmailRecord::new("a@b.com")).await.unwrap();
        store.insert(&EmailRecord::new("c@d.com")).await.unwrap();

        let records = store.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email(), "a@b.com");
    }
}
