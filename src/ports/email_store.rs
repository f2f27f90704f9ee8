//! Email store port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::tracking::EmailRecord;

/// Store port for captured email addresses.
#[async_trait]
pub trait EmailStore: Send + Sync {
    /// Insert a captured email address.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, record: &EmailRecord) -> Result<(), DomainError>;
}
