//! PostgreSQL implementation of EmailStore.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::tracking::EmailRecord;
use crate::ports::EmailStore;

/// PostgreSQL implementation of EmailStore.
#[derive(Clone)]
pub struct PostgresEmailStore {
    pool: PgPool,
}

impl PostgresEmailStore {
    /// Creates a new PostgresEmailStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailStore for PostgresEmailStore {
    async fn insert(&self, record: &EmailRecord) -> Result<(), DomainError> {
        let doc = serde_json::to_value(record).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize email record: {}", e),
            )
        })?;

        sqlx::query("INSERT INTO user_emails (id, doc) VALUES ($1, $2)")
            .bind(record.id())
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert email record: {}", e),
                )
            })?;

        Ok(())
    }
}
