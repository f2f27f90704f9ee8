//! Document-store schema bootstrap.
//!
//! Every collection is one table with the same shape: a string key, a
//! JSONB document and an insertion timestamp. The bootstrap is
//! idempotent and runs at startup; there is no migration machinery.

use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Collection tables, in creation order.
const COLLECTIONS: &[&str] = &[
    "surveys",
    "responses",
    "survey_tracking",
    "user_emails",
    "clicks",
    "survey_clicks",
];

/// Creates any missing collection tables.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    for table in COLLECTIONS {
        let statement = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY,
                doc JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
            table
        );
        sqlx::query(&statement).execute(pool).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to create table {}: {}", table, e),
            )
        })?;
    }

    tracing::debug!(tables = COLLECTIONS.len(), "document store schema ensured");
    Ok(())
}
