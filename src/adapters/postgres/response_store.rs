//! PostgreSQL implementation of ResponseStore.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::response::SurveyResponse;
use crate::ports::ResponseStore;

/// PostgreSQL implementation of ResponseStore.
#[derive(Clone)]
pub struct PostgresResponseStore {
    pool: PgPool,
}

impl PostgresResponseStore {
    /// Creates a new PostgresResponseStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn read_doc(row: sqlx::postgres::PgRow) -> Result<serde_json::Value, DomainError> {
        row.try_get("doc").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to read response document: {}", e),
            )
        })
    }
}

#[async_trait]
impl ResponseStore for PostgresResponseStore {
    async fn insert(&self, response: &SurveyResponse) -> Result<(), DomainError> {
        let doc = serde_json::to_value(response).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize response: {}", e),
            )
        })?;

        sqlx::query("INSERT INTO responses (id, doc, created_at) VALUES ($1, $2, $3)")
            .bind(response.id().to_string())
            .bind(&doc)
            .bind(response.submitted_at().as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert response: {}", e),
                )
            })?;

        Ok(())
    }

    async fn find_by_survey(
        &self,
        survey_id: &str,
    ) -> Result<Vec<serde_json::Value>, DomainError> {
        let rows = sqlx::query(
            "SELECT doc FROM responses WHERE doc->>'survey_id' = $1 ORDER BY created_at ASC",
        )
        .bind(survey_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch responses: {}", e),
            )
        })?;

        rows.into_iter().map(Self::read_doc).collect()
    }

    async fn list_documents(&self) -> Result<Vec<serde_json::Value>, DomainError> {
        let rows = sqlx::query("SELECT doc FROM responses ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list responses: {}", e),
                )
            })?;

        rows.into_iter().map(Self::read_doc).collect()
    }

    async fn find_pending_by_tracking(
        &self,
        tracking_id: &str,
    ) -> Result<Option<serde_json::Value>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT doc FROM responses
            WHERE doc->>'tracking_id' = $1 AND doc->>'status' = 'pending'
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(tracking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch pending response: {}", e),
            )
        })?;

        row.map(Self::read_doc).transpose()
    }

    async fn merge_update(&self, id: &str, fields: serde_json::Value) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE responses SET doc = doc || $2 WHERE id = $1 OR doc->>'id' = $1",
        )
        .bind(id)
        .bind(&fields)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update response: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ResponseNotFound,
                format!("Response not found: {}", id),
            )
            .with_detail("id", id));
        }

        Ok(())
    }
}
