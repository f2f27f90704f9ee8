//! PostgreSQL implementation of SurveyStore.
//!
//! Surveys are stored as JSONB documents in the `surveys` table, keyed
//! by the survey id with the same id embedded in the document. Lookups
//! accept either form; merges use JSONB concatenation so edits can add
//! fields the typed aggregate does not model.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::Survey;
use crate::ports::SurveyStore;

/// PostgreSQL implementation of SurveyStore.
#[derive(Clone)]
pub struct PostgresSurveyStore {
    pool: PgPool,
}

impl PostgresSurveyStore {
    /// Creates a new PostgresSurveyStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyStore for PostgresSurveyStore {
    async fn insert(&self, survey: &Survey) -> Result<(), DomainError> {
        let doc = serde_json::to_value(survey).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize survey: {}", e),
            )
        })?;

        sqlx::query("INSERT INTO surveys (id, doc, created_at) VALUES ($1, $2, $3)")
            .bind(survey.id().to_string())
            .bind(&doc)
            .bind(survey.created_at().as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert survey: {}", e),
                )
            })?;

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Survey>, DomainError> {
        let row = sqlx::query("SELECT doc FROM surveys WHERE id = $1 OR doc->>'id' = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch survey: {}", e),
                )
            })?;

        match row {
            Some(row) => {
                let doc: serde_json::Value = row.try_get("doc").map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to read survey document: {}", e),
                    )
                })?;
                let survey = serde_json::from_value(doc).map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Stored survey document is malformed: {}", e),
                    )
                })?;
                Ok(Some(survey))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM surveys WHERE id = $1 OR doc->>'id' = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check survey existence: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn find_document(&self, id: &str) -> Result<Option<serde_json::Value>, DomainError> {
        let row = sqlx::query("SELECT doc FROM surveys WHERE doc->>'id' = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch survey document: {}", e),
                )
            })?;

        row.map(|row| row.try_get("doc"))
            .transpose()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to read survey document: {}", e),
                )
            })
    }

    async fn list_documents(&self) -> Result<Vec<serde_json::Value>, DomainError> {
        let rows = sqlx::query("SELECT doc FROM surveys ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list surveys: {}", e),
                )
            })?;

        rows.into_iter()
            .map(|row| {
                row.try_get("doc").map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to read survey document: {}", e),
                    )
                })
            })
            .collect()
    }

    async fn merge_update(&self, id: &str, fields: serde_json::Value) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE surveys SET doc = doc || $2 WHERE id = $1 OR doc->>'id' = $1",
        )
        .bind(id)
        .bind(&fields)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update survey: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SurveyNotFound,
                format!("Survey not found: {}", id),
            )
            .with_detail("id", id));
        }

        Ok(())
    }
}
