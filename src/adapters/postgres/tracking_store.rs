//! PostgreSQL implementation of TrackingStore.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ResponseId, Timestamp};
use crate::domain::tracking::TrackingRecord;
use crate::ports::TrackingStore;

/// PostgreSQL implementation of TrackingStore.
#[derive(Clone)]
pub struct PostgresTrackingStore {
    pool: PgPool,
}

impl PostgresTrackingStore {
    /// Creates a new PostgresTrackingStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn read_record(row: sqlx::postgres::PgRow) -> Result<TrackingRecord, DomainError> {
        let doc: serde_json::Value = row.try_get("doc").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to read tracking document: {}", e),
            )
        })?;
        serde_json::from_value(doc).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Stored tracking document is malformed: {}", e),
            )
        })
    }
}

#[async_trait]
impl TrackingStore for PostgresTrackingStore {
    async fn insert(&self, record: &TrackingRecord) -> Result<(), DomainError> {
        let doc = serde_json::to_value(record).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize tracking record: {}", e),
            )
        })?;

        sqlx::query("INSERT INTO survey_tracking (id, doc) VALUES ($1, $2)")
            .bind(record.id().to_string())
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert tracking record: {}", e),
                )
            })?;

        Ok(())
    }

    async fn find(&self, tracking_id: &str) -> Result<Option<TrackingRecord>, DomainError> {
        let row = sqlx::query("SELECT doc FROM survey_tracking WHERE id = $1")
            .bind(tracking_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch tracking record: {}", e),
                )
            })?;

        row.map(Self::read_record).transpose()
    }

    async fn find_by_survey(&self, survey_id: &str) -> Result<Vec<TrackingRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT doc FROM survey_tracking WHERE doc->>'survey_id' = $1 ORDER BY created_at ASC",
        )
        .bind(survey_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch tracking records: {}", e),
            )
        })?;

        rows.into_iter().map(Self::read_record).collect()
    }

    async fn mark_submitted(
        &self,
        tracking_id: &str,
        response_id: &ResponseId,
    ) -> Result<(), DomainError> {
        let fields = json!({
            "submitted": true,
            "submitted_at": Timestamp::now(),
            "response_id": response_id,
        });

        let result = sqlx::query("UPDATE survey_tracking SET doc = doc || $2 WHERE id = $1")
            .bind(tracking_id)
            .bind(&fields)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update tracking record: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TrackingNotFound,
                format!("Tracking record not found: {}", tracking_id),
            )
            .with_detail("id", tracking_id));
        }

        Ok(())
    }
}
