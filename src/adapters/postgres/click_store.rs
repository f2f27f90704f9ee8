//! PostgreSQL implementation of ClickStore.
//!
//! Identified survey-link clicks land in `survey_clicks`; raw partner
//! webhook payloads land in `clicks`. Neither is ever read back by the
//! service, they exist for offline analysis.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::tracking::SurveyClick;
use crate::ports::ClickStore;

/// PostgreSQL implementation of ClickStore.
#[derive(Clone)]
pub struct PostgresClickStore {
    pool: PgPool,
}

impl PostgresClickStore {
    /// Creates a new PostgresClickStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickStore for PostgresClickStore {
    async fn record_survey_click(&self, click: &SurveyClick) -> Result<(), DomainError> {
        let doc = serde_json::to_value(click).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize click: {}", e),
            )
        })?;

        sqlx::query("INSERT INTO survey_clicks (id, doc) VALUES ($1, $2)")
            .bind(Uuid::new_v4().to_string())
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert survey click: {}", e),
                )
            })?;

        Ok(())
    }

    async fn record_webhook_event(&self, payload: serde_json::Value) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO clicks (id, doc) VALUES ($1, $2)")
            .bind(Uuid::new_v4().to_string())
            .bind(&payload)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert webhook event: {}", e),
                )
            })?;

        Ok(())
    }
}
