//! Survey store port.
//!
//! Surveys live in a document collection keyed by a string id, with
//! the same id repeated inside the document. Most lookups accept
//! either key; raw-document reads exist because edits can merge
//! arbitrary fields into a stored survey that the typed aggregate does
//! not model.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::survey::Survey;

/// Store port for survey documents.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Insert a freshly generated survey.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, survey: &Survey) -> Result<(), DomainError>;

    /// Find a survey by primary or embedded id.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &str) -> Result<Option<Survey>, DomainError>;

    /// Check whether a survey exists, by primary or embedded id.
    async fn exists(&self, id: &str) -> Result<bool, DomainError>;

    /// Fetch the raw stored document, looked up by embedded id only.
    ///
    /// The result carries every field the document has accumulated,
    /// including ones merged in by edits.
    async fn find_document(&self, id: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// All survey documents, newest first.
    async fn list_documents(&self) -> Result<Vec<serde_json::Value>, DomainError>;

    /// Merge fields into a stored survey, by primary or embedded id.
    ///
    /// # Errors
    ///
    /// - `SurveyNotFound` if no document matched
    /// - `DatabaseError` on persistence failure
    async fn merge_update(&self, id: &str, fields: serde_json::Value) -> Result<(), DomainError>;
}
