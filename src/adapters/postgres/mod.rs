//! PostgreSQL adapters - document-store implementations of the store ports.
//!
//! Each collection is a JSONB table (see [`schema::ensure_schema`]);
//! the adapters speak document semantics: insert, find by key or
//! embedded id, filter on a document field, merge-update.

mod click_store;
mod email_store;
mod response_store;
mod schema;
mod survey_store;
mod tracking_store;

pub use click_store::PostgresClickStore;
pub use email_store::PostgresEmailStore;
pub use response_store::PostgresResponseStore;
pub use schema::ensure_schema;
pub use survey_store::PostgresSurveyStore;
pub use tracking_store::PostgresTrackingStore;
