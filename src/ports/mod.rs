//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation Ports
//!
//! - `TextGenerator` - Port for the text-generation model
//!
//! ## Store Ports
//!
//! - `SurveyStore` - Survey document persistence
//! - `ResponseStore` - Respondent submission persistence
//! - `TrackingStore` - Survey view tracking
//! - `ClickStore` - Click and webhook audit logs
//! - `EmailStore` - Captured email addresses
//!
//! ## Outbound Ports
//!
//! - `PartnerForwarder` - Partner network notifications

mod click_store;
mod email_store;
mod partner_forwarder;
mod response_store;
mod survey_store;
mod text_generator;
mod tracking_store;

pub use click_store::ClickStore;
pub use email_store::EmailStore;
pub use partner_forwarder::{ForwardError, PartnerForwarder};
pub use response_store::ResponseStore;
pub use survey_store::SurveyStore;
pub use text_generator::{GeneratorError, GeneratorInfo, SamplingConfig, TextGenerator};
pub use tracking_store::TrackingStore;
