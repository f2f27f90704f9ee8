//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `survey` - Prompt templates, the question parser and the survey aggregate
//! - `response` - Respondent submissions
//! - `branching` - Adaptive question reveal rules
//! - `tracking` - View tracking, click logs and saved emails

pub mod branching;
pub mod foundation;
pub mod response;
pub mod survey;
pub mod tracking;
