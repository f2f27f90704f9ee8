//! Application handlers, grouped by API area.

pub mod partner;
pub mod response;
pub mod survey;
pub mod tracking;
