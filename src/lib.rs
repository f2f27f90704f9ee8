//! Survey Loom - AI-assisted survey generation backend.
//!
//! Turns a free-text prompt into a typed, themed survey by driving a text
//! generation model, parsing its numbered-list output into questions, and
//! serving adaptive question branching to respondents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
