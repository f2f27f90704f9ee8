//! Adapters - implementations of the port interfaces.
//!
//! - `ai` - Text generator adapters (Gemini, mock)
//! - `http` - Inbound HTTP surface (axum)
//! - `memory` - In-memory stores for tests and local runs
//! - `partners` - Outbound partner forwarding
//! - `postgres` - JSONB document stores

pub mod ai;
pub mod http;
pub mod memory;
pub mod partners;
pub mod postgres;
