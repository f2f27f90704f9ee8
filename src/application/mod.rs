//! Application layer - commands, queries, and handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Each
//! use case is one handler with its command/query and result types.

pub mod handlers;
