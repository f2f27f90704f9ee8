//! Tracking HTTP area.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TrackingHandlers;
pub use routes::tracking_routes;
