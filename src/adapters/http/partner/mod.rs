//! Partner HTTP area.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PartnerHandlers;
pub use routes::partner_routes;
