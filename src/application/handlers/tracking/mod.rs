//! Tracking handlers.

mod record_webhook;
mod save_email;
mod start_tracking;
mod tracking_stats;

pub use record_webhook::RecordWebhookHandler;
pub use save_email::SaveEmailHandler;
pub use start_tracking::{StartTrackingCommand, StartTrackingHandler};
pub use tracking_stats::TrackingStatsHandler;
