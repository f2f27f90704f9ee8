//! Partner adapters - outbound forwarding to the partner network.

mod http_forwarder;
mod noop;
mod recording;

pub use http_forwarder::HttpPartnerForwarder;
pub use noop::NoopPartnerForwarder;
pub use recording::{PushedResponse, RecordingPartnerForwarder};
