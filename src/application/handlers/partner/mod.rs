//! Partner handlers.

mod handle_postback;

pub use handle_postback::{HandlePostbackHandler, PostbackCommand};
