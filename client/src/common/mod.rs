//! User-facing messages shared across features.

pub mod reducer;
pub mod types;

pub use reducer::MessageReducer;
pub use types::{CommonAction, MessageState};
