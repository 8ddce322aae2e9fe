//! Message notification and state.

use serde::{Deserialize, Serialize};

/// Notifications for the shared message area
///
/// Serialised with a `type` tag, e.g. `{"type":"MESSAGE_SHOW","message":"..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommonAction {
    /// Show `message` to the user
    MessageShow {
        /// Text to display
        message: String,
    },
    /// Dismiss the current message
    MessageHide,
}

/// The message currently shown, if any
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageState {
    /// Last text shown; kept after hiding
    pub text: Option<String>,
    /// Whether the message is visible
    pub open: bool,
}
