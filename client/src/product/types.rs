//! Product domain types and notifications.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view of a product as returned by the list operation
///
/// Only the projected fields are modelled; any other fields the server
/// sends are ignored. The list itself is kept as raw JSON, see
/// [`ProductListState::products`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Long-form description
    #[serde(default)]
    pub description: String,
}

/// Notifications emitted around the product list request
///
/// Serialised with a `type` tag, e.g. `{"type":"LIST_DONE","isLoading":false}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductAction {
    /// The list request has started
    ListRequest {
        /// Loading flag supplied by the caller
        #[serde(rename = "isLoading")]
        is_loading: bool,
    },
    /// The server returned the list
    ListResponse {
        /// Server elements in server order, exactly as received
        list: Vec<Value>,
    },
    /// The list request has finished, whatever its outcome
    ListDone {
        /// Always `false` when emitted by `get_list`
        #[serde(rename = "isLoading")]
        is_loading: bool,
    },
}

/// UI state for the product list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListState {
    /// Whether a list request is in flight
    pub is_loading: bool,
    /// Last list received, untouched
    pub list: Vec<Value>,
}

impl ProductListState {
    /// Creates an empty, idle state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_loading: false,
            list: Vec::new(),
        }
    }

    /// Looks up an element of the last list by its `_id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.list
            .iter()
            .find(|element| element.get("_id").and_then(Value::as_str) == Some(id))
    }

    /// Elements of the last list that read as a [`Product`]
    ///
    /// Elements without a string `_id` are skipped.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.list
            .iter()
            .filter_map(|element| Product::deserialize(element).ok())
            .collect()
    }
}
