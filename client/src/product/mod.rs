//! Product catalogue: types, list reducer, and RPC accessors.

pub mod api;
pub mod reducer;
pub mod types;

pub use api::{DEFAULT_IS_LOADING, ProductApi, ProductError, by_id_request, list_request};
pub use reducer::ProductListReducer;
pub use types::{Product, ProductAction, ProductListState};
