//! Application-level state, actions and store wiring.
//!
//! Feature reducers are scoped onto their slice of `AppState` and combined,
//! so one `Store` receives every notification `ProductApi` dispatches.

use crate::common::{CommonAction, MessageReducer, MessageState};
use crate::product::{ProductAction, ProductListReducer, ProductListState};
use serde::{Deserialize, Serialize};
use storefront_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use storefront_runtime::Store;

/// Every notification the application reduces
///
/// Serialises as the wrapped feature action, without an extra tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppAction {
    /// Product list notifications
    Product(ProductAction),
    /// Message notifications
    Common(CommonAction),
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self {
        Self::Product(action)
    }
}

impl From<CommonAction> for AppAction {
    fn from(action: CommonAction) -> Self {
        Self::Common(action)
    }
}

/// Application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Product list slice
    pub products: ProductListState,
    /// Message area slice
    pub common: MessageState,
}

/// Root reducer type
pub type AppReducer = CombinedReducer<AppState, AppAction, ()>;

/// Store over the root reducer
pub type AppStore = Store<AppState, AppAction, (), AppReducer>;

fn products(state: &mut AppState) -> &mut ProductListState {
    &mut state.products
}

fn common(state: &mut AppState) -> &mut MessageState {
    &mut state.common
}

fn product_action(action: AppAction) -> Option<ProductAction> {
    match action {
        AppAction::Product(action) => Some(action),
        AppAction::Common(_) => None,
    }
}

fn common_action(action: AppAction) -> Option<CommonAction> {
    match action {
        AppAction::Common(action) => Some(action),
        AppAction::Product(_) => None,
    }
}

/// Builds the root reducer from the feature reducers
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(ProductListReducer, products, product_action)),
        Box::new(scope_reducer(MessageReducer, common, common_action)),
    ])
}

/// Creates a store with empty state
#[must_use]
pub fn new_store() -> AppStore {
    Store::new(AppState::default(), app_reducer(), ())
}
