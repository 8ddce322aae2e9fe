//! Reducer for the product list state.

use crate::product::types::{ProductAction, ProductListState};
use storefront_core::reducer::Reducer;

/// Applies product list notifications to `ProductListState`
#[derive(Clone, Debug, Default)]
pub struct ProductListReducer;

impl Reducer for ProductListReducer {
    type State = ProductListState;
    type Action = ProductAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            ProductAction::ListRequest { is_loading } | ProductAction::ListDone { is_loading } => {
                state.is_loading = is_loading;
            },
            ProductAction::ListResponse { list } => {
                state.list = list;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Value, json};
    use storefront_testing::ReducerTest;

    fn product(id: &str) -> Value {
        json!({ "_id": id, "name": format!("Product {id}") })
    }

    #[test]
    fn test_request_sets_loading() {
        ReducerTest::new(ProductListReducer)
            .with_env(())
            .given_state(ProductListState::new())
            .when_action(ProductAction::ListRequest { is_loading: true })
            .then_state(|state| assert!(state.is_loading))
            .run();
    }

    #[test]
    fn test_silent_refresh_keeps_idle() {
        ReducerTest::new(ProductListReducer)
            .with_env(())
            .given_state(ProductListState::new())
            .when_action(ProductAction::ListRequest { is_loading: false })
            .then_state(|state| assert!(!state.is_loading))
            .run();
    }

    #[test]
    fn test_response_replaces_list() {
        ReducerTest::new(ProductListReducer)
            .with_env(())
            .given_state(ProductListState {
                is_loading: true,
                list: vec![product("old")],
            })
            .when_action(ProductAction::ListResponse {
                list: vec![product("a"), product("b")],
            })
            .then_state(|state| {
                assert_eq!(state.list.len(), 2);
                assert!(state.get("a").is_some());
                assert!(state.get("old").is_none());
                // Loading is only cleared by LIST_DONE
                assert!(state.is_loading);
            })
            .run();
    }

    #[test]
    fn test_response_keeps_elements_verbatim() {
        let list = vec![json!(1), json!({ "_id": 42 }), json!({ "name": "no id", "extra": [true] })];

        ReducerTest::new(ProductListReducer)
            .with_env(())
            .given_state(ProductListState::new())
            .when_action(ProductAction::ListResponse { list: list.clone() })
            .then_state(move |state| assert_eq!(state.list, list))
            .run();
    }

    #[test]
    fn test_full_cycle_ends_idle() {
        ReducerTest::new(ProductListReducer)
            .with_env(())
            .given_state(ProductListState::new())
            .when_actions([
                ProductAction::ListRequest { is_loading: true },
                ProductAction::ListResponse { list: vec![product("a")] },
                ProductAction::ListDone { is_loading: false },
            ])
            .then_state(|state| {
                assert!(!state.is_loading);
                assert_eq!(state.list, vec![product("a")]);
            })
            .run();
    }

    proptest! {
        #[test]
        fn prop_done_always_ends_idle(start_loading in any::<bool>(), request_loading in any::<bool>(), got_list in any::<bool>()) {
            let mut state = ProductListState { is_loading: start_loading, list: Vec::new() };
            let reducer = ProductListReducer;

            reducer.reduce(&mut state, ProductAction::ListRequest { is_loading: request_loading }, &());
            if got_list {
                reducer.reduce(&mut state, ProductAction::ListResponse { list: vec![product("p")] }, &());
            }
            reducer.reduce(&mut state, ProductAction::ListDone { is_loading: false }, &());

            prop_assert!(!state.is_loading);
            prop_assert_eq!(state.list.len(), usize::from(got_list));
        }
    }
}
