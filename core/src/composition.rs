//! Reducer composition utilities
//!
//! - **`scope_reducer`**: Run a child reducer on one field of a parent state,
//!   for the subset of parent actions that wrap child actions
//! - **`combine_reducers`**: Run several reducers on the same state/action
//!
//! # Examples
//!
//! ```
//! use storefront_core::composition::{combine_reducers, scope_reducer};
//! use storefront_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Counter, _action: CounterAction, _env: &()) {
//!         state.count += 1;
//!     }
//! }
//!
//! #[derive(Clone, Debug, Default)]
//! struct App {
//!     left: Counter,
//!     right: Counter,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Left(CounterAction),
//!     Right(CounterAction),
//! }
//!
//! let app = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         CounterReducer,
//!         |app: &mut App| &mut app.left,
//!         |action| match action { AppAction::Left(a) => Some(a), AppAction::Right(_) => None },
//!     )),
//!     Box::new(scope_reducer(
//!         CounterReducer,
//!         |app: &mut App| &mut app.right,
//!         |action| match action { AppAction::Right(a) => Some(a), AppAction::Left(_) => None },
//!     )),
//! ]);
//!
//! let mut state = App::default();
//! app.reduce(&mut state, AppAction::Left(CounterAction::Increment), &());
//! assert_eq!(state.left.count, 1);
//! assert_eq!(state.right.count, 0);
//! ```

use crate::reducer::Reducer;

/// Boxed reducer accepted by [`combine_reducers`]
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer sees every action, in registration order.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a child reducer to a field of the parent state and a subset of
/// the parent actions.
///
/// - `state`: borrows the child state out of the parent
/// - `extract`: returns the child action wrapped by a parent action, if any
///
/// Parent actions for which `extract` returns `None` leave the state untouched.
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    state: fn(&mut S) -> &mut SubS,
    extract: fn(A) -> Option<SubA>,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        state,
        extract,
    }
}

/// A reducer running a child reducer on part of a larger state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    state: fn(&mut S) -> &mut SubS,
    extract: fn(A) -> Option<SubA>,
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        if let Some(child_action) = (self.extract)(action) {
            self.reducer.reduce((self.state)(state), child_action, env);
        }
    }
}
