//! # Storefront Runtime
//!
//! The Store runtime that applies notifications to state.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer for every action, broadcasts
//!   each reduced action to subscribers
//! - **Dispatch**: `Store` implements the dispatch port, so data-access
//!   functions can report their notifications straight into it
//!
//! ## Example
//!
//! ```ignore
//! use storefront_runtime::Store;
//!
//! let store = Store::new(AppState::default(), app_reducer(), ());
//!
//! // Send an action
//! store.send(AppAction::from(ProductAction::ListDone { is_loading: false })).await;
//!
//! // Read state
//! let loading = store.state(|s| s.products.is_loading).await;
//! ```

/// Store module - The runtime for reducers
pub mod store {
    use std::future::Future;
    use std::sync::Arc;
    use storefront_core::{environment::Dispatch, reducer::Reducer};
    use tokio::sync::{RwLock, broadcast};

    /// Default capacity of the action broadcast channel
    pub const DEFAULT_BROADCAST_CAPACITY: usize = 64;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer
    /// 3. Environment (injected dependencies)
    /// 4. Action broadcast to observers
    ///
    /// Cloning a store is cheap; clones share state and subscribers.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        /// Every reduced action, in reduction order
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
        A: Clone + Send + Sync,
        S: Send + Sync,
        E: Send + Sync,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(initial_state, reducer, environment, DEFAULT_BROADCAST_CAPACITY)
        }

        /// Create a store with a custom action broadcast capacity
        ///
        /// Slow subscribers that fall more than `capacity` actions behind
        /// observe a lag error and skip ahead.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the write lock, then broadcasts the action
        /// to subscribers before releasing it. Concurrent `send()` calls
        /// serialize at the reducer.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) {
            metrics::counter!("store.actions.total").increment(1);

            let observed = action.clone();
            let mut state = self.state.write().await;

            let start = std::time::Instant::now();
            self.reducer.reduce(&mut *state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds").record(start.elapsed().as_secs_f64());

            // No subscribers is not an error
            if self.action_broadcast.send(observed).is_err() {
                tracing::trace!("Action reduced with no subscribers");
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.products.list.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to every action the store reduces
        ///
        /// Only actions sent after subscribing are received.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }
    }

    impl<S, A, E, R> Dispatch<A> for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
        A: Clone + Send + Sync,
        S: Send + Sync,
        E: Send + Sync,
    {
        fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
            self.send(action)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{environment::Dispatch, reducer::Reducer};

    #[derive(Debug, Clone)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
    }

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
            match action {
                TestAction::Increment => state.value += 1,
                TestAction::Decrement => state.value -= 1,
                TestAction::NoOp => {},
            }
        }
    }

    fn store() -> Store<TestState, TestAction, (), TestReducer> {
        Store::new(TestState { value: 0 }, TestReducer, ())
    }

    #[tokio::test]
    async fn test_store_creation() {
        assert_eq!(store().state(|s| s.value).await, 0);
    }

    #[tokio::test]
    async fn test_multiple_actions() {
        let store = store();

        store.send(TestAction::Increment).await;
        store.send(TestAction::Increment).await;
        store.send(TestAction::Decrement).await;
        store.send(TestAction::NoOp).await;

        assert_eq!(store.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    #[allow(clippy::panic)] // Tests are allowed to panic on failures
    async fn test_concurrent_sends() {
        let store = store();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.send(TestAction::Increment).await;
                })
            })
            .collect();

        for handle in handles {
            if let Err(e) = handle.await {
                panic!("concurrent send task panicked: {e}");
            }
        }

        assert_eq!(store.state(|s| s.value).await, 10);
    }

    #[tokio::test]
    async fn test_store_clone_shares_state() {
        let store1 = store();
        let store2 = store1.clone();

        store1.send(TestAction::Increment).await;
        assert_eq!(store2.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    async fn test_dispatch_reduces_action() {
        let store = store();

        store.dispatch(TestAction::Increment).await;

        assert_eq!(store.state(|s| s.value).await, 1);
    }

    #[tokio::test]
    async fn test_send_without_subscribers_still_reduces() {
        let store = store();
        drop(store.subscribe_actions());

        store.send(TestAction::Decrement).await;

        assert_eq!(store.state(|s| s.value).await, -1);
    }
}
