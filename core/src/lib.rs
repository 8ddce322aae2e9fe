//! # Storefront Core
//!
//! Core traits shared by the storefront client crates.
//!
//! ## Core Concepts
//!
//! - **State**: UI-facing state for a feature (product list, messages)
//! - **Action**: Notifications describing lifecycle events (`LIST_REQUEST`, `MESSAGE_SHOW`, ...)
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Dispatch**: The port data-access functions send their notifications to
//!
//! Fetch functions never import a store. They take a `Dispatch` implementation
//! as a parameter, so a `Store`, a channel, or a recording test double can all
//! consume the same notifications.
//!
//! ## Example
//!
//! ```
//! use storefront_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct LoadingState {
//!     is_loading: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum LoadingAction {
//!     Started,
//!     Finished,
//! }
//!
//! struct LoadingReducer;
//!
//! impl Reducer for LoadingReducer {
//!     type State = LoadingState;
//!     type Action = LoadingAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut LoadingState, action: LoadingAction, _env: &()) {
//!         state.is_loading = matches!(action, LoadingAction::Started);
//!     }
//! }
//!
//! let mut state = LoadingState::default();
//! LoadingReducer.reduce(&mut state, LoadingAction::Started, &());
//! assert!(state.is_loading);
//! ```

/// Reducer composition (state scoping, action projection, combining)
pub mod composition;

/// Reducer module - The core trait for state transitions
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
/// They are deterministic and testable without a runtime.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Apply an action to the state in place
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
    }
}

/// Environment module - Dependency injection traits
///
/// All outward-facing dependencies are abstracted behind traits and passed in
/// explicitly rather than reached through globals.
pub mod environment {
    use std::future::Future;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    /// Dispatch port - where lifecycle notifications are sent
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_core::environment::Dispatch;
    /// use tokio::sync::mpsc;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let (tx, mut rx) = mpsc::unbounded_channel::<&'static str>();
    /// tx.dispatch("LIST_REQUEST").await;
    /// assert_eq!(rx.recv().await, Some("LIST_REQUEST"));
    /// # });
    /// ```
    pub trait Dispatch<A>: Send + Sync {
        /// Deliver one action to the consumer
        ///
        /// Delivery is best-effort: the port has no error channel, so
        /// implementations log failures instead of returning them.
        fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send;
    }

    impl<A, D> Dispatch<A> for Arc<D>
    where
        D: Dispatch<A> + ?Sized,
    {
        fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
            (**self).dispatch(action)
        }
    }

    impl<A, D> Dispatch<A> for &D
    where
        D: Dispatch<A> + ?Sized,
    {
        fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
            (**self).dispatch(action)
        }
    }

    impl<A> Dispatch<A> for mpsc::UnboundedSender<A>
    where
        A: Send,
    {
        fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
            if self.send(action).is_err() {
                tracing::warn!("Dropped action: receiver closed");
            }
            std::future::ready(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::environment::Dispatch;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    #[derive(Debug, Clone, PartialEq)]
    enum Ping {
        One,
        Two,
    }

    #[tokio::test]
    async fn test_channel_dispatch_preserves_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let shared = Arc::new(tx);

        shared.dispatch(Ping::One).await;
        (&*shared).dispatch(Ping::Two).await;

        assert_eq!(rx.recv().await, Some(Ping::One));
        assert_eq!(rx.recv().await, Some(Ping::Two));
    }

    #[tokio::test]
    async fn test_channel_dispatch_after_close_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel::<Ping>();
        drop(rx);
        tx.dispatch(Ping::One).await;
    }
}
