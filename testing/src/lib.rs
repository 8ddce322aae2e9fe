//! # Storefront Testing
//!
//! Testing utilities for the storefront client crates.
//!
//! This crate provides:
//! - `ReducerTest`: Given-When-Then harness for reducers
//! - `RecordingDispatcher`: a dispatch port that records every action in order
//! - `MockTransport`: a scripted RPC transport that records every request
//!
//! ## Example
//!
//! ```ignore
//! use storefront_testing::{MockTransport, RecordingDispatcher};
//!
//! #[tokio::test]
//! async fn test_list_flow() {
//!     let transport = MockTransport::new().with_response(RpcResponse::ok(json!([])));
//!     let dispatcher = RecordingDispatcher::new();
//!
//!     ProductApi::new(transport).get_list(&dispatcher, true).await.ok();
//!
//!     assert_eq!(dispatcher.len(), 3);
//! }
//! ```


/// Mock implementations of the client's ports
pub mod mocks {
    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use storefront_core::environment::Dispatch;
    use storefront_rpc::{RpcError, RpcRequest, RpcResponse, RpcTransport};

    // A panicking test thread poisons the lock; later assertions should still see the data.
    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatcher that records actions instead of reducing them
    ///
    /// Clones share the same record.
    #[derive(Debug)]
    pub struct RecordingDispatcher<A> {
        actions: Arc<Mutex<Vec<A>>>,
    }

    impl<A> RecordingDispatcher<A> {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self {
                actions: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Number of recorded actions
        #[must_use]
        pub fn len(&self) -> usize {
            lock(&self.actions).len()
        }

        /// Whether nothing has been dispatched
        #[must_use]
        pub fn is_empty(&self) -> bool {
            lock(&self.actions).is_empty()
        }

        /// Take the recorded actions, leaving the record empty
        #[must_use]
        pub fn take(&self) -> Vec<A> {
            std::mem::take(&mut *lock(&self.actions))
        }
    }

    impl<A: Clone> RecordingDispatcher<A> {
        /// Snapshot of the recorded actions, in dispatch order
        #[must_use]
        pub fn actions(&self) -> Vec<A> {
            lock(&self.actions).clone()
        }
    }

    impl<A> Default for RecordingDispatcher<A> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<A> Clone for RecordingDispatcher<A> {
        fn clone(&self) -> Self {
            Self {
                actions: Arc::clone(&self.actions),
            }
        }
    }

    impl<A: Send> Dispatch<A> for RecordingDispatcher<A> {
        fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
            lock(&self.actions).push(action);
            std::future::ready(())
        }
    }

    /// Scripted RPC transport
    ///
    /// Replies with queued results in order and records each request.
    /// An exhausted script answers with `RpcError::RequestFailed`.
    #[derive(Debug, Clone, Default)]
    pub struct MockTransport {
        responses: Arc<Mutex<VecDeque<Result<RpcResponse, RpcError>>>>,
        requests: Arc<Mutex<Vec<RpcRequest>>>,
    }

    impl MockTransport {
        /// Create a transport with an empty script
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Builder: Queue a response
        #[must_use]
        pub fn with_response(self, response: RpcResponse) -> Self {
            self.push(Ok(response));
            self
        }

        /// Builder: Queue a transport failure
        #[must_use]
        pub fn with_error(self, error: RpcError) -> Self {
            self.push(Err(error));
            self
        }

        /// Queue a result
        pub fn push(&self, result: Result<RpcResponse, RpcError>) {
            lock(&self.responses).push_back(result);
        }

        /// Requests received so far, in order
        #[must_use]
        pub fn requests(&self) -> Vec<RpcRequest> {
            lock(&self.requests).clone()
        }
    }

    impl RpcTransport for MockTransport {
        fn call(&self, request: RpcRequest) -> impl Future<Output = Result<RpcResponse, RpcError>> + Send {
            lock(&self.requests).push(request);
            let result = lock(&self.responses).pop_front().unwrap_or_else(|| {
                Err(RpcError::RequestFailed("no scripted response".to_string()))
            });
            std::future::ready(result)
        }
    }
}

// Re-export commonly used items
pub use mocks::{MockTransport, RecordingDispatcher};
pub use reducer_test::ReducerTest;
