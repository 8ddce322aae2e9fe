//! # Storefront RPC Client
//!
//! Client for an RPC-style API where every call is a JSON POST to one
//! endpoint, naming the server-side `operation` to run.
//!
//! ## Example
//!
//! ```no_run
//! use storefront_rpc::{RpcClient, RpcRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RpcClient::new("http://localhost:8000/");
//!
//!     let request = RpcRequest::new("productList")
//!         .with_fields(["_id", "name", "description"]);
//!
//!     let response = client.post(&request).await?;
//!     println!("success: {}, data: {:?}", response.success, response.data);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod error;

use std::future::Future;

// Re-export main types for convenience
pub use client::RpcClient;
pub use envelope::{RpcRequest, RpcResponse};
pub use error::RpcError;

/// Transport seam for issuing RPC calls
///
/// `RpcClient` is the HTTP implementation; tests substitute a scripted one.
pub trait RpcTransport: Send + Sync {
    /// Send one request and return the server's envelope
    ///
    /// # Errors
    ///
    /// Returns an [`RpcError`] when the call fails below the application
    /// level. A response with `success: false` is not an error here.
    fn call(&self, request: RpcRequest) -> impl Future<Output = Result<RpcResponse, RpcError>> + Send;
}

impl<T> RpcTransport for std::sync::Arc<T>
where
    T: RpcTransport + ?Sized,
{
    fn call(&self, request: RpcRequest) -> impl Future<Output = Result<RpcResponse, RpcError>> + Send {
        (**self).call(request)
    }
}
