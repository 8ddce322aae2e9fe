//! Error types for the RPC client

use thiserror::Error;

/// Errors that can occur below the application level of an RPC call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// HTTP request failed (connection, timeout, client construction)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success HTTP status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body was not a valid envelope
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),
}
