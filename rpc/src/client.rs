//! HTTP implementation of the RPC transport

use crate::{
    RpcTransport,
    envelope::{RpcRequest, RpcResponse},
    error::RpcError,
};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// RPC client posting envelopes to a single endpoint
#[derive(Clone, Debug)]
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    /// Create a client with default `reqwest` settings
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `RpcError::RequestFailed` if the HTTP client cannot be built
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint every request is posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one request envelope
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx statuses, or bodies that
    /// are not a `{success, data}` envelope
    #[tracing::instrument(skip(self, request), fields(operation = %request.operation))]
    pub async fn post(&self, request: &RpcRequest) -> Result<RpcResponse, RpcError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RpcError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope = response
            .json::<RpcResponse>()
            .await
            .map_err(|e| RpcError::ResponseParseFailed(e.to_string()))?;

        tracing::debug!(success = envelope.success, "RPC call completed");
        Ok(envelope)
    }
}

impl RpcTransport for RpcClient {
    fn call(&self, request: RpcRequest) -> impl Future<Output = Result<RpcResponse, RpcError>> + Send {
        async move { self.post(&request).await }
    }
}
