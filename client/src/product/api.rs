//! Product data access over the RPC endpoint.
//!
//! `get_list` reports its progress through a dispatch port:
//!
//! ```text
//! LIST_REQUEST(is_loading) ─┬─ success: true  → LIST_RESPONSE(list) ─┐
//!                           ├─ success: false → MESSAGE_SHOW(text)  ─┼─→ LIST_DONE(false)
//!                           └─ transport error → (logged only)      ─┘
//! ```
//!
//! `get` emits nothing and hands the raw result back to the caller.

use crate::common::CommonAction;
use crate::product::types::ProductAction;
use serde_json::Value;
use storefront_core::environment::Dispatch;
use storefront_rpc::{RpcError, RpcRequest, RpcResponse, RpcTransport};
use thiserror::Error;

/// Operation name for the product list
pub const LIST_OPERATION: &str = "productList";

/// Operation name for a single product
pub const BY_ID_OPERATION: &str = "productById";

/// Fields projected by the list operation
pub const LIST_FIELDS: [&str; 3] = ["_id", "name", "description"];

/// Message shown when the server rejects the list request
pub const GENERIC_ERROR_MESSAGE: &str = "There was some error.";

/// Loading flag for an ordinary (non-silent) list fetch
pub const DEFAULT_IS_LOADING: bool = true;

/// Why a list fetch did not produce a list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Server answered with `success: false`
    #[error("Server rejected the product list request")]
    Rejected,

    /// The call failed below the application level
    #[error(transparent)]
    Transport(#[from] RpcError),

    /// `data` was present but not a list
    #[error("Product list payload is not a list: {0}")]
    Decode(String),
}

/// Request envelope for the product list
#[must_use]
pub fn list_request() -> RpcRequest {
    RpcRequest::new(LIST_OPERATION).with_fields(LIST_FIELDS)
}

/// Request envelope for one product
#[must_use]
pub fn by_id_request(product_id: &str) -> RpcRequest {
    RpcRequest::new(BY_ID_OPERATION).with_param("productId", product_id)
}

/// Product accessors bound to an RPC transport
#[derive(Clone, Debug)]
pub struct ProductApi<T> {
    transport: T,
}

impl<T> ProductApi<T>
where
    T: RpcTransport,
{
    /// Creates the accessors over `transport`
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the product list, reporting progress through `dispatcher`
    ///
    /// Dispatches `LIST_REQUEST { is_loading }`, then `LIST_RESPONSE` on
    /// success or `MESSAGE_SHOW` when the server rejects the request, and
    /// finally `LIST_DONE { is_loading: false }` exactly once. Transport
    /// failures are logged and produce no user-facing notification.
    ///
    /// # Errors
    ///
    /// The returned error mirrors the outcome for callers awaiting the
    /// fetch directly; notifications are dispatched either way.
    #[tracing::instrument(skip(self, dispatcher))]
    pub async fn get_list<D, A>(&self, dispatcher: &D, is_loading: bool) -> Result<(), ProductError>
    where
        D: Dispatch<A>,
        A: From<ProductAction> + From<CommonAction>,
    {
        dispatcher
            .dispatch(ProductAction::ListRequest { is_loading }.into())
            .await;

        let result = match self.fetch_list().await {
            Ok(list) => {
                tracing::debug!(count = list.len(), "Product list received");
                dispatcher
                    .dispatch(ProductAction::ListResponse { list }.into())
                    .await;
                Ok(())
            },
            Err(ProductError::Rejected) => {
                dispatcher
                    .dispatch(
                        CommonAction::MessageShow {
                            message: GENERIC_ERROR_MESSAGE.to_string(),
                        }
                        .into(),
                    )
                    .await;
                Err(ProductError::Rejected)
            },
            Err(error) => {
                tracing::error!(error = %error, "Product list request failed");
                Err(error)
            },
        };

        dispatcher
            .dispatch(ProductAction::ListDone { is_loading: false }.into())
            .await;

        result
    }

    /// Fetches one product by identifier
    ///
    /// No notifications are dispatched and the response is not interpreted.
    ///
    /// # Errors
    ///
    /// Transport errors are returned unmodified.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, product_id: &str) -> Result<RpcResponse, RpcError> {
        self.transport.call(by_id_request(product_id)).await
    }

    // Elements are forwarded untouched; only the outer shape is checked.
    async fn fetch_list(&self) -> Result<Vec<Value>, ProductError> {
        let response = self.transport.call(list_request()).await?;

        if !response.success {
            return Err(ProductError::Rejected);
        }

        match response.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(list)) => Ok(list),
            Some(other) => Err(ProductError::Decode(other.to_string())),
        }
    }
}
