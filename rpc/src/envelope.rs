//! Request and response envelopes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request sent to the RPC endpoint
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    /// Server-side operation to invoke (e.g. `"productList"`)
    pub operation: String,
    /// Fields to project in the result (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Operation parameters (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl RpcRequest {
    /// Create a request for an operation with no fields or params
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            fields: None,
            params: None,
        }
    }

    /// Builder: Set the projected fields
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: Add one parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Envelope returned by the RPC endpoint
///
/// Only `success` is interpreted; `data` is passed through untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RpcResponse {
    /// Whether the operation succeeded on the server
    pub success: bool,
    /// Operation result (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Successful response carrying `data`
    #[must_use]
    pub const fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }

    /// Application-level failure with no data
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_request_omits_absent_members() {
        let body = serde_json::to_value(RpcRequest::new("productList")).unwrap();
        assert_eq!(body, json!({ "operation": "productList" }));
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_request_builder_shapes() {
        let list = RpcRequest::new("productList").with_fields(["_id", "name"]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({ "operation": "productList", "fields": ["_id", "name"] })
        );

        let by_id = RpcRequest::new("productById").with_param("productId", "abc");
        assert_eq!(
            serde_json::to_value(&by_id).unwrap(),
            json!({ "operation": "productById", "params": { "productId": "abc" } })
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_response_data_is_optional() {
        let response: RpcResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(response, RpcResponse::failed());

        let response: RpcResponse =
            serde_json::from_value(json!({ "success": true, "data": [1, 2] })).unwrap();
        assert_eq!(response, RpcResponse::ok(json!([1, 2])));
    }
}
