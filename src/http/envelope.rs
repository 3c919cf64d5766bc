use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope.
///
/// The id is fixed at `"0"`: every call owns its own request/response pair,
/// so ids carry no correlation value.
#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'a str,
    params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: "0",
            method,
            params,
        }
    }
}

/// Error object carried in a JSON-RPC response. Only the message survives
/// into the rejection reason; a missing message still rejects.
#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcErrorObject {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_fixed_version_and_id() {
        let request = JsonRpcRequest::new("get_height", json!({}));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "jsonrpc": "2.0", "id": "0", "method": "get_height", "params": {} })
        );
    }

    #[test]
    fn array_params_pass_through() {
        let request = JsonRpcRequest::new("on_getblockhash", json!([123]));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["params"], json!([123]));
    }

    #[test]
    fn error_object_tolerates_missing_fields() {
        let err: JsonRpcErrorObject =
            serde_json::from_value(json!({ "code": -32000, "message": "boom" })).unwrap();
        assert_eq!(err.message, "boom");
        let bare: JsonRpcErrorObject = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.message, "");
    }
}
