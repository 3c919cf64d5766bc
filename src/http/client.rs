use std::time::Duration;

use log::debug;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ConfigError;
use crate::error::RpcError;

use super::envelope::{JsonRpcRequest, JsonRpcErrorObject};

/// Low-level transport shared by the wallet and daemon facades.
///
/// Holds the immutable endpoint configuration and one `reqwest::Client`
/// built with the configured timeout. Cheap to clone; safe to share across
/// concurrent calls.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    base_url: Url,
    auth: Option<(String, String)>,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: Url,
        auth: Option<(String, String)>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            auth,
            client,
        })
    }

    /// Wraps `params` in a JSON-RPC 2.0 envelope and posts it to `/json_rpc`.
    pub async fn json_rpc<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, RpcError> {
        debug!(method = method; "dispatching json-rpc request");
        let envelope = serde_json::to_value(JsonRpcRequest::new(method, params))?;
        self.request(Method::POST, "/json_rpc", Some(envelope)).await
    }

    /// Issues a bare GET against a legacy HTTP handler.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RpcError> {
        self.request(Method::GET, path, None).await
    }

    /// Posts a bare JSON body to a legacy HTTP handler, no envelope.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, RpcError> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, RpcError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        debug!(method:% = method, path = path; "http request");

        let mut request = self.client.request(method, url);
        if let Some((user, pass)) = &self.auth {
            request = request.basic_auth(user, Some(pass));
        }
        if let Some(body) = body {
            request = request
                .body(serde_json::to_string(&body)?)
                .header("Content-Type", "application/json");
        }

        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(RpcError::Unauthorized);
        }
        if !status.is_success() && !status.is_redirection() {
            return Err(RpcError::Server { status });
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        unwrap_body(value)
    }
}

/// Normalizes a parsed response body into the call's settlement.
///
/// A non-null top-level `error` rejects with that error's message; a
/// top-level `result` resolves with its value; anything else resolves with
/// the whole body.
fn unwrap_body<T: DeserializeOwned>(value: Value) -> Result<T, RpcError> {
    if let Some(error) = value.get("error") {
        if !error.is_null() {
            let detail: JsonRpcErrorObject = serde_json::from_value(error.clone())?;
            return Err(RpcError::Rpc(detail.message));
        }
    }

    let payload = match value {
        Value::Object(mut map) if map.contains_key("result") => {
            map.remove("result").unwrap_or(Value::Null)
        },
        other => other,
    };
    serde_json::from_value(payload).map_err(RpcError::Parse)
}
