//! Error types for wallet and daemon RPC operations.
//!
//! Every failure mode surfaces as a variant of [`RpcError`], so callers can
//! distinguish locally-recoverable input mistakes from remote or network
//! failures and react accordingly.

use thiserror::Error;

/// Errors that can occur when invoking a wallet or daemon RPC operation.
///
/// # Error Categories
///
/// - **Input errors**: [`Validation`](RpcError::Validation) is raised before
///   any network I/O; fixing the inputs makes the call succeed.
/// - **Remote errors**: [`Rpc`](RpcError::Rpc), [`Server`](RpcError::Server),
///   and [`Unauthorized`](RpcError::Unauthorized) mean the daemon answered,
///   but with a failure.
/// - **Network errors**: [`Transport`](RpcError::Transport) and
///   [`Timeout`](RpcError::Timeout) mean no usable answer arrived.
/// - **Decoding errors**: [`Parse`](RpcError::Parse) means the answer was not
///   valid JSON.
///
/// No variant triggers an automatic retry; retry policy belongs to the
/// caller.
#[derive(Debug, Error)]
pub enum RpcError {
    /// A caller-supplied parameter failed its domain constraint.
    ///
    /// The message names the field and the violated constraint, e.g.
    /// `"paymentId must be 64-digit hexadecimal string"`. Raised before any
    /// request is sent, so there are no partial side effects.
    #[error("{0}")]
    Validation(String),

    /// The daemon rejected the request with HTTP 401.
    ///
    /// The response body is not parsed in this case.
    #[error("authorization failed")]
    Unauthorized,

    /// The response carried a JSON-RPC `error` object; the message is that
    /// object's `message` field.
    #[error("{0}")]
    Rpc(String),

    /// The response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The daemon returned an HTTP status outside 2xx/3xx (other than 401).
    #[error("server error: HTTP {status}")]
    Server {
        /// The HTTP status code returned by the daemon.
        status: reqwest::StatusCode,
    },

    /// The request could not be completed at the network level: connection
    /// refused, DNS failure, or an aborted request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The configured timeout elapsed before a response arrived. The
    /// in-flight request is aborted.
    #[error("request timed out")]
    Timeout,
}

impl RpcError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        RpcError::Validation(reason.into())
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout
        } else {
            RpcError::Transport(err.to_string())
        }
    }
}
