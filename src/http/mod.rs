//! HTTP transport for daemon communication.
//!
//! One [`HttpClient`] per facade client: it owns the endpoint URL, optional
//! basic-auth credentials, and the request timeout, and it normalizes every
//! outcome into the crate's [`RpcError`](crate::error::RpcError) taxonomy.
//! Requests come in two shapes, a JSON-RPC 2.0 envelope posted to
//! `/json_rpc` and bare JSON against legacy handler paths; responses are
//! classified by HTTP status, then by the parsed body's `error`/`result`
//! fields. Exactly one outcome per call; no retries at this layer.

mod client;
mod envelope;

pub(crate) use client::HttpClient;
