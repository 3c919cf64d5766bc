//! Typed async client for the Conceal wallet daemon (`walletd`) and node
//! daemon (`conceald`).
//!
//! Every remote capability is exposed as one async method on
//! [`WalletClient`] or [`DaemonClient`]. An operation validates its inputs
//! against the method's domain constraints, applies the configured defaults,
//! renames fields into the wire schema, and ships either a JSON-RPC 2.0
//! envelope to `/json_rpc` or a bare JSON body to a legacy handler path. The
//! outcome is a `Result`: the unwrapped remote result on success, an
//! [`RpcError`] naming the failing field, remote error, or transport failure
//! otherwise.
//!
//! # Example
//!
//! ```rust,no_run
//! use conceal_rpc::{ClientConfig, ClientOptions, DaemonClient, WalletClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_options(ClientOptions {
//!     daemon_host: Some("http://localhost".into()),
//!     daemon_rpc_port: Some(16000),
//!     wallet_host: Some("http://localhost".into()),
//!     wallet_rpc_port: Some(8070),
//!     ..Default::default()
//! })?;
//!
//! let wallet = WalletClient::new(&config)?;
//! let daemon = DaemonClient::new(&config)?;
//!
//! println!("wallet height: {}", wallet.height().await?.height);
//! println!("network height: {}", daemon.index().await?.height);
//! # Ok(())
//! # }
//! ```
//!
//! Clients are cheap to clone and safe to share across tasks: configuration
//! is immutable after construction and every call owns its own
//! request/response pair. Nothing is retried; retry policy belongs to the
//! caller.

pub mod config;
pub mod daemon;
pub mod error;
mod http;
pub mod units;
pub mod validate;
pub mod wallet;

pub use config::{ClientConfig, ClientOptions, ConfigError, ProtocolConstants};
pub use daemon::DaemonClient;
pub use error::RpcError;
pub use wallet::{Transfer, WalletClient};
