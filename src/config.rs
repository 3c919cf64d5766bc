//! Client configuration.
//!
//! A [`ClientConfig`] is built once from [`ClientOptions`] and never mutated
//! afterwards; every request reads from it. Construction is the only place
//! configuration errors can occur, and they are fatal: a client without a
//! usable endpoint cannot issue any call.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Errors raised while constructing a [`ClientConfig`] or a client from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A host was given without an `http://` or `https://` scheme.
    #[error("{0} must begin with http:// or https://")]
    MissingScheme(&'static str),

    /// A host could not be parsed as a URL.
    #[error("invalid {0}: {1}")]
    InvalidUrl(&'static str, url::ParseError),

    /// A client was requested for a target whose host was not configured.
    #[error("{0} is required")]
    MissingHost(&'static str),

    /// The underlying HTTP client could not be initialized.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Protocol-generation constants used for defaulting and bounds checks.
///
/// Historical deployments disagree on mixin bounds, default fee, and unlock
/// height, so these are injected per client rather than hardcoded at call
/// sites. The defaults target the current network generation; a deployment
/// tracking an older daemon overrides them in [`ClientOptions::constants`].
#[derive(Debug, Clone)]
pub struct ProtocolConstants {
    /// Smallest accepted mixin (anonymity) value.
    pub mixin_min: u64,
    /// Largest accepted mixin value.
    pub mixin_max: u64,
    /// Mixin applied when the caller omits one.
    pub default_mixin: u64,
    /// Unlock height applied when the caller omits one.
    pub default_unlock_height: u64,
    /// Base fee per transfer, in atomic units.
    pub base_fee: u64,
    /// Additional fee per message character, in atomic units.
    pub per_message_char_fee: u64,
    /// Number of decimal places in one CCX (10^6 atomic units per CCX).
    pub decimal_places: u32,
}

impl Default for ProtocolConstants {
    fn default() -> Self {
        Self {
            mixin_min: 0,
            mixin_max: 10,
            default_mixin: 2,
            default_unlock_height: 0,
            base_fee: 1000,
            per_message_char_fee: 10,
            decimal_places: 6,
        }
    }
}

/// Caller-facing construction options.
///
/// Hosts must carry an explicit `http://` or `https://` scheme. A missing
/// port falls back to the scheme default (80 or 443). Basic auth applies to
/// the wallet daemon only and is attached when both user and pass are set.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Node daemon base URL, e.g. `http://localhost`.
    pub daemon_host: Option<String>,
    /// Wallet daemon base URL.
    pub wallet_host: Option<String>,
    /// Node daemon RPC port; scheme default when omitted.
    pub daemon_rpc_port: Option<u16>,
    /// Wallet daemon RPC port; scheme default when omitted.
    pub wallet_rpc_port: Option<u16>,
    /// Wallet daemon basic-auth user.
    pub wallet_rpc_user: Option<String>,
    /// Wallet daemon basic-auth password.
    pub wallet_rpc_pass: Option<String>,
    /// Per-request timeout; defaults to 5 seconds.
    pub timeout: Option<Duration>,
    /// Protocol constants override; defaults to the current generation.
    pub constants: Option<ProtocolConstants>,
}

/// Immutable, per-client-instance configuration.
///
/// Shared read-only by every request the clients issue; safe to use across
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    daemon_url: Option<Url>,
    wallet_url: Option<Url>,
    wallet_auth: Option<(String, String)>,
    timeout: Duration,
    constants: ProtocolConstants,
}

impl ClientConfig {
    /// Resolves [`ClientOptions`] into a fixed configuration.
    ///
    /// # Errors
    ///
    /// Fails when a configured host lacks a scheme or cannot be parsed as a
    /// URL.
    pub fn from_options(opts: ClientOptions) -> Result<Self, ConfigError> {
        let daemon_url = opts
            .daemon_host
            .as_deref()
            .map(|host| endpoint(host, opts.daemon_rpc_port, "daemonHost"))
            .transpose()?;
        let wallet_url = opts
            .wallet_host
            .as_deref()
            .map(|host| endpoint(host, opts.wallet_rpc_port, "walletHost"))
            .transpose()?;

        let wallet_auth = match (opts.wallet_rpc_user, opts.wallet_rpc_pass) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        };

        Ok(Self {
            daemon_url,
            wallet_url,
            wallet_auth,
            timeout: opts.timeout.unwrap_or(DEFAULT_TIMEOUT),
            constants: opts.constants.unwrap_or_default(),
        })
    }

    pub fn daemon_url(&self) -> Option<&Url> {
        self.daemon_url.as_ref()
    }

    pub fn wallet_url(&self) -> Option<&Url> {
        self.wallet_url.as_ref()
    }

    pub fn wallet_auth(&self) -> Option<&(String, String)> {
        self.wallet_auth.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn constants(&self) -> &ProtocolConstants {
        &self.constants
    }
}

fn endpoint(host: &str, port: Option<u16>, which: &'static str) -> Result<Url, ConfigError> {
    if !host.starts_with("http://") && !host.starts_with("https://") {
        return Err(ConfigError::MissingScheme(which));
    }

    let mut url = Url::parse(host).map_err(|e| ConfigError::InvalidUrl(which, e))?;
    if let Some(port) = port {
        url.set_port(Some(port))
            .map_err(|_| ConfigError::InvalidUrl(which, url::ParseError::InvalidPort))?;
    }
    Ok(url)
}
