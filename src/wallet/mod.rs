//! Wallet daemon (`walletd`) facade.
//!
//! One method per remote capability. Every operation validates its inputs,
//! applies the configured defaults, renames fields to the wire schema, and
//! dispatches a JSON-RPC envelope to the wallet daemon's `/json_rpc`
//! endpoint. Failures surface as [`RpcError`]; nothing is retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use conceal_rpc::{ClientConfig, ClientOptions, WalletClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_options(ClientOptions {
//!     wallet_host: Some("http://localhost".into()),
//!     wallet_rpc_port: Some(8070),
//!     ..Default::default()
//! })?;
//! let wallet = WalletClient::new(&config)?;
//!
//! let height = wallet.height().await?;
//! println!("wallet height: {}", height.height);
//! # Ok(())
//! # }
//! ```

mod options;
mod types;

pub use options::{
    CreateDepositOptions, EstimateFusionOptions, GetTransactionsOptions, MessagesOptions,
    ResetOptions, SendDepositOptions, SendFusionOptions, SendOptions, SendTransactionOptions,
    Transfer, is_valid_transfer,
};
pub use types::{
    AddressesResponse, BalanceResponse, CreateAddressResponse, EstimateFusionResponse,
    HeightResponse, SendResponse, SpendKeysResponse, StatusResponse, TransactionHashResponse,
    ViewKeyResponse, WalletBalanceResponse,
};

use serde_json::{Value, json};

use crate::config::{ClientConfig, ConfigError, ProtocolConstants};
use crate::error::RpcError;
use crate::http::HttpClient;
use crate::validate;

use options::{ADDRESS_REASON, PAYMENT_ID_REASON};

const HASH_REASON: &str = "hash must be 64-digit hexadecimal string";

/// Client for the Conceal wallet daemon.
///
/// Cheap to clone; configuration is immutable after construction and every
/// call owns its own request/response pair, so instances can be shared
/// freely across tasks.
#[derive(Debug, Clone)]
pub struct WalletClient {
    http: HttpClient,
    constants: ProtocolConstants,
}

impl WalletClient {
    /// Builds a wallet client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Fails when `walletHost` was not configured or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let url = config
            .wallet_url()
            .ok_or(ConfigError::MissingHost("walletHost"))?
            .clone();
        let http = HttpClient::new(url, config.wallet_auth().cloned(), config.timeout())?;
        Ok(Self {
            http,
            constants: config.constants().clone(),
        })
    }

    /// Current wallet blockchain height.
    pub async fn height(&self) -> Result<HeightResponse, RpcError> {
        self.http.json_rpc("get_height", json!({})).await
    }

    /// Wallet balance (legacy shape).
    pub async fn balance(&self) -> Result<BalanceResponse, RpcError> {
        self.http.json_rpc("getbalance", json!({})).await
    }

    /// Transaction messages received by the wallet.
    pub async fn messages(&self, opts: MessagesOptions) -> Result<Value, RpcError> {
        self.http.json_rpc("get_messages", opts.wire_params()).await
    }

    /// Incoming payments carrying the given payment id.
    pub async fn payments(&self, payment_id: &str) -> Result<Value, RpcError> {
        if !validate::is_hex64(payment_id) {
            return Err(RpcError::validation(PAYMENT_ID_REASON));
        }
        self.http
            .json_rpc("get_payments", json!({ "payment_id": payment_id }))
            .await
    }

    /// All transfers seen by the wallet.
    pub async fn transfers(&self) -> Result<Value, RpcError> {
        self.http.json_rpc("get_transfers", json!({})).await
    }

    /// Persists the wallet state to disk.
    pub async fn store(&self) -> Result<Value, RpcError> {
        self.http.json_rpc("store", json!({})).await
    }

    /// Resyncs the wallet, optionally replacing the view secret key.
    pub async fn reset(&self, opts: ResetOptions) -> Result<Value, RpcError> {
        self.http.json_rpc("reset", opts.wire_params()?).await
    }

    /// Sends a transfer to a single destination (legacy `transfer` RPC,
    /// decimal CCX amounts).
    pub async fn send(&self, opts: SendOptions) -> Result<SendResponse, RpcError> {
        let params = opts.wire_params(&self.constants)?;
        self.http.json_rpc("transfer", params).await
    }

    /// Sync status of the wallet daemon.
    pub async fn status(&self) -> Result<StatusResponse, RpcError> {
        self.http.json_rpc("getStatus", json!({})).await
    }

    /// Creates a fresh address in the container.
    pub async fn create_address(&self) -> Result<CreateAddressResponse, RpcError> {
        self.http.json_rpc("createAddress", json!({})).await
    }

    /// Removes an address from the container.
    pub async fn delete_address(&self, address: &str) -> Result<Value, RpcError> {
        if !validate::is_address(address) {
            return Err(RpcError::validation(ADDRESS_REASON));
        }
        self.http
            .json_rpc("deleteAddress", json!({ "address": address }))
            .await
    }

    /// All addresses in the container.
    pub async fn get_addresses(&self) -> Result<AddressesResponse, RpcError> {
        self.http.json_rpc("getAddresses", json!({})).await
    }

    /// Balance of one address.
    pub async fn get_balance(&self, address: &str) -> Result<WalletBalanceResponse, RpcError> {
        if !validate::is_address(address) {
            return Err(RpcError::validation(ADDRESS_REASON));
        }
        self.http
            .json_rpc("getBalance", json!({ "address": address }))
            .await
    }

    /// View secret key of the container.
    pub async fn get_view_secret_key(&self) -> Result<ViewKeyResponse, RpcError> {
        self.http.json_rpc("getViewKey", json!({})).await
    }

    /// Spend keys of one address.
    pub async fn get_spend_keys(&self, address: &str) -> Result<SpendKeysResponse, RpcError> {
        if !validate::is_address(address) {
            return Err(RpcError::validation(ADDRESS_REASON));
        }
        self.http
            .json_rpc("getSpendKeys", json!({ "address": address }))
            .await
    }

    /// One transaction by hash.
    pub async fn get_transaction(&self, hash: &str) -> Result<Value, RpcError> {
        if !validate::is_hex64(hash) {
            return Err(RpcError::validation(HASH_REASON));
        }
        self.http
            .json_rpc("getTransaction", json!({ "transactionHash": hash }))
            .await
    }

    /// Transactions in a block range, optionally filtered by address or
    /// payment id.
    pub async fn get_transactions(&self, opts: GetTransactionsOptions) -> Result<Value, RpcError> {
        self.http
            .json_rpc("getTransactions", opts.wire_params()?)
            .await
    }

    /// Sends a transaction to one or more destinations (raw atomic units).
    pub async fn send_transaction(
        &self,
        opts: SendTransactionOptions,
    ) -> Result<TransactionHashResponse, RpcError> {
        let params = opts.wire_params(&self.constants)?;
        self.http.json_rpc("sendTransaction", params).await
    }

    /// Creates a term deposit funded from one of the wallet's addresses.
    pub async fn create_deposit(
        &self,
        opts: CreateDepositOptions,
    ) -> Result<TransactionHashResponse, RpcError> {
        let params = opts.wire_params(&self.constants)?;
        self.http.json_rpc("createDeposit", params).await
    }

    /// Creates a deposit delivered to another address.
    pub async fn send_deposit(
        &self,
        opts: SendDepositOptions,
    ) -> Result<TransactionHashResponse, RpcError> {
        let params = opts.wire_params(&self.constants)?;
        self.http.json_rpc("sendDeposit", params).await
    }

    /// Details of one deposit.
    pub async fn get_deposit(&self, deposit_id: u64) -> Result<Value, RpcError> {
        self.http
            .json_rpc("getDeposit", json!({ "depositId": deposit_id }))
            .await
    }

    /// Withdraws an unlocked deposit.
    pub async fn withdraw_deposit(
        &self,
        deposit_id: u64,
    ) -> Result<TransactionHashResponse, RpcError> {
        self.http
            .json_rpc("withdrawDeposit", json!({ "depositId": deposit_id }))
            .await
    }

    /// Counts the outputs a fusion run at this threshold could consolidate.
    pub async fn estimate_fusion(
        &self,
        opts: EstimateFusionOptions,
    ) -> Result<EstimateFusionResponse, RpcError> {
        self.http
            .json_rpc("estimateFusion", opts.wire_params()?)
            .await
    }

    /// Sends a fusion transaction consolidating small outputs.
    pub async fn send_fusion_transaction(
        &self,
        opts: SendFusionOptions,
    ) -> Result<TransactionHashResponse, RpcError> {
        let params = opts.wire_params(&self.constants)?;
        self.http.json_rpc("sendFusionTransaction", params).await
    }
}
