//! Response types for wallet daemon operations.
//!
//! Only stable, documented result shapes are typed; operations whose results
//! are deep or version-dependent (transfer listings, deposit details) resolve
//! to raw `serde_json::Value`.

use serde::Deserialize;

/// `get_height` result.
#[derive(Debug, Clone, Deserialize)]
pub struct HeightResponse {
    pub height: u64,
}

/// `getbalance` result (legacy snake_case shape).
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub available_balance: u64,
    pub locked_amount: u64,
}

/// `getStatus` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub block_count: u64,
    pub known_block_count: u64,
    pub last_block_hash: String,
    pub peer_count: u64,
}

/// `transfer` result.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResponse {
    pub tx_hash: String,
}

/// `createAddress` result.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddressResponse {
    pub address: String,
}

/// `getAddresses` result.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressesResponse {
    pub addresses: Vec<String>,
}

/// `getBalance` result (camelCase walletd shape).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    pub available_balance: u64,
    pub locked_amount: u64,
}

/// `getViewKey` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewKeyResponse {
    pub view_secret_key: String,
}

/// `getSpendKeys` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendKeysResponse {
    pub spend_secret_key: String,
    pub spend_public_key: String,
}

/// Result of the operations that settle into a single transaction hash
/// (`sendTransaction`, deposits, fusion sends).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHashResponse {
    pub transaction_hash: String,
}

/// `estimateFusion` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateFusionResponse {
    pub fusion_ready_count: u64,
    pub total_output_count: u64,
}
