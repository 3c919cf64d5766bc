//! Response types for node daemon operations.
//!
//! Block and transaction detail payloads (`f_*` methods) vary across daemon
//! versions and resolve to raw `serde_json::Value`; the stable shapes are
//! typed.

use serde::Deserialize;
use serde_json::Value;

/// `getblockcount` result.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockCountResponse {
    pub count: u64,
    pub status: String,
}

/// Block header as reported by the header queries.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    pub depth: u64,
    pub difficulty: u64,
    pub hash: String,
    pub height: u64,
    pub major_version: u64,
    pub minor_version: u64,
    pub nonce: u64,
    pub orphan_status: bool,
    pub prev_hash: String,
    pub reward: u64,
    pub timestamp: u64,
}

/// Envelope around a single block header.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeaderResponse {
    pub block_header: BlockHeader,
    pub status: String,
}

/// `getcurrencyid` result.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyIdResponse {
    pub currency_id_blob: String,
}

/// `getblocktemplate` result.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockTemplateResponse {
    pub blocktemplate_blob: String,
    pub difficulty: u64,
    pub height: u64,
    pub reserved_offset: u64,
    pub status: String,
}

/// Result of operations that only report a daemon status string
/// (`submitblock`, `/sendrawtransaction`, mining control).
#[derive(Debug, Clone, Deserialize)]
pub struct StatusOnlyResponse {
    pub status: String,
}

/// `/getheight` body.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonHeightResponse {
    pub height: u64,
    pub status: String,
}

/// `/getinfo` body. Fields beyond the stable core are kept raw.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    pub height: u64,
    pub difficulty: u64,
    pub tx_count: u64,
    pub tx_pool_size: u64,
    #[serde(default)]
    pub alt_blocks_count: u64,
    #[serde(default)]
    pub outgoing_connections_count: u64,
    #[serde(default)]
    pub incoming_connections_count: u64,
    #[serde(default)]
    pub last_known_block_index: u64,
    pub status: String,
}

/// `/gettransactions` body.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransactionsResponse {
    pub txs_as_hex: Vec<String>,
    #[serde(default)]
    pub missed_tx: Vec<String>,
    pub status: String,
}

/// Transaction pool listing; entries are version-dependent.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPoolResponse {
    pub transactions: Value,
    #[serde(default)]
    pub status: String,
}
