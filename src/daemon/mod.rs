//! Node daemon (`conceald`) facade.
//!
//! Covers both call styles the daemon exposes: JSON-RPC methods behind
//! `/json_rpc` (block and header queries, templates, submission) and the
//! legacy plain-HTTP handlers (`/getinfo`, `/getheight`, `/gettransactions`,
//! `/sendrawtransaction`, mining control), where the JSON params object is
//! the request body itself.

mod types;

pub use types::{
    BlockCountResponse, BlockHeader, BlockHeaderResponse, BlockTemplateResponse,
    CurrencyIdResponse, DaemonHeightResponse, InfoResponse, RawTransactionsResponse,
    StatusOnlyResponse, TransactionPoolResponse,
};

use serde_json::{Value, json};

use crate::config::{ClientConfig, ConfigError};
use crate::error::RpcError;
use crate::http::HttpClient;
use crate::validate;

const HASH_REASON: &str = "hash must be 64-digit hexadecimal string";

/// Options for `getblocktemplate`.
#[derive(Debug, Clone, Default)]
pub struct BlockTemplateOptions {
    /// Bytes reserved in the template for extra data; wire name
    /// `reserve_size`, at most 255.
    pub reserve_size: u64,
    /// Address collecting the block reward; wire name `wallet_address`.
    pub wallet_address: String,
}

/// Options for `/start_mining`.
#[derive(Debug, Clone, Default)]
pub struct StartMiningOptions {
    /// Address collecting mined rewards; wire name `miner_address`.
    pub address: String,
    /// Number of mining threads; wire name `threads_count`.
    pub threads: u64,
}

/// Client for the Conceal node daemon.
///
/// Cheap to clone and safe to share across tasks; the daemon endpoint never
/// requires authentication.
#[derive(Debug, Clone)]
pub struct DaemonClient {
    http: HttpClient,
}

impl DaemonClient {
    /// Builds a daemon client from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Fails when `daemonHost` was not configured or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let url = config
            .daemon_url()
            .ok_or(ConfigError::MissingHost("daemonHost"))?
            .clone();
        let http = HttpClient::new(url, None, config.timeout())?;
        Ok(Self { http })
    }

    /// Number of blocks in the chain.
    pub async fn count(&self) -> Result<BlockCountResponse, RpcError> {
        self.http.json_rpc("getblockcount", json!({})).await
    }

    /// Hash of the block at the given height. Array params on the wire.
    pub async fn block_hash_by_height(&self, height: u64) -> Result<String, RpcError> {
        self.http.json_rpc("on_getblockhash", json!([height])).await
    }

    /// Header of the block with the given hash.
    pub async fn block_header_by_hash(&self, hash: &str) -> Result<BlockHeaderResponse, RpcError> {
        if !validate::is_hex64(hash) {
            return Err(RpcError::validation(HASH_REASON));
        }
        self.http
            .json_rpc("getblockheaderbyhash", json!({ "hash": hash }))
            .await
    }

    /// Header of the block at the given height.
    pub async fn block_header_by_height(&self, height: u64) -> Result<BlockHeaderResponse, RpcError> {
        self.http
            .json_rpc("getblockheaderbyheight", json!({ "height": height }))
            .await
    }

    /// Header of the chain tip.
    pub async fn last_block_header(&self) -> Result<BlockHeaderResponse, RpcError> {
        self.http.json_rpc("getlastblockheader", json!({})).await
    }

    /// Full block details by hash.
    pub async fn block(&self, hash: &str) -> Result<Value, RpcError> {
        if !validate::is_hex64(hash) {
            return Err(RpcError::validation(HASH_REASON));
        }
        self.http.json_rpc("f_block_json", json!({ "hash": hash })).await
    }

    /// Abbreviated listing of the blocks leading up to a height.
    pub async fn blocks(&self, height: u64) -> Result<Value, RpcError> {
        self.http
            .json_rpc("f_blocks_list_json", json!({ "height": height }))
            .await
    }

    /// Full transaction details by hash.
    pub async fn transaction(&self, hash: &str) -> Result<Value, RpcError> {
        if !validate::is_hex64(hash) {
            return Err(RpcError::validation(HASH_REASON));
        }
        self.http
            .json_rpc("f_transaction_json", json!({ "hash": hash }))
            .await
    }

    /// Transactions currently in the mempool.
    pub async fn transaction_pool(&self) -> Result<TransactionPoolResponse, RpcError> {
        self.http
            .json_rpc("f_on_transactions_pool_json", json!({}))
            .await
    }

    /// Currency id blob of the chain.
    pub async fn currency_id(&self) -> Result<CurrencyIdResponse, RpcError> {
        self.http.json_rpc("getcurrencyid", json!({})).await
    }

    /// Block template for mining.
    pub async fn block_template(
        &self,
        opts: BlockTemplateOptions,
    ) -> Result<BlockTemplateResponse, RpcError> {
        if opts.reserve_size > 255 {
            return Err(RpcError::validation("0 <= reserveSize <= 255"));
        }
        if !validate::is_address(&opts.wallet_address) {
            return Err(RpcError::validation(
                "address must be 98-character string beginning with ccx",
            ));
        }
        self.http
            .json_rpc(
                "getblocktemplate",
                json!({
                    "reserve_size": opts.reserve_size,
                    "wallet_address": opts.wallet_address,
                }),
            )
            .await
    }

    /// Submits a mined block blob. Array params on the wire.
    pub async fn submit_block(&self, block: &str) -> Result<StatusOnlyResponse, RpcError> {
        if !validate::is_hex(block) {
            return Err(RpcError::validation("block must be a hexadecimal string"));
        }
        self.http.json_rpc("submitblock", json!([block])).await
    }

    /// Daemon and network info (plain handler).
    pub async fn info(&self) -> Result<InfoResponse, RpcError> {
        self.http.get("/getinfo").await
    }

    /// Chain height as the daemon sees it (plain handler).
    pub async fn index(&self) -> Result<DaemonHeightResponse, RpcError> {
        self.http.get("/getheight").await
    }

    /// Raw transaction blobs for the given hashes (plain handler).
    pub async fn transactions(&self, hashes: &[String]) -> Result<RawTransactionsResponse, RpcError> {
        if !validate::all(hashes, |h| validate::is_hex64(h)) {
            return Err(RpcError::validation(
                "hashes must be an array of 64-digit hexadecimal strings",
            ));
        }
        self.http
            .post_json("/gettransactions", json!({ "txs_hashes": hashes }))
            .await
    }

    /// Broadcasts a serialized transaction (plain handler).
    pub async fn send_raw_transaction(&self, hex: &str) -> Result<StatusOnlyResponse, RpcError> {
        if !validate::is_hex(hex) {
            return Err(RpcError::validation(
                "rawTransaction must be a hexadecimal string",
            ));
        }
        self.http
            .post_json("/sendrawtransaction", json!({ "tx_as_hex": hex }))
            .await
    }

    /// Starts mining to the given address (plain handler).
    pub async fn start_mining(&self, opts: StartMiningOptions) -> Result<StatusOnlyResponse, RpcError> {
        if !validate::is_address(&opts.address) {
            return Err(RpcError::validation(
                "address must be 98-character string beginning with ccx",
            ));
        }
        if opts.threads == 0 {
            return Err(RpcError::validation("threads must be a positive integer"));
        }
        self.http
            .post_json(
                "/start_mining",
                json!({
                    "miner_address": opts.address,
                    "threads_count": opts.threads,
                }),
            )
            .await
    }

    /// Stops mining (plain handler).
    pub async fn stop_mining(&self) -> Result<StatusOnlyResponse, RpcError> {
        self.http.post_json("/stop_mining", json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientOptions;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn daemon_for(server: &MockServer) -> DaemonClient {
        let config = ClientConfig::from_options(ClientOptions {
            daemon_host: Some(server.uri()),
            ..Default::default()
        })
        .unwrap();
        DaemonClient::new(&config).unwrap()
    }

    fn rpc_result(result: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0", "id": "0", "result": result
        }))
    }

    #[tokio::test]
    async fn block_hash_by_height_uses_array_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/json_rpc"))
            .and(body_json(json!({
                "jsonrpc": "2.0", "id": "0", "method": "on_getblockhash", "params": [123]
            })))
            .respond_with(rpc_result(json!("e".repeat(64))))
            .mount(&server)
            .await;

        let daemon = daemon_for(&server);
        let hash = daemon.block_hash_by_height(123).await.unwrap();
        assert_eq!(hash, "e".repeat(64));
    }

    #[tokio::test]
    async fn info_reads_the_plain_handler_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "height": 100, "difficulty": 250_000, "tx_count": 42,
                "tx_pool_size": 3, "status": "OK"
            })))
            .mount(&server)
            .await;

        let daemon = daemon_for(&server);
        let info = daemon.info().await.unwrap();
        assert_eq!(info.height, 100);
        assert_eq!(info.status, "OK");
    }

    #[tokio::test]
    async fn transactions_posts_a_bare_params_body() {
        let server = MockServer::start().await;
        let hashes = vec!["a".repeat(64), "b".repeat(64)];
        Mock::given(method("POST"))
            .and(path("/gettransactions"))
            .and(body_json(json!({ "txs_hashes": hashes })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "txs_as_hex": ["beef"], "missed_tx": [], "status": "OK"
            })))
            .mount(&server)
            .await;

        let daemon = daemon_for(&server);
        let response = daemon.transactions(&hashes).await.unwrap();
        assert_eq!(response.txs_as_hex, vec!["beef".to_string()]);
    }

    #[tokio::test]
    async fn invalid_hashes_reject_before_any_request() {
        let server = MockServer::start().await;
        let daemon = daemon_for(&server);

        let err = daemon.block("zz").await.unwrap_err();
        assert!(matches!(err, RpcError::Validation(msg) if msg == HASH_REASON));

        let err = daemon
            .transactions(&["not hex".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Validation(_)));

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn block_header_by_height_parses_the_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "jsonrpc": "2.0", "id": "0",
                "method": "getblockheaderbyheight", "params": { "height": 5 }
            })))
            .respond_with(rpc_result(json!({
                "block_header": {
                    "depth": 1, "difficulty": 1000, "hash": "f".repeat(64),
                    "height": 5, "major_version": 8, "minor_version": 0,
                    "nonce": 11, "orphan_status": false, "prev_hash": "0".repeat(64),
                    "reward": 6_000_000, "timestamp": 1_600_000_000u64
                },
                "status": "OK"
            })))
            .mount(&server)
            .await;

        let daemon = daemon_for(&server);
        let response = daemon.block_header_by_height(5).await.unwrap();
        assert_eq!(response.block_header.height, 5);
        assert!(!response.block_header.orphan_status);
    }

    #[tokio::test]
    async fn block_template_checks_reserve_size_bounds() {
        let server = MockServer::start().await;
        let daemon = daemon_for(&server);

        let err = daemon
            .block_template(BlockTemplateOptions {
                reserve_size: 256,
                wallet_address: format!("ccx{}", "7".repeat(95)),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Validation(msg) if msg == "0 <= reserveSize <= 255"));
    }
}
