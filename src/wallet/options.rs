//! Per-operation option structures for the wallet facade.
//!
//! Each structure validates its recognized fields in a fixed order (first
//! failing field wins), applies the configured defaults, and renames
//! caller-facing names to the wire schema. All of that happens before any
//! network I/O.

use serde_json::{json, Map, Value};

use crate::config::ProtocolConstants;
use crate::error::RpcError;
use crate::units;
use crate::validate;

pub(crate) const ADDRESS_REASON: &str = "address must be 98-character string beginning with ccx";
pub(crate) const PAYMENT_ID_REASON: &str = "paymentId must be 64-digit hexadecimal string";

/// One destination of a send-style operation.
///
/// Amounts are raw atomic units; non-negativity is carried by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Destination address, 98 characters with the `ccx` prefix.
    pub address: String,
    /// Amount in raw atomic units.
    pub amount: u64,
    /// Optional message delivered with the transfer.
    pub message: Option<String>,
}

impl Transfer {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Address and amount hold their constraints; an absent message is fine.
pub fn is_valid_transfer(transfer: &Transfer) -> bool {
    validate::is_address(&transfer.address)
}

/// Mixin falls back to the configured default and must stay inside the
/// deployment's inclusive bounds.
fn resolve_mixin(mix_in: Option<u64>, constants: &ProtocolConstants) -> Result<u64, RpcError> {
    let mixin = mix_in.unwrap_or(constants.default_mixin);
    if mixin < constants.mixin_min || mixin > constants.mixin_max {
        return Err(RpcError::validation(format!(
            "{} <= mixIn <= {}",
            constants.mixin_min, constants.mixin_max
        )));
    }
    Ok(mixin)
}

/// Default fee: base fee per transfer plus the per-character message fee
/// over every transfer carrying a message.
fn computed_fee(transfers: &[Transfer], constants: &ProtocolConstants) -> u64 {
    let message_chars: u64 = transfers
        .iter()
        .filter_map(|t| t.message.as_ref())
        .map(|m| m.len() as u64)
        .sum();
    constants.base_fee * transfers.len() as u64 + message_chars * constants.per_message_char_fee
}

fn transfer_value(transfer: &Transfer) -> Value {
    let mut value = json!({
        "address": transfer.address,
        "amount": transfer.amount,
    });
    if let Some(message) = &transfer.message {
        value["message"] = Value::String(message.clone());
    }
    value
}

fn check_payment_id(payment_id: Option<&String>) -> Result<(), RpcError> {
    if let Some(payment_id) = payment_id {
        if !validate::is_hex64(payment_id) {
            return Err(RpcError::validation(PAYMENT_ID_REASON));
        }
    }
    Ok(())
}

fn check_addresses(addresses: Option<&Vec<String>>) -> Result<(), RpcError> {
    if let Some(addresses) = addresses {
        if !validate::all(addresses, |a| validate::is_address(a)) {
            return Err(RpcError::validation(
                "addresses must be an array of 98-character strings beginning with ccx",
            ));
        }
    }
    Ok(())
}

/// Options for the legacy `transfer` operation ([`send`]).
///
/// Amounts here are decimal CCX and are converted to raw atomic units on the
/// way out, rounding to the nearest unit.
///
/// [`send`]: crate::wallet::WalletClient::send
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Destination address.
    pub address: String,
    /// Amount in decimal CCX.
    pub amount: f64,
    /// Fee in decimal CCX; computed from the protocol constants when omitted.
    pub fee: Option<f64>,
    /// 64-digit hexadecimal payment id.
    pub payment_id: Option<String>,
    /// Message attached to the destination; wire name `message`.
    pub memo: Option<String>,
    /// Mixin count; wire name `mixin`.
    pub mix_in: Option<u64>,
    /// Height at which the transfer unlocks; wire name `unlock_time`.
    pub unlock_height: Option<u64>,
}

impl SendOptions {
    pub(crate) fn wire_params(self, constants: &ProtocolConstants) -> Result<Value, RpcError> {
        if !validate::is_address(&self.address) {
            return Err(RpcError::validation(ADDRESS_REASON));
        }
        let amount = units::ccx_to_raw(self.amount, constants.decimal_places, "amount")?;
        let fee = self
            .fee
            .map(|fee| units::ccx_to_raw(fee, constants.decimal_places, "fee"))
            .transpose()?;
        check_payment_id(self.payment_id.as_ref())?;
        let mixin = resolve_mixin(self.mix_in, constants)?;
        let unlock_time = self.unlock_height.unwrap_or(constants.default_unlock_height);

        let destination = Transfer {
            address: self.address,
            amount,
            message: self.memo,
        };
        let fee = fee.unwrap_or_else(|| computed_fee(std::slice::from_ref(&destination), constants));

        let mut params = json!({
            "destinations": [transfer_value(&destination)],
            "mixin": mixin,
            "unlock_time": unlock_time,
            "fee": fee,
        });
        if let Some(payment_id) = self.payment_id {
            params["payment_id"] = Value::String(payment_id);
        }
        Ok(params)
    }
}

/// Options for `get_messages`.
#[derive(Debug, Clone, Default)]
pub struct MessagesOptions {
    /// First transaction id to report from; wire name `first_tx_id`.
    pub first_tx_id: Option<u64>,
    /// Maximum number of transactions to report; wire name `tx_limit`.
    pub tx_limit: Option<u64>,
}

impl MessagesOptions {
    pub(crate) fn wire_params(self) -> Value {
        let mut params = Map::new();
        if let Some(first_tx_id) = self.first_tx_id {
            params.insert("first_tx_id".into(), first_tx_id.into());
        }
        if let Some(tx_limit) = self.tx_limit {
            params.insert("tx_limit".into(), tx_limit.into());
        }
        Value::Object(params)
    }
}

/// Options for `reset`: an omitted key resyncs the currently loaded wallet,
/// a supplied view secret key replaces it.
#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    /// Hex-encoded view secret key; wire name `viewSecretKey`.
    pub view_secret_key: Option<String>,
}

impl ResetOptions {
    pub(crate) fn wire_params(self) -> Result<Value, RpcError> {
        let mut params = Map::new();
        if let Some(key) = self.view_secret_key {
            if !validate::is_private_key(&key) {
                return Err(RpcError::validation("viewSecretKey must be a 64-character string"));
            }
            params.insert("viewSecretKey".into(), key.into());
        }
        Ok(Value::Object(params))
    }
}

/// Options for `getTransactions`.
///
/// Exactly one of `block_hash` and `first_block_index` anchors the scan
/// range; `block_count` is required.
#[derive(Debug, Clone, Default)]
pub struct GetTransactionsOptions {
    /// Restrict the listing to these source addresses.
    pub addresses: Option<Vec<String>>,
    /// Hash of the first block of the range; wire name `blockHash`.
    pub block_hash: Option<String>,
    /// Height of the first block of the range; wire name `firstBlockIndex`.
    pub first_block_index: Option<u64>,
    /// Number of blocks to scan; wire name `blockCount`.
    pub block_count: u64,
    /// Filter by payment id; wire name `paymentId`.
    pub payment_id: Option<String>,
}

impl GetTransactionsOptions {
    pub(crate) fn wire_params(self) -> Result<Value, RpcError> {
        check_addresses(self.addresses.as_ref())?;
        match (&self.block_hash, self.first_block_index) {
            (Some(_), Some(_)) | (None, None) => {
                return Err(RpcError::validation(
                    "either blockHash or firstBlockIndex is required, but not both",
                ));
            },
            (Some(hash), None) if !validate::is_hex64(hash) => {
                return Err(RpcError::validation("blockHash must be 64-digit hexadecimal string"));
            },
            _ => {},
        }
        if self.block_count == 0 {
            return Err(RpcError::validation("blockCount must be a positive integer"));
        }
        check_payment_id(self.payment_id.as_ref())?;

        let mut params = Map::new();
        if let Some(addresses) = self.addresses {
            params.insert("addresses".into(), addresses.into());
        }
        if let Some(block_hash) = self.block_hash {
            params.insert("blockHash".into(), block_hash.into());
        }
        if let Some(first_block_index) = self.first_block_index {
            params.insert("firstBlockIndex".into(), first_block_index.into());
        }
        params.insert("blockCount".into(), self.block_count.into());
        if let Some(payment_id) = self.payment_id {
            params.insert("paymentId".into(), payment_id.into());
        }
        Ok(Value::Object(params))
    }
}

/// Options for `sendTransaction`, the multi-destination send.
///
/// Amounts are raw atomic units; the wire schema is camelCase and mixin is
/// called `anonymity` on this endpoint.
#[derive(Debug, Clone, Default)]
pub struct SendTransactionOptions {
    /// Destinations; must be non-empty.
    pub transfers: Vec<Transfer>,
    /// Source addresses to spend from; all wallet addresses when omitted.
    pub addresses: Option<Vec<String>>,
    /// Address receiving the change; wire name `changeAddress`.
    pub change_address: Option<String>,
    /// 64-digit hexadecimal payment id; wire name `paymentId`.
    pub payment_id: Option<String>,
    /// Mixin count; wire name `anonymity`.
    pub mix_in: Option<u64>,
    /// Unlock height; wire name `unlockTime`.
    pub unlock_height: Option<u64>,
    /// Fee in raw atomic units; computed when omitted.
    pub fee: Option<u64>,
    /// Hex-encoded extra blob.
    pub extra: Option<String>,
}

impl SendTransactionOptions {
    pub(crate) fn wire_params(self, constants: &ProtocolConstants) -> Result<Value, RpcError> {
        if self.transfers.is_empty() || !validate::all(&self.transfers, is_valid_transfer) {
            return Err(RpcError::validation(
                "transfers must be a non-empty array of valid transfer objects",
            ));
        }
        check_addresses(self.addresses.as_ref())?;
        if let Some(change_address) = &self.change_address {
            if !validate::is_address(change_address) {
                return Err(RpcError::validation(
                    "changeAddress must be 98-character string beginning with ccx",
                ));
            }
        }
        check_payment_id(self.payment_id.as_ref())?;
        if let Some(extra) = &self.extra {
            if !validate::is_hex(extra) {
                return Err(RpcError::validation("extra must be a hexadecimal string"));
            }
        }
        let anonymity = resolve_mixin(self.mix_in, constants)?;
        let unlock_time = self.unlock_height.unwrap_or(constants.default_unlock_height);
        let fee = self.fee.unwrap_or_else(|| computed_fee(&self.transfers, constants));

        let mut params = Map::new();
        params.insert(
            "transfers".into(),
            Value::Array(self.transfers.iter().map(transfer_value).collect()),
        );
        if let Some(addresses) = self.addresses {
            params.insert("addresses".into(), addresses.into());
        }
        if let Some(change_address) = self.change_address {
            params.insert("changeAddress".into(), change_address.into());
        }
        if let Some(payment_id) = self.payment_id {
            params.insert("paymentId".into(), payment_id.into());
        }
        params.insert("anonymity".into(), anonymity.into());
        params.insert("unlockTime".into(), unlock_time.into());
        params.insert("fee".into(), fee.into());
        if let Some(extra) = self.extra {
            params.insert("extra".into(), extra.into());
        }
        Ok(Value::Object(params))
    }
}

/// Options for `createDeposit`.
#[derive(Debug, Clone, Default)]
pub struct CreateDepositOptions {
    /// Address funding the deposit; wire name `sourceAddress`.
    pub source_address: String,
    /// Amount in decimal CCX.
    pub amount: f64,
    /// Deposit term in blocks.
    pub term: u64,
}

impl CreateDepositOptions {
    pub(crate) fn wire_params(self, constants: &ProtocolConstants) -> Result<Value, RpcError> {
        if !validate::is_address(&self.source_address) {
            return Err(RpcError::validation(
                "sourceAddress must be 98-character string beginning with ccx",
            ));
        }
        let amount = units::ccx_to_raw(self.amount, constants.decimal_places, "amount")?;
        if self.term == 0 {
            return Err(RpcError::validation("term must be a positive integer"));
        }
        Ok(json!({
            "sourceAddress": self.source_address,
            "amount": amount,
            "term": self.term,
        }))
    }
}

/// Options for `sendDeposit`: a deposit created in one wallet and delivered
/// to another address.
#[derive(Debug, Clone, Default)]
pub struct SendDepositOptions {
    /// Address funding the deposit; wire name `sourceAddress`.
    pub source_address: String,
    /// Amount in decimal CCX.
    pub amount: f64,
    /// Deposit term in blocks.
    pub term: u64,
    /// Address receiving the deposit; wire name `destinationAddress`.
    pub destination_address: String,
}

impl SendDepositOptions {
    pub(crate) fn wire_params(self, constants: &ProtocolConstants) -> Result<Value, RpcError> {
        if !validate::is_address(&self.source_address) {
            return Err(RpcError::validation(
                "sourceAddress must be 98-character string beginning with ccx",
            ));
        }
        let amount = units::ccx_to_raw(self.amount, constants.decimal_places, "amount")?;
        if self.term == 0 {
            return Err(RpcError::validation("term must be a positive integer"));
        }
        if !validate::is_address(&self.destination_address) {
            return Err(RpcError::validation(
                "destinationAddress must be 98-character string beginning with ccx",
            ));
        }
        Ok(json!({
            "sourceAddress": self.source_address,
            "amount": amount,
            "term": self.term,
            "destinationAddress": self.destination_address,
        }))
    }
}

/// Options for `estimateFusion`.
#[derive(Debug, Clone, Default)]
pub struct EstimateFusionOptions {
    /// Fusion threshold in raw atomic units.
    pub threshold: u64,
    /// Restrict the estimate to these addresses.
    pub addresses: Option<Vec<String>>,
}

impl EstimateFusionOptions {
    pub(crate) fn wire_params(self) -> Result<Value, RpcError> {
        if self.threshold == 0 {
            return Err(RpcError::validation("threshold must be a positive integer"));
        }
        check_addresses(self.addresses.as_ref())?;

        let mut params = Map::new();
        params.insert("threshold".into(), self.threshold.into());
        if let Some(addresses) = self.addresses {
            params.insert("addresses".into(), addresses.into());
        }
        Ok(Value::Object(params))
    }
}

/// Options for `sendFusionTransaction`.
#[derive(Debug, Clone, Default)]
pub struct SendFusionOptions {
    /// Fusion threshold in raw atomic units.
    pub threshold: u64,
    /// Mixin count; wire name `anonymity`.
    pub mix_in: Option<u64>,
    /// Restrict the fusion inputs to these addresses.
    pub addresses: Option<Vec<String>>,
    /// Address receiving the fused outputs; wire name `destinationAddress`.
    pub destination_address: Option<String>,
}

impl SendFusionOptions {
    pub(crate) fn wire_params(self, constants: &ProtocolConstants) -> Result<Value, RpcError> {
        if self.threshold == 0 {
            return Err(RpcError::validation("threshold must be a positive integer"));
        }
        check_addresses(self.addresses.as_ref())?;
        if let Some(destination_address) = &self.destination_address {
            if !validate::is_address(destination_address) {
                return Err(RpcError::validation(
                    "destinationAddress must be 98-character string beginning with ccx",
                ));
            }
        }
        let anonymity = resolve_mixin(self.mix_in, constants)?;

        let mut params = Map::new();
        params.insert("threshold".into(), self.threshold.into());
        params.insert("anonymity".into(), anonymity.into());
        if let Some(addresses) = self.addresses {
            params.insert("addresses".into(), addresses.into());
        }
        if let Some(destination_address) = self.destination_address {
            params.insert("destinationAddress".into(), destination_address.into());
        }
        Ok(Value::Object(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> String {
        format!("ccx{}", "7".repeat(95))
    }

    fn constants() -> ProtocolConstants {
        ProtocolConstants::default()
    }

    #[test]
    fn send_renames_fields_to_the_wire_schema() {
        let params = SendOptions {
            address: sample_address(),
            amount: 1.5,
            memo: Some("hello".into()),
            mix_in: Some(4),
            unlock_height: Some(100),
            fee: Some(0.001),
            payment_id: Some("a".repeat(64)),
        }
        .wire_params(&constants())
        .unwrap();

        assert_eq!(
            params,
            json!({
                "destinations": [{
                    "address": sample_address(),
                    "amount": 1_500_000u64,
                    "message": "hello",
                }],
                "mixin": 4,
                "unlock_time": 100,
                "fee": 1000,
                "payment_id": "a".repeat(64),
            })
        );
    }

    #[test]
    fn send_applies_configured_defaults() {
        let params = SendOptions {
            address: sample_address(),
            amount: 1.0,
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap();

        let c = constants();
        assert_eq!(params["mixin"], json!(c.default_mixin));
        assert_eq!(params["unlock_time"], json!(c.default_unlock_height));
        assert_eq!(params["fee"], json!(c.base_fee));
        assert!(params.get("payment_id").is_none());
    }

    #[test]
    fn send_validation_first_failure_wins() {
        // both address and payment id are invalid: the address error surfaces
        let err = SendOptions {
            address: "not an address".into(),
            amount: 1.0,
            payment_id: Some("nope".into()),
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap_err();
        assert!(matches!(err, RpcError::Validation(msg) if msg == ADDRESS_REASON));
    }

    #[test]
    fn send_rejects_bad_payment_id() {
        let err = SendOptions {
            address: sample_address(),
            amount: 1.0,
            payment_id: Some("xyz".into()),
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap_err();
        assert!(matches!(err, RpcError::Validation(msg) if msg == PAYMENT_ID_REASON));
    }

    #[test]
    fn mixin_bounds_are_inclusive() {
        let c = constants();
        for mixin in [c.mixin_min, c.mixin_max] {
            assert!(SendOptions {
                address: sample_address(),
                amount: 1.0,
                mix_in: Some(mixin),
                ..Default::default()
            }
            .wire_params(&c)
            .is_ok());
        }
        let above = SendOptions {
            address: sample_address(),
            amount: 1.0,
            mix_in: Some(c.mixin_max + 1),
            ..Default::default()
        }
        .wire_params(&c)
        .unwrap_err();
        assert!(matches!(above, RpcError::Validation(msg) if msg == "0 <= mixIn <= 10"));

        // a deployment with a raised floor rejects values below it
        let raised = ProtocolConstants {
            mixin_min: 2,
            ..constants()
        };
        let below = SendOptions {
            address: sample_address(),
            amount: 1.0,
            mix_in: Some(raised.mixin_min - 1),
            ..Default::default()
        }
        .wire_params(&raised)
        .unwrap_err();
        assert!(matches!(below, RpcError::Validation(msg) if msg == "2 <= mixIn <= 10"));
    }

    #[test]
    fn fee_defaults_to_base_plus_message_fees() {
        let c = constants();
        let params = SendTransactionOptions {
            transfers: vec![
                Transfer::new(sample_address(), 10).with_message("ab"),
                Transfer::new(sample_address(), 20).with_message("abcd"),
            ],
            ..Default::default()
        }
        .wire_params(&c)
        .unwrap();

        let expected = 2 * c.base_fee + 6 * c.per_message_char_fee;
        assert_eq!(params["fee"], json!(expected));
    }

    #[test]
    fn explicit_fee_bypasses_computation() {
        let params = SendTransactionOptions {
            transfers: vec![Transfer::new(sample_address(), 10).with_message("ab")],
            fee: Some(5),
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap();
        assert_eq!(params["fee"], json!(5));
    }

    #[test]
    fn send_transaction_uses_camel_case_wire_names() {
        let params = SendTransactionOptions {
            transfers: vec![Transfer::new(sample_address(), 10)],
            change_address: Some(sample_address()),
            unlock_height: Some(7),
            mix_in: Some(3),
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap();

        assert_eq!(params["anonymity"], json!(3));
        assert_eq!(params["unlockTime"], json!(7));
        assert_eq!(params["changeAddress"], json!(sample_address()));
        assert!(params.get("mixin").is_none());
        assert!(params.get("unlock_time").is_none());
    }

    #[test]
    fn send_transaction_rejects_invalid_transfers() {
        let err = SendTransactionOptions {
            transfers: vec![Transfer::new("bogus", 10)],
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap_err();
        assert!(matches!(err, RpcError::Validation(_)));

        let empty = SendTransactionOptions::default()
            .wire_params(&constants())
            .unwrap_err();
        assert!(matches!(empty, RpcError::Validation(_)));
    }

    #[test]
    fn get_transactions_requires_exactly_one_anchor() {
        let neither = GetTransactionsOptions {
            block_count: 10,
            ..Default::default()
        }
        .wire_params()
        .unwrap_err();
        assert!(matches!(neither, RpcError::Validation(_)));

        let both = GetTransactionsOptions {
            block_hash: Some("a".repeat(64)),
            first_block_index: Some(1),
            block_count: 10,
            ..Default::default()
        }
        .wire_params()
        .unwrap_err();
        assert!(matches!(both, RpcError::Validation(_)));

        let params = GetTransactionsOptions {
            first_block_index: Some(1),
            block_count: 10,
            ..Default::default()
        }
        .wire_params()
        .unwrap();
        assert_eq!(params, json!({ "firstBlockIndex": 1, "blockCount": 10 }));
    }

    #[test]
    fn messages_options_skip_absent_fields() {
        assert_eq!(MessagesOptions::default().wire_params(), json!({}));
        let params = MessagesOptions {
            first_tx_id: Some(3),
            tx_limit: Some(10),
        }
        .wire_params();
        assert_eq!(params, json!({ "first_tx_id": 3, "tx_limit": 10 }));
    }

    #[test]
    fn reset_validates_the_view_key_length() {
        let err = ResetOptions {
            view_secret_key: Some("short".into()),
        }
        .wire_params()
        .unwrap_err();
        assert!(matches!(err, RpcError::Validation(_)));

        let params = ResetOptions {
            view_secret_key: Some("f".repeat(64)),
        }
        .wire_params()
        .unwrap();
        assert_eq!(params, json!({ "viewSecretKey": "f".repeat(64) }));
    }

    #[test]
    fn deposits_convert_amounts_and_require_terms() {
        let c = constants();
        let params = CreateDepositOptions {
            source_address: sample_address(),
            amount: 2.5,
            term: 21900,
        }
        .wire_params(&c)
        .unwrap();
        assert_eq!(params["amount"], json!(2_500_000u64));

        let err = CreateDepositOptions {
            source_address: sample_address(),
            amount: 2.5,
            term: 0,
        }
        .wire_params(&c)
        .unwrap_err();
        assert!(matches!(err, RpcError::Validation(msg) if msg == "term must be a positive integer"));
    }

    #[test]
    fn fusion_options_validate_threshold_and_addresses() {
        let err = EstimateFusionOptions::default().wire_params().unwrap_err();
        assert!(matches!(err, RpcError::Validation(_)));

        let params = SendFusionOptions {
            threshold: 1_000_000,
            destination_address: Some(sample_address()),
            ..Default::default()
        }
        .wire_params(&constants())
        .unwrap();
        assert_eq!(params["threshold"], json!(1_000_000));
        assert_eq!(params["anonymity"], json!(constants().default_mixin));
    }
}
