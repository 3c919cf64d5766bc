//! Conversion between decimal CCX amounts and raw atomic units.
//!
//! Wallet operations that accept human-readable amounts take decimal CCX and
//! convert on the way out; everything on the wire is raw atomic units. The
//! conversion rounds to the nearest atomic unit rather than truncating, so
//! `1.0000005` CCX becomes `1_000_001` raw.

use crate::error::RpcError;
use crate::validate;

/// Converts a decimal CCX amount to raw atomic units.
///
/// `field` names the caller-facing option in the error message.
///
/// # Errors
///
/// Rejects amounts that are negative, non-finite, or too large to fit in a
/// `u64` after scaling.
pub fn ccx_to_raw(amount: f64, decimal_places: u32, field: &str) -> Result<u64, RpcError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(RpcError::validation(format!(
            "{field} must be a non-negative decimal amount of CCX"
        )));
    }

    let scaled = (amount * 10f64.powi(decimal_places as i32)).round();
    if !validate::is_non_negative_integer(scaled) || scaled > u64::MAX as f64 {
        return Err(RpcError::validation(format!(
            "{field} is out of range"
        )));
    }
    Ok(scaled as u64)
}
