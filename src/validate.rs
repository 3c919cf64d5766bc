//! Pure parameter validators.
//!
//! Each predicate takes a candidate value and returns a `bool`; none of them
//! panic or allocate. Defaulting for omitted fields is the facades' job, so
//! absent optional fields are simply never passed here.

/// Network prefix every Conceal address starts with.
pub const ADDRESS_PREFIX: &str = "ccx";

/// Length of a standard address.
pub const ADDRESS_LENGTH: usize = 98;

/// Length of an integrated address (payment id embedded).
pub const INTEGRATED_ADDRESS_LENGTH: usize = 186;

/// Length of a hex-encoded secret key.
pub const KEY_LENGTH: usize = 64;

/// Finite, integral, and not below zero.
pub fn is_non_negative_integer(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0
}

/// Non-empty string of hexadecimal digits, any length.
pub fn is_hex(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Exactly 64 hexadecimal digits (tx hashes, payment ids, block hashes).
pub fn is_hex64(candidate: &str) -> bool {
    candidate.len() == 64 && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Standard 98-character address carrying the `ccx` prefix.
pub fn is_address(candidate: &str) -> bool {
    candidate.len() == ADDRESS_LENGTH && candidate.starts_with(ADDRESS_PREFIX)
}

/// 186-character integrated address carrying the `ccx` prefix.
pub fn is_integrated_address(candidate: &str) -> bool {
    candidate.len() == INTEGRATED_ADDRESS_LENGTH && candidate.starts_with(ADDRESS_PREFIX)
}

/// 64-character string; secret keys are not constrained to hex here, the
/// daemon rejects malformed key material itself.
pub fn is_private_key(candidate: &str) -> bool {
    candidate.len() == KEY_LENGTH
}

/// Every element of the slice satisfies the predicate.
pub fn all<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> bool {
    items.iter().all(predicate)
}
