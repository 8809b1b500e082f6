//! Deposit identifier derivation
//!
//! Both chains must derive the same 32-byte identifier for a lock, so the byte
//! layout below is fixed and order-sensitive.
//!
//! # Byte Layout (192 bytes total)
//! - Bytes 0-31:    block height at deposit time (uint256, big-endian, left-padded)
//! - Bytes 32-63:   keccak256(token identifier)
//! - Bytes 64-95:   keccak256(sender address)
//! - Bytes 96-127:  keccak256(recipient address)
//! - Bytes 128-159: amount (uint256, big-endian, left-padded)
//! - Bytes 160-191: value (uint256, big-endian, left-padded)
//!
//! Uniqueness relies on the block height changing between two deposits with the
//! same `(token, from, to, amount, value)` tuple. Two such deposits in one block
//! produce the same identifier.

use cosmwasm_std::{Binary, StdError, StdResult, Uint128};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode a variable-length identifier (address or token) into one 32-byte slot.
pub fn encode_identifier(identifier: &str) -> [u8; 32] {
    keccak256(identifier.as_bytes())
}

/// Compute the deposit identifier for a lock.
///
/// # Arguments
/// * `height` - Source chain block height when the deposit is recorded
/// * `token` - Token identifier (CW20 contract address)
/// * `from` - Depositor address
/// * `to` - Recipient on the destination chain
/// * `amount` - Locked token amount
/// * `value` - Value of the lock in base currency
pub fn compute_deposit_hash(
    height: u64,
    token: &str,
    from: &str,
    to: &str,
    amount: Uint128,
    value: Uint128,
) -> [u8; 32] {
    let mut data = [0u8; 192];

    // u64 height goes into bytes 24-31 of the first slot
    data[24..32].copy_from_slice(&height.to_be_bytes());
    data[32..64].copy_from_slice(&encode_identifier(token));
    data[64..96].copy_from_slice(&encode_identifier(from));
    data[96..128].copy_from_slice(&encode_identifier(to));

    // u128 amounts go into the low 16 bytes of their slots
    data[128 + 16..160].copy_from_slice(&amount.u128().to_be_bytes());
    data[160 + 16..192].copy_from_slice(&value.u128().to_be_bytes());

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to 32-byte array
pub fn hex_to_bytes32(hex_str: &str) -> StdResult<[u8; 32]> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let bytes = hex::decode(stripped)
        .map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;
    bytes
        .try_into()
        .map_err(|_| StdError::generic_err("Invalid hex length: expected 64 characters"))
}

/// Interpret a wire `Binary` as a deposit hash.
pub fn parse_deposit_hash(hash: &Binary) -> StdResult<[u8; 32]> {
    hash.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid deposit hash length: expected 32 bytes, got {}",
            hash.len()
        ))
    })
}
