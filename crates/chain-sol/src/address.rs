//! Solana address encoding and validation.
//!
//! A Solana address is the Base58 encoding of a raw 32-byte Ed25519 public
//! key, with no hashing step in between.

use crate::error::SolError;

/// Convert a 32-byte Ed25519 public key to a Solana address string.
pub fn keypair_to_address(ed25519_pubkey: &[u8; 32]) -> String {
    bs58::encode(ed25519_pubkey).into_string()
}

/// Decode a Solana address string to its 32-byte public key.
pub fn address_to_bytes(address: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })
}

/// Validate a Solana address string: it must be Base58 that decodes to
/// exactly 32 bytes.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address_to_bytes(address).map(|_| true)
}
