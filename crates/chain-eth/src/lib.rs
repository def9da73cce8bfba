//! Ethereum support for the multi-chain account wallet.
//!
//! This crate provides:
//! - Ethereum address derivation from secp256k1 public keys (with EIP-55 checksums)
//! - Key-pair construction from derived private key bytes
//! - Address validation, including mixed-case checksum verification

pub mod address;
pub mod error;
pub mod keypair;

pub use address::{checksum_address, pubkey_to_eth_address, validate_address};
pub use error::EthError;
pub use keypair::EthKeypair;
