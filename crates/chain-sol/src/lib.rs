//! Solana support for the multi-chain account wallet.
//!
//! Solana accounts are plain Ed25519 key pairs: the address is the Base58
//! public key and the exported secret is the Base58 of the 64-byte
//! `secret || public` keypair, the form other Solana wallets import.

pub mod address;
pub mod error;
pub mod keypair;

pub use address::{address_to_bytes, keypair_to_address, validate_address};
pub use error::SolError;
pub use keypair::SolKeypair;
