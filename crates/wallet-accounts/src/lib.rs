//! Multi-chain (Ethereum / Solana) account wallet core.
//!
//! Two pieces:
//! - [`derivation`]: pure, deterministic derivation of an account's path,
//!   address and private key from a BIP-39 mnemonic, a blockchain and an index.
//! - [`store`]: the in-memory [`AccountStore`] that owns the mnemonic, assigns
//!   per-chain indices and tracks the single active account.
//!
//! Nothing is persisted and nothing touches the network.

pub mod account;
pub mod config;
pub mod derivation;
pub mod error;
pub mod hd_derivation;
pub mod mnemonic;
pub mod shared;
pub mod store;
pub mod types;

pub use account::{Account, AccountSummary, WalletSnapshot};
pub use config::{IndexPolicy, StoreConfig};
pub use derivation::{derive_account_keys, derive_from_seed, validate_address, DerivedKeys};
pub use error::WalletError;
pub use mnemonic::{generate_mnemonic, is_valid_word, validate_mnemonic, WordCount};
pub use shared::SharedAccountStore;
pub use store::AccountStore;
pub use types::{AccountId, Blockchain, PrivateKey};
