use serde::{Deserialize, Serialize};

use crate::error::WalletError;
use crate::mnemonic::WordCount;

/// How the store picks the derivation index for a new account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Index = number of existing accounts on that chain. Deleting an account
    /// and creating a new one re-issues the freed index (and address).
    #[default]
    CountExisting,
    /// Index = one past the highest index ever issued on that chain, so a
    /// deleted address is never handed out again by this store.
    NeverReuse,
}

/// Account store settings. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Length of mnemonics generated by `initialize_wallet(None)`
    pub mnemonic_words: WordCount,
    pub index_policy: IndexPolicy,
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        serde_json::from_str(json).map_err(|e| WalletError::InvalidConfig(e.to_string()))
    }
}
