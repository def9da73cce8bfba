use thiserror::Error;

use crate::types::AccountId;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Unsupported blockchain: {0}")]
    UnsupportedBlockchain(String),

    #[error("Wallet not initialized")]
    WalletNotInitialized,

    #[error("Wallet already initialized")]
    AlreadyInitialized,

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid account name: {0}")]
    InvalidName(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<chain_eth::EthError> for WalletError {
    fn from(e: chain_eth::EthError) -> Self {
        WalletError::DerivationFailed(format!("ETH: {e}"))
    }
}

impl From<chain_sol::SolError> for WalletError {
    fn from(e: chain_sol::SolError) -> Self {
        WalletError::DerivationFailed(format!("SOL: {e}"))
    }
}
