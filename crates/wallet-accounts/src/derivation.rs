//! Deterministic account derivation: (mnemonic, blockchain, index) to
//! derivation path, address and private key.
//!
//! Everything here is a pure function of its inputs and safe to call from
//! any number of threads.

use chain_eth::EthKeypair;
use chain_sol::SolKeypair;

use crate::error::WalletError;
use crate::hd_derivation;
use crate::mnemonic;
use crate::types::{Blockchain, PrivateKey};

/// Keys and encodings for one account slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    pub blockchain: Blockchain,
    pub index: u32,
    pub derivation_path: String,
    pub address: String,
    pub private_key: PrivateKey,
}

/// Derive the account at `index` for `blockchain` from a mnemonic phrase.
pub fn derive_account_keys(
    mnemonic_phrase: &str,
    blockchain: Blockchain,
    index: u32,
) -> Result<DerivedKeys, WalletError> {
    let seed = mnemonic::mnemonic_to_seed(mnemonic_phrase)?;
    derive_from_seed(seed.as_slice(), blockchain, index)
}

/// Same as [`derive_account_keys`], starting from an already expanded
/// 64-byte BIP-39 seed.
pub fn derive_from_seed(
    seed: &[u8],
    blockchain: Blockchain,
    index: u32,
) -> Result<DerivedKeys, WalletError> {
    let derivation_path = hd_derivation::derivation_path(blockchain, index)?;
    let secret = hd_derivation::derive_private_key(seed, blockchain, &derivation_path)?;

    let (address, private_key) = match blockchain {
        Blockchain::Ethereum => {
            let keypair = EthKeypair::from_private_key(&secret)?;
            (keypair.address()?, keypair.private_key_hex())
        }
        Blockchain::Solana => {
            let keypair = SolKeypair::from_seed(&secret);
            (keypair.address(), keypair.secret_key_base58())
        }
    };

    Ok(DerivedKeys {
        blockchain,
        index,
        derivation_path,
        address,
        private_key: PrivateKey::new(private_key),
    })
}

/// Validate an address in the chain's native encoding
pub fn validate_address(blockchain: Blockchain, address: &str) -> Result<bool, WalletError> {
    match blockchain {
        Blockchain::Ethereum => chain_eth::validate_address(address)
            .map_err(|e| WalletError::DerivationFailed(e.to_string())),
        Blockchain::Solana => chain_sol::validate_address(address)
            .map_err(|e| WalletError::DerivationFailed(e.to_string())),
    }
}
