//! secp256k1 key pair for an Ethereum account.

use k256::ecdsa::SigningKey;
use zeroize::{Zeroize, Zeroizing};

use crate::address::pubkey_to_eth_address;
use crate::error::EthError;

/// An Ethereum signing key plus the encodings a wallet shows for it.
///
/// The inner `SigningKey` zeroizes itself on drop.
pub struct EthKeypair {
    signing_key: SigningKey,
}

impl EthKeypair {
    /// Builds a key pair from a raw 32-byte secp256k1 scalar.
    pub fn from_private_key(private_key: &[u8; 32]) -> Result<Self, EthError> {
        let signing_key = SigningKey::from_bytes(private_key.into())
            .map_err(|e| EthError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// Uncompressed SEC1 public key (65 bytes, 0x04 prefix).
    pub fn public_key_uncompressed(&self) -> Result<[u8; 65], EthError> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .try_into()
            .map_err(|_| EthError::InvalidPublicKey("invalid uncompressed public key".into()))
    }

    /// EIP-55 checksummed `0x` address.
    pub fn address(&self) -> Result<String, EthError> {
        pubkey_to_eth_address(&self.public_key_uncompressed()?)
    }

    /// Private key as `0x`-prefixed lowercase hex, the form wallets import.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        let mut raw = [0u8; 32];
        raw.copy_from_slice(&self.signing_key.to_bytes());
        let encoded = Zeroizing::new(format!("0x{}", hex::encode(raw)));
        raw.zeroize();
        encoded
    }
}
