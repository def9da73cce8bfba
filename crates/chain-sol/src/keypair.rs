//! Ed25519 key pair for a Solana account.

use ed25519_dalek::SigningKey;
use zeroize::{Zeroize, Zeroizing};

use crate::address::keypair_to_address;
use crate::error::SolError;

/// A Solana signing key built from a derived 32-byte Ed25519 seed.
///
/// `ed25519_dalek::SigningKey` zeroizes its secret on drop.
pub struct SolKeypair {
    signing_key: SigningKey,
}

impl SolKeypair {
    /// Builds a key pair from the 32-byte secret seed produced by SLIP-0010
    /// derivation. Every 32-byte value is a valid Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Parses an exported Base58 keypair (64 bytes: secret then public).
    ///
    /// Fails if the encoding is wrong or the public half does not belong to
    /// the secret half.
    pub fn from_base58_keypair(encoded: &str) -> Result<Self, SolError> {
        let bytes = Zeroizing::new(
            bs58::decode(encoded)
                .into_vec()
                .map_err(|e| SolError::InvalidPrivateKey(format!("base58 decode failed: {e}")))?,
        );
        let keypair_bytes: &[u8; 64] = bytes.as_slice().try_into().map_err(|_| {
            SolError::InvalidPrivateKey(format!("expected 64 bytes, got {}", bytes.len()))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(keypair_bytes)
            .map_err(|e| SolError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Base58 public key.
    pub fn address(&self) -> String {
        keypair_to_address(&self.public_key())
    }

    /// Base58 of the 64-byte `secret || public` keypair.
    pub fn secret_key_base58(&self) -> Zeroizing<String> {
        let mut raw = self.signing_key.to_keypair_bytes();
        let encoded = Zeroizing::new(bs58::encode(&raw).into_string());
        raw.zeroize();
        encoded
    }
}
