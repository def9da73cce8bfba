use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::WalletError;

/// Blockchains an account can be derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Blockchain {
    Ethereum,
    Solana,
}

impl Blockchain {
    pub const ALL: [Blockchain; 2] = [Blockchain::Ethereum, Blockchain::Solana];

    /// BIP-44 coin type for this chain
    pub fn coin_type(&self) -> u32 {
        match self {
            Blockchain::Ethereum => 60,
            Blockchain::Solana => 501,
        }
    }

    /// Whether this chain uses secp256k1 (ETH) or Ed25519 (SOL)
    pub fn curve(&self) -> CurveType {
        match self {
            Blockchain::Ethereum => CurveType::Secp256k1,
            Blockchain::Solana => CurveType::Ed25519,
        }
    }

    /// Lowercase tag used in serialized state and for parsing
    pub fn tag(&self) -> &'static str {
        match self {
            Blockchain::Ethereum => "ethereum",
            Blockchain::Solana => "solana",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Blockchain::Ethereum => "Ethereum",
            Blockchain::Solana => "Solana",
        }
    }

    /// Native token symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Blockchain::Ethereum => "ETH",
            Blockchain::Solana => "SOL",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Blockchain {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethereum" => Ok(Blockchain::Ethereum),
            "solana" => Ok(Blockchain::Solana),
            other => Err(WalletError::UnsupportedBlockchain(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    Secp256k1,
    Ed25519,
}

/// Store-assigned account identifier, increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chain-native private key serialization: `0x` hex for Ethereum, Base58
/// 64-byte keypair for Solana.
///
/// Zeroized on drop and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(Zeroizing<String>);

impl PrivateKey {
    pub(crate) fn new(encoded: Zeroizing<String>) -> Self {
        Self(encoded)
    }

    /// The encoded key, for backup display only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}
