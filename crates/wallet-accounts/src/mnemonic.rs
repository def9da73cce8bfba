use bip39::{Language, Mnemonic};
use rand::RngCore;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::error::WalletError;

/// Length of a freshly generated mnemonic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WordCount {
    /// 128 bits of entropy
    #[default]
    Twelve,
    /// 256 bits of entropy
    TwentyFour,
}

impl WordCount {
    pub fn entropy_bytes(&self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::TwentyFour => 32,
        }
    }

    pub fn words(&self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::TwentyFour => 24,
        }
    }
}

impl TryFrom<u8> for WordCount {
    type Error = String;

    fn try_from(words: u8) -> Result<Self, Self::Error> {
        match words {
            12 => Ok(WordCount::Twelve),
            24 => Ok(WordCount::TwentyFour),
            other => Err(format!("mnemonic length must be 12 or 24 words, got {other}")),
        }
    }
}

impl From<WordCount> for u8 {
    fn from(count: WordCount) -> u8 {
        count.words() as u8
    }
}

/// Generate a new English BIP-39 mnemonic from OS entropy
pub fn generate_mnemonic(word_count: WordCount) -> Result<SecretString, WalletError> {
    let mut entropy = [0u8; 32];
    let entropy = &mut entropy[..word_count.entropy_bytes()];
    rand::rngs::OsRng.fill_bytes(entropy);
    let result = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()));
    entropy.zeroize();
    Ok(SecretString::from(result?.to_string()))
}

/// Validate a mnemonic phrase (wordlist and checksum)
pub fn validate_mnemonic(phrase: &str) -> bool {
    parse(phrase).is_ok()
}

/// Parse a phrase and return it in canonical form: lowercase words joined by
/// single spaces.
pub fn normalize_mnemonic(phrase: &str) -> Result<SecretString, WalletError> {
    Ok(SecretString::from(parse(phrase)?.to_string()))
}

/// Derive the 64-byte BIP-39 seed. No passphrase is applied.
pub fn mnemonic_to_seed(phrase: &str) -> Result<Zeroizing<[u8; 64]>, WalletError> {
    Ok(Zeroizing::new(parse(phrase)?.to_seed("")))
}

/// Validate a single word against the BIP-39 word list
pub fn is_valid_word(word: &str) -> bool {
    Language::English.find_word(word).is_some()
}

fn parse(phrase: &str) -> Result<Mnemonic, WalletError> {
    let lowered = Zeroizing::new(phrase.to_lowercase());
    Mnemonic::parse_in_normalized(Language::English, &lowered)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))
}
