use bip32::{DerivationPath, XPrv};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::error::WalletError;
use crate::types::{Blockchain, CurveType};

type HmacSha512 = Hmac<Sha512>;

pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Fixed per-chain path templates, matching what common wallets use so the
/// same mnemonic yields the same address at the same index elsewhere.
///
/// - ETH: m/44'/60'/0'/0/{index}  (BIP-44, index in the non-hardened tail)
/// - SOL: m/44'/501'/{index}'/0'  (all hardened, index at the account level)
pub fn derivation_path(blockchain: Blockchain, index: u32) -> Result<String, WalletError> {
    if index >= HARDENED_OFFSET {
        return Err(WalletError::DerivationFailed(format!(
            "account index {index} exceeds 2^31 - 1"
        )));
    }
    Ok(match blockchain {
        Blockchain::Ethereum => format!("m/44'/60'/0'/0/{index}"),
        Blockchain::Solana => format!("m/44'/501'/{index}'/0'"),
    })
}

/// Derive the raw 32-byte private key at `path` on the curve `blockchain`
/// uses.
pub fn derive_private_key(
    seed: &[u8],
    blockchain: Blockchain,
    path: &str,
) -> Result<Zeroizing<[u8; 32]>, WalletError> {
    match blockchain.curve() {
        CurveType::Secp256k1 => derive_secp256k1_key(seed, path),
        CurveType::Ed25519 => derive_ed25519_key(seed, path),
    }
}

/// BIP-32 secp256k1 derivation.
pub fn derive_secp256k1_key(seed: &[u8], path: &str) -> Result<Zeroizing<[u8; 32]>, WalletError> {
    let path: DerivationPath = path
        .parse()
        .map_err(|e: bip32::Error| WalletError::DerivationFailed(e.to_string()))?;

    let xprv = XPrv::derive_from_path(seed, &path)
        .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;

    Ok(Zeroizing::new(xprv.to_bytes()))
}

/// SLIP-0010 Ed25519 derivation. Ed25519 only supports hardened children,
/// so every path component must be hardened.
pub fn derive_ed25519_key(seed: &[u8], path: &str) -> Result<Zeroizing<[u8; 32]>, WalletError> {
    let components = parse_hardened_path(path)?;

    // Master key: HMAC-SHA512(key="ed25519 seed", data=seed)
    let mut mac = HmacSha512::new_from_slice(b"ed25519 seed")
        .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;
    mac.update(seed);
    let mut result = mac.finalize().into_bytes();

    let mut key = Zeroizing::new([0u8; 32]);
    let mut chain_code = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&result[..32]);
    chain_code.copy_from_slice(&result[32..]);
    result.as_mut_slice().zeroize();

    for child_index in components {
        let mut mac = HmacSha512::new_from_slice(chain_code.as_slice())
            .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;
        // Hardened child: 0x00 || key || index
        mac.update(&[0x00]);
        mac.update(key.as_slice());
        mac.update(&(child_index | HARDENED_OFFSET).to_be_bytes());
        let mut result = mac.finalize().into_bytes();

        key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);
        result.as_mut_slice().zeroize();
    }

    Ok(key)
}

/// Parse "m/44'/501'/0'/0'" into [44, 501, 0, 0], rejecting any
/// non-hardened component.
fn parse_hardened_path(path: &str) -> Result<Vec<u32>, WalletError> {
    let path = path.strip_prefix("m/").ok_or_else(|| {
        WalletError::DerivationFailed("Path must start with m/".into())
    })?;

    path.split('/')
        .map(|component| {
            let num_str = component
                .strip_suffix('\'')
                .or_else(|| component.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::DerivationFailed(format!(
                        "Ed25519 path component {component} must be hardened"
                    ))
                })?;
            let index = num_str
                .parse::<u32>()
                .map_err(|e| WalletError::DerivationFailed(format!("Invalid path component: {e}")))?;
            if index >= HARDENED_OFFSET {
                return Err(WalletError::DerivationFailed(format!(
                    "Path component {index} out of range"
                )));
            }
            Ok(index)
        })
        .collect()
}
