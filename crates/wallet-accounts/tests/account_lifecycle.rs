//! Cross-crate tests exercising the full pipeline:
//! mnemonic -> store -> derived accounts -> re-derivation.
//!
//! These go through the public API of wallet_accounts only, the same surface
//! a presentation layer would call.

use secrecy::ExposeSecret;
use wallet_accounts::*;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn store_with_test_mnemonic() -> AccountStore {
    let mut store = AccountStore::default();
    store.initialize_wallet(Some(TEST_MNEMONIC)).unwrap();
    store
}

fn assert_invariants(store: &AccountStore) {
    let snapshot = store.snapshot();
    let active: Vec<_> = snapshot.accounts.iter().filter(|a| a.is_active).collect();
    if snapshot.accounts.is_empty() {
        assert!(active.is_empty());
        assert!(snapshot.active_account.is_none());
    } else {
        assert_eq!(active.len(), 1);
        assert_eq!(Some(active[0].id), snapshot.active_account);
    }
}

// ─── Worked example: A, B on Solana, C on Ethereum ─────────────────

#[test]
fn solana_then_ethereum_example() {
    let mut store = store_with_test_mnemonic();

    let a = store.create_account("A", Blockchain::Solana).unwrap();
    assert_eq!(a.derivation_path, "m/44'/501'/0'/0'");
    assert!(store.is_active(a.id));

    let b = store.create_account("B", Blockchain::Solana).unwrap();
    assert_eq!(b.derivation_path, "m/44'/501'/1'/0'");
    assert!(store.is_active(a.id));
    assert!(!store.is_active(b.id));

    let c = store.create_account("C", Blockchain::Ethereum).unwrap();
    assert_eq!(c.derivation_path, "m/44'/60'/0'/0/0");
    assert_invariants(&store);

    store.delete_account(c.id).unwrap();
    store.delete_account(a.id).unwrap();
    assert!(store.is_active(b.id));

    store.delete_account(b.id).unwrap();
    assert!(store.accounts().is_empty());
    assert_invariants(&store);
}

// ─── Cross-wallet compatibility ────────────────────────────────────

#[test]
fn addresses_match_standard_wallets() {
    let mut store = store_with_test_mnemonic();
    let eth = store.create_account("Main", Blockchain::Ethereum).unwrap();
    let sol = store.create_account("Phantom", Blockchain::Solana).unwrap();

    assert_eq!(eth.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    assert_eq!(sol.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
    assert!(validate_address(Blockchain::Ethereum, &eth.address).unwrap());
    assert!(validate_address(Blockchain::Solana, &sol.address).unwrap());
}

// ─── Index contiguity with interleaved chains ──────────────────────

#[test]
fn per_chain_indices_are_contiguous() {
    let mut store = store_with_test_mnemonic();
    let order = [
        Blockchain::Ethereum,
        Blockchain::Solana,
        Blockchain::Solana,
        Blockchain::Ethereum,
        Blockchain::Solana,
        Blockchain::Ethereum,
        Blockchain::Ethereum,
    ];
    for (i, chain) in order.iter().enumerate() {
        store.create_account(&format!("acct {i}"), *chain).unwrap();
        assert_invariants(&store);
    }

    for chain in Blockchain::ALL {
        let indices: Vec<u32> = store.accounts_for(chain).map(|a| a.derivation_index).collect();
        let expected: Vec<u32> = (0..indices.len() as u32).collect();
        assert_eq!(indices, expected, "{chain} indices not contiguous");
    }
}

// ─── Round-trip: stored account == fresh derivation ────────────────

#[test]
fn stored_accounts_rederive_exactly() {
    let mut store = store_with_test_mnemonic();
    for i in 0..3 {
        store.create_account(&format!("eth {i}"), Blockchain::Ethereum).unwrap();
        store.create_account(&format!("sol {i}"), Blockchain::Solana).unwrap();
    }

    let phrase = store.mnemonic().unwrap().expose_secret().to_string();
    for account in store.accounts() {
        let keys = derive_account_keys(&phrase, account.blockchain, account.derivation_index).unwrap();
        assert_eq!(keys.derivation_path, account.derivation_path);
        assert_eq!(keys.address, account.address);
        assert_eq!(keys.private_key, account.private_key);
        assert!(store.verify_account(account.id).unwrap());
    }
}

#[test]
fn generated_wallet_is_recoverable_from_its_mnemonic() {
    let mut first = AccountStore::default();
    first.initialize_wallet(None).unwrap();
    let eth = first.create_account("E", Blockchain::Ethereum).unwrap();
    let sol = first.create_account("S", Blockchain::Solana).unwrap();

    let phrase = first.mnemonic().unwrap().expose_secret().to_string();
    let mut restored = AccountStore::default();
    restored.initialize_wallet(Some(&phrase)).unwrap();
    let eth2 = restored.create_account("E", Blockchain::Ethereum).unwrap();
    let sol2 = restored.create_account("S", Blockchain::Solana).unwrap();

    assert_eq!(eth.address, eth2.address);
    assert_eq!(sol.address, sol2.address);
    assert_eq!(eth.private_key, eth2.private_key);
}

// ─── Mixed operation sequence keeps one active account ─────────────

#[test]
fn invariants_hold_across_mixed_operations() {
    let mut store = store_with_test_mnemonic();
    let mut ids = Vec::new();

    for step in 0..24u32 {
        match step % 5 {
            0 | 1 => {
                let chain = if step % 2 == 0 { Blockchain::Ethereum } else { Blockchain::Solana };
                ids.push(store.create_account(&format!("n{step}"), chain).unwrap().id);
            }
            2 => {
                if let Some(id) = ids.get(step as usize % ids.len().max(1)) {
                    store.switch_account(*id).unwrap();
                }
            }
            3 => {
                if !ids.is_empty() {
                    let id = ids.remove(step as usize % ids.len());
                    store.delete_account(id).unwrap();
                }
            }
            _ => {
                if let Some(id) = ids.first() {
                    store.update_account_name(*id, &format!("renamed {step}")).unwrap();
                }
            }
        }
        assert_invariants(&store);
    }

    while let Some(id) = ids.pop() {
        store.delete_account(id).unwrap();
        assert_invariants(&store);
    }
}

// ─── Configuration and tags from the presentation layer ────────────

#[test]
fn config_and_tags_from_text() {
    let config = StoreConfig::from_json(r#"{"index_policy": "never_reuse"}"#).unwrap();
    let mut store = AccountStore::new(config);
    store.initialize_wallet(Some(TEST_MNEMONIC)).unwrap();

    let chain: Blockchain = "solana".parse().unwrap();
    let a = store.create_account("A", chain).unwrap();
    store.delete_account(a.id).unwrap();
    let b = store.create_account("B", chain).unwrap();
    assert_eq!(b.derivation_path, "m/44'/501'/1'/0'");

    assert!(matches!(
        "bitcoin".parse::<Blockchain>(),
        Err(WalletError::UnsupportedBlockchain(_))
    ));
}

#[test]
fn snapshot_serializes_for_rendering() {
    let mut store = store_with_test_mnemonic();
    store.create_account("Main", Blockchain::Ethereum).unwrap();

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["is_initialized"], true);
    assert_eq!(json["accounts"][0]["name"], "Main");
    assert_eq!(json["accounts"][0]["is_active"], true);
    assert!(json["accounts"][0].get("private_key").is_none());
}
