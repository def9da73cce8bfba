//! In-memory account store.
//!
//! Owns the wallet mnemonic, the ordered list of derived accounts and the id
//! of the active one. Every operation either applies completely or returns an
//! error without touching state. Whenever the account list is non-empty,
//! `active` names one of its accounts; when it is empty, `active` is `None`.

use std::collections::HashMap;

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::account::{Account, AccountSummary, WalletSnapshot};
use crate::config::{IndexPolicy, StoreConfig};
use crate::derivation;
use crate::error::WalletError;
use crate::mnemonic;
use crate::types::{AccountId, Blockchain};

struct WalletSecret {
    mnemonic: SecretString,
    seed: Zeroizing<[u8; 64]>,
}

pub struct AccountStore {
    config: StoreConfig,
    secret: Option<WalletSecret>,
    accounts: Vec<Account>,
    active: Option<AccountId>,
    next_id: u64,
    /// Per chain: one past the highest derivation index ever issued.
    issued: HashMap<Blockchain, u32>,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl AccountStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            secret: None,
            accounts: Vec::new(),
            active: None,
            next_id: 1,
            issued: HashMap::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ─── Mutations ───────────────────────────────────────────────────

    /// Adopt `mnemonic` (validated and normalized) or generate a fresh one.
    /// A wallet is initialized at most once.
    pub fn initialize_wallet(&mut self, mnemonic: Option<&str>) -> Result<(), WalletError> {
        if self.secret.is_some() {
            return Err(WalletError::AlreadyInitialized);
        }

        let generated = mnemonic.is_none();
        let phrase = match mnemonic {
            Some(phrase) => mnemonic::normalize_mnemonic(phrase)?,
            None => mnemonic::generate_mnemonic(self.config.mnemonic_words)?,
        };
        let seed = mnemonic::mnemonic_to_seed(phrase.expose_secret())?;

        self.secret = Some(WalletSecret {
            mnemonic: phrase,
            seed,
        });
        info!(generated, "wallet initialized");
        Ok(())
    }

    /// Derive and append a new account. The first account of the wallet
    /// becomes active; later ones leave the active account alone.
    pub fn create_account(
        &mut self,
        name: &str,
        blockchain: Blockchain,
    ) -> Result<Account, WalletError> {
        let secret = self.secret.as_ref().ok_or(WalletError::WalletNotInitialized)?;
        let name = validate_name(name)?;
        let index = self.next_index(blockchain)?;

        let keys = derivation::derive_from_seed(secret.seed.as_slice(), blockchain, index)?;

        let id = AccountId(self.next_id);
        let account = Account {
            id,
            name,
            blockchain,
            derivation_index: index,
            derivation_path: keys.derivation_path,
            address: keys.address,
            private_key: keys.private_key,
            created_at: Utc::now(),
        };

        self.next_id += 1;
        let issued = self.issued.entry(blockchain).or_insert(0);
        *issued = (*issued).max(index + 1);
        if self.active.is_none() {
            self.active = Some(id);
        }
        self.accounts.push(account.clone());

        info!(
            account_id = %id,
            %blockchain,
            path = %account.derivation_path,
            address = %account.address,
            active = self.active == Some(id),
            "account created"
        );
        Ok(account)
    }

    /// Make `id` the single active account.
    pub fn switch_account(&mut self, id: AccountId) -> Result<(), WalletError> {
        self.position(id)?;
        let previous = self.active.replace(id);
        debug!(account_id = %id, previous = ?previous, "active account switched");
        Ok(())
    }

    /// Remove `id`. If it was active, the earliest remaining account takes
    /// over; removing the last account leaves no active account.
    pub fn delete_account(&mut self, id: AccountId) -> Result<Account, WalletError> {
        let pos = self.position(id)?;
        let removed = self.accounts.remove(pos);

        if self.active == Some(id) {
            self.active = self.accounts.first().map(|a| a.id);
        }

        info!(
            account_id = %id,
            blockchain = %removed.blockchain,
            path = %removed.derivation_path,
            new_active = ?self.active,
            "account deleted"
        );
        Ok(removed)
    }

    pub fn update_account_name(&mut self, id: AccountId, new_name: &str) -> Result<(), WalletError> {
        let pos = self.position(id)?;
        let name = validate_name(new_name)?;
        self.accounts[pos].name = name;
        debug!(account_id = %id, "account renamed");
        Ok(())
    }

    // ─── Reads ───────────────────────────────────────────────────────

    pub fn is_initialized(&self) -> bool {
        self.secret.is_some()
    }

    /// The wallet mnemonic, for backup display.
    pub fn mnemonic(&self) -> Option<&SecretString> {
        self.secret.as_ref().map(|s| &s.mnemonic)
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn accounts_for(&self, blockchain: Blockchain) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(move |a| a.blockchain == blockchain)
    }

    pub fn active_account_id(&self) -> Option<AccountId> {
        self.active
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.active.and_then(|id| self.account(id))
    }

    pub fn is_active(&self, id: AccountId) -> bool {
        self.active == Some(id)
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            is_initialized: self.is_initialized(),
            active_account: self.active,
            accounts: self
                .accounts
                .iter()
                .map(|a| AccountSummary::new(a, self.is_active(a.id)))
                .collect(),
        }
    }

    /// Re-derive `id` from the mnemonic and its recorded index and check that
    /// path, address and private key all match what was stored.
    pub fn verify_account(&self, id: AccountId) -> Result<bool, WalletError> {
        let secret = self.secret.as_ref().ok_or(WalletError::WalletNotInitialized)?;
        let account = self.account(id).ok_or(WalletError::AccountNotFound(id))?;

        let keys = derivation::derive_account_keys(
            secret.mnemonic.expose_secret(),
            account.blockchain,
            account.derivation_index,
        )?;

        Ok(keys.derivation_path == account.derivation_path
            && keys.address == account.address
            && keys.private_key == account.private_key)
    }

    fn position(&self, id: AccountId) -> Result<usize, WalletError> {
        self.accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(WalletError::AccountNotFound(id))
    }

    fn next_index(&self, blockchain: Blockchain) -> Result<u32, WalletError> {
        let index = match self.config.index_policy {
            IndexPolicy::CountExisting => self.accounts_for(blockchain).count(),
            IndexPolicy::NeverReuse => self.issued.get(&blockchain).copied().unwrap_or(0) as usize,
        };
        u32::try_from(index).map_err(|_| {
            WalletError::DerivationFailed(format!("no derivation index left for {blockchain}"))
        })
    }
}

fn validate_name(name: &str) -> Result<String, WalletError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(WalletError::InvalidName(
            "account name must not be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}
