//! Thread-safe handle to an [`AccountStore`].
//!
//! Index assignment and the active-account invariant depend on seeing the
//! whole account list, so every call runs under one lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::account::{Account, WalletSnapshot};
use crate::config::StoreConfig;
use crate::error::WalletError;
use crate::store::AccountStore;
use crate::types::{AccountId, Blockchain};

#[derive(Clone, Default)]
pub struct SharedAccountStore {
    inner: Arc<Mutex<AccountStore>>,
}

impl SharedAccountStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::from_store(AccountStore::new(config))
    }

    pub fn from_store(store: AccountStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn initialize_wallet(&self, mnemonic: Option<&str>) -> Result<(), WalletError> {
        self.inner.lock().initialize_wallet(mnemonic)
    }

    pub fn create_account(&self, name: &str, blockchain: Blockchain) -> Result<Account, WalletError> {
        self.inner.lock().create_account(name, blockchain)
    }

    pub fn switch_account(&self, id: AccountId) -> Result<(), WalletError> {
        self.inner.lock().switch_account(id)
    }

    pub fn delete_account(&self, id: AccountId) -> Result<Account, WalletError> {
        self.inner.lock().delete_account(id)
    }

    pub fn update_account_name(&self, id: AccountId, new_name: &str) -> Result<(), WalletError> {
        self.inner.lock().update_account_name(id, new_name)
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` against the store with the lock held.
    pub fn read<R>(&self, f: impl FnOnce(&AccountStore) -> R) -> R {
        f(&self.inner.lock())
    }
}
