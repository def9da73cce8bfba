use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{AccountId, Blockchain, PrivateKey};

/// One derived account held by the store.
///
/// Everything except `name` is fixed at creation. The private key is never
/// serialized.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub blockchain: Blockchain,
    pub derivation_index: u32,
    pub derivation_path: String,
    pub address: String,
    #[serde(skip)]
    pub private_key: PrivateKey,
    pub created_at: DateTime<Utc>,
}

/// Account as shown to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub name: String,
    pub blockchain: Blockchain,
    pub derivation_path: String,
    pub address: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AccountSummary {
    pub(crate) fn new(account: &Account, is_active: bool) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            blockchain: account.blockchain,
            derivation_path: account.derivation_path.clone(),
            address: account.address.clone(),
            is_active,
            created_at: account.created_at,
        }
    }
}

/// Read-only view of the wallet for rendering. Holds no secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletSnapshot {
    pub is_initialized: bool,
    pub active_account: Option<AccountId>,
    pub accounts: Vec<AccountSummary>,
}
