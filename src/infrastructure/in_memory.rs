use crate::domain::account::Account;
use crate::domain::ids::AccountNumber;
use crate::domain::ports::{AccountDirectory, AccountHandle};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A thread-safe in-memory account directory.
///
/// Lookups take a shared read lock on the map; registering an account takes
/// the write lock. Each account sits behind its own mutex so balance
/// mutations never hold the directory lock.
#[derive(Default, Clone)]
pub struct InMemoryAccountDirectory {
    accounts: Arc<RwLock<BTreeMap<AccountNumber, AccountHandle>>>,
}

impl InMemoryAccountDirectory {
    /// Creates a new, empty in-memory directory.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn insert(&self, account: Account) -> Result<AccountHandle> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.number().clone()) {
            Entry::Occupied(entry) => Err(LedgerError::DuplicateAccountNumber(
                entry.key().to_string(),
            )),
            Entry::Vacant(entry) => {
                let handle = Arc::new(Mutex::new(account));
                entry.insert(Arc::clone(&handle));
                Ok(handle)
            }
        }
    }

    async fn get(&self, number: &AccountNumber) -> Result<Option<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(number).cloned())
    }

    async fn all(&self) -> Result<Vec<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.accounts.read().await.len())
    }
}
