use super::account::Account;
use super::ids::AccountNumber;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared, individually lockable account owned by a directory.
///
/// Holding the mutex guard gives exclusive access to the account for the
/// duration of one operation.
pub type AccountHandle = Arc<Mutex<Account>>;

/// Directory of every account ever opened in a ledger.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Registers a new account.
    ///
    /// Fails with `DuplicateAccountNumber` if the number is already taken;
    /// the check and the insert happen atomically.
    async fn insert(&self, account: Account) -> Result<AccountHandle>;
    async fn get(&self, number: &AccountNumber) -> Result<Option<AccountHandle>>;
    /// Returns every account, ordered by account number.
    async fn all(&self) -> Result<Vec<AccountHandle>>;
    async fn len(&self) -> Result<usize>;
}

pub type AccountDirectoryBox = Box<dyn AccountDirectory>;
