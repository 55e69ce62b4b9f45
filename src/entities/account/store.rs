//! Persistence contract for accounts

use super::model::Account;
use crate::core::StorageError;
use async_trait::async_trait;

/// Account storage, keyed by the unique email
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert an account, replacing any account with the same email
    async fn save(&self, account: Account) -> Result<Account, StorageError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StorageError>;
}
