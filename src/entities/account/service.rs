//! Account service: password hashing and lookup by username

use super::model::{Account, UserDetails};
use super::store::AccountStore;
use crate::core::AccountError;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;

/// Stores accounts with hashed passwords and resolves them for authentication
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Hash the account's raw password and store it
    pub async fn save_account(&self, mut account: Account) -> Result<Account, AccountError> {
        account.password = hash_password(&account.password)?;
        let saved = self.store.save(account).await?;
        tracing::info!(email = %saved.email, "account saved");
        Ok(saved)
    }

    /// Resolve an account by its email
    pub async fn load_user_by_username(&self, username: &str) -> Result<UserDetails, AccountError> {
        let account = self
            .store
            .find_by_email(username)
            .await?
            .ok_or_else(|| AccountError::UsernameNotFound(username.to_string()))?;

        Ok(UserDetails::from(&account))
    }

    /// Check a raw password against a stored hash
    pub fn password_matches(&self, raw: &str, hash: &str) -> Result<bool, AccountError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AccountError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok())
    }
}

fn hash_password(raw: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::PasswordHash(e.to_string()))
}
