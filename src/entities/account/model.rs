//! Account entity and the security view derived from it

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Role granted to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    Admin,
    User,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Admin => write!(f, "ADMIN"),
            AccountRole::User => write!(f, "USER"),
        }
    }
}

/// A user account
///
/// `password` holds the raw password until the account is saved through
/// the account service, and a PHC hash string afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub roles: BTreeSet<AccountRole>,
}

impl Account {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        roles: impl IntoIterator<Item = AccountRole>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: password.into(),
            roles: roles.into_iter().collect(),
        }
    }
}

/// What authentication needs to know about an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub username: String,
    pub password_hash: String,
    /// `ROLE_<NAME>` for each role of the account
    pub authorities: BTreeSet<String>,
}

impl From<&Account> for UserDetails {
    fn from(account: &Account) -> Self {
        Self {
            username: account.email.clone(),
            password_hash: account.password.clone(),
            authorities: account
                .roles
                .iter()
                .map(|role| format!("ROLE_{role}"))
                .collect(),
        }
    }
}
