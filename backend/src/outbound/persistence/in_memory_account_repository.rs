//! In-memory account repository keyed by email.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{AccountLookup, AccountLookupError, AccountStore, AccountStoreError};
use crate::domain::{Account, AccountId, HashedAccount};

/// Process-local account store.
///
/// Emails are matched exactly; no case folding is applied.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountLookup for InMemoryAccountRepository {
    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, AccountLookupError> {
        let guard = self
            .accounts
            .read()
            .map_err(|err| AccountLookupError::connection(format!("account map poisoned: {err}")))?;
        Ok(guard.get(email).cloned())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountRepository {
    async fn add(&self, account: HashedAccount) -> Result<Account, AccountStoreError> {
        let mut guard = self
            .accounts
            .write()
            .map_err(|err| AccountStoreError::connection(format!("account map poisoned: {err}")))?;
        if guard.contains_key(&account.email) {
            return Err(AccountStoreError::duplicate_email(account.email));
        }

        let HashedAccount {
            name,
            email,
            password_hash,
        } = account;
        let stored = Account::new(AccountId::random(), name, email.clone(), password_hash);
        guard.insert(email, stored.clone());
        Ok(stored)
    }
}
