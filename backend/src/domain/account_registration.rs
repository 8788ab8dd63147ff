//! Account registration service.
//!
//! Hashes the caller's password and stores the account. The server uses it
//! to seed the account store at startup.

use std::sync::Arc;

use crate::domain::ports::{AccountStore, AccountStoreError, Hasher, HasherError};
use crate::domain::{Account, HashedAccount, NewAccount};

/// Failure raised while registering an account.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Hashing(#[from] HasherError),
    #[error(transparent)]
    Store(#[from] AccountStoreError),
}

/// Registration use case: hash, then store.
#[derive(Clone)]
pub struct AccountRegistrationService<H, S> {
    hasher: Arc<H>,
    store: Arc<S>,
}

impl<H, S> AccountRegistrationService<H, S> {
    /// Create a new service with the given collaborators.
    pub fn new(hasher: Arc<H>, store: Arc<S>) -> Self {
        Self { hasher, store }
    }
}

impl<H, S> AccountRegistrationService<H, S>
where
    H: Hasher,
    S: AccountStore,
{
    /// Register a new account and return the stored record.
    ///
    /// The plain-text password never reaches the store.
    pub async fn register(&self, account: NewAccount) -> Result<Account, RegistrationError> {
        let password_hash = self.hasher.hash(account.password()).await?;
        let stored = self
            .store
            .add(HashedAccount {
                name: account.name().to_owned(),
                email: account.email().to_owned(),
                password_hash,
            })
            .await?;
        Ok(stored)
    }
}
