//! Driven port for persisting new accounts.

use async_trait::async_trait;

use crate::domain::{Account, HashedAccount};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account store adapters.
    pub enum AccountStoreError in stage "account_store" {
        /// Another account already uses this email.
        DuplicateEmail { email: String } => "an account already exists for {email}",
        /// Store connection could not be established.
        Connection { message: String } => "account store connection failed: {message}",
        /// Write failed during execution.
        Query { message: String } => "account store write failed: {message}",
    }
}

/// Port for inserting accounts whose password has already been hashed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert the account and return the stored record with its new id.
    async fn add(&self, account: HashedAccount) -> Result<Account, AccountStoreError>;
}
