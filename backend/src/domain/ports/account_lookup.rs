//! Driven port for loading accounts by email.
//!
//! The authentication service only needs read access to the account store,
//! so the lookup capability lives apart from [`super::AccountStore`].

use async_trait::async_trait;

use crate::domain::Account;

use super::define_port_error;

define_port_error! {
    /// Errors raised by account lookup adapters.
    pub enum AccountLookupError in stage "account_lookup" {
        /// Store connection could not be established.
        Connection { message: String } => "account lookup connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "account lookup query failed: {message}",
    }
}

/// Port for reading an account record keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Return the account registered under `email`, if any.
    ///
    /// A missing account is `Ok(None)`; errors are reserved for
    /// infrastructure failures.
    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, AccountLookupError>;
}
