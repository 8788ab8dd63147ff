//! Driven port for issuing opaque access tokens.
//!
//! Token cryptography stays behind this boundary; the domain treats the
//! result as an opaque string.

use async_trait::async_trait;

use crate::domain::{AccessToken, AccountId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token issuing adapters.
    pub enum TokenIssuerError in stage "token_issuance" {
        /// Token material could not be generated.
        Generation { message: String } => "access token generation failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a fresh token for the given account.
    async fn generate(&self, account_id: &AccountId) -> Result<AccessToken, TokenIssuerError>;
}
