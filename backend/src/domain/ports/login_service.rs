//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{AuthenticationOutcome, LoginCredentials};

use super::{AccountLookupError, HashComparerError, TokenIssuerError};

/// Collaborator failure raised while authenticating.
///
/// Each variant names the pipeline stage that failed so logging can tell
/// causes apart. None of them is an authentication *rejection*; rejections
/// are [`AuthenticationOutcome::NotAuthenticated`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error(transparent)]
    AccountLookup(#[from] AccountLookupError),
    #[error(transparent)]
    HashComparison(#[from] HashComparerError),
    #[error(transparent)]
    TokenIssuance(#[from] TokenIssuerError),
}

impl AuthenticationError {
    /// Pipeline stage that raised the failure.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::AccountLookup(err) => err.stage(),
            Self::HashComparison(err) => err.stage(),
            Self::TokenIssuance(err) => err.stage(),
        }
    }
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and issue an access token when they match an account.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticationOutcome, AuthenticationError>;
}
