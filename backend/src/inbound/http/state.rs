//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmailValidator, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub email_validator: Arc<dyn EmailValidator>,
}

impl HttpState {
    /// Construct state from its ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use login_backend::domain::AccountAuthenticationService;
    /// use login_backend::inbound::http::state::HttpState;
    /// use login_backend::outbound::crypto::{BcryptAdapter, RandomTokenIssuer};
    /// use login_backend::outbound::persistence::InMemoryAccountRepository;
    /// use login_backend::outbound::validation::RegexEmailValidator;
    ///
    /// let login = AccountAuthenticationService::new(
    ///     Arc::new(InMemoryAccountRepository::new()),
    ///     Arc::new(BcryptAdapter::default()),
    ///     Arc::new(RandomTokenIssuer),
    /// );
    /// let state = HttpState::new(Arc::new(login), Arc::new(RegexEmailValidator));
    /// let _login = state.login.clone();
    /// ```
    pub fn new(login: Arc<dyn LoginService>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            login,
            email_validator,
        }
    }
}
