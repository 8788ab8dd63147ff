//! Backend entry-point: loads settings, seeds the account store and serves
//! the login endpoint.

mod server;

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use login_backend::config::AppSettings;
use login_backend::domain::{AccountAuthenticationService, AccountRegistrationService};
use login_backend::inbound::http::state::HttpState;
use login_backend::outbound::crypto::{BcryptAdapter, RandomTokenIssuer};
use login_backend::outbound::persistence::InMemoryAccountRepository;
use login_backend::outbound::validation::RegexEmailValidator;
use login_backend::seeding::seed_account_on_startup;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let accounts = Arc::new(InMemoryAccountRepository::new());
    let bcrypt = Arc::new(BcryptAdapter::new(settings.bcrypt_cost()));

    let registration = AccountRegistrationService::new(bcrypt.clone(), accounts.clone());
    seed_account_on_startup(&settings, &registration)
        .await
        .map_err(std::io::Error::other)?;

    let login = AccountAuthenticationService::new(accounts, bcrypt, Arc::new(RandomTokenIssuer));
    let http_state = HttpState::new(Arc::new(login), Arc::new(RegexEmailValidator));

    let config = ServerConfig::new(settings.bind_addr(), http_state);
    info!(bind_addr = %config.bind_addr(), "starting login server");
    create_server(config)?.await
}
