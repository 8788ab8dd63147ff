//! Startup account seeding.
//!
//! The in-memory store starts empty, so a server without seeding rejects
//! every login. Operators opt in through the `LOGIN_SEED_*` settings.

use thiserror::Error;
use tracing::info;

use crate::config::{AppSettings, SeedSettingsError};
use crate::domain::ports::{AccountStore, AccountStoreError, Hasher};
use crate::domain::{Account, AccountRegistrationService, RegistrationError};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed settings are incomplete.
    #[error(transparent)]
    Settings(#[from] SeedSettingsError),
    /// Hashing or storing the seed account failed.
    #[error("account seeding failed: {0}")]
    Registration(#[from] RegistrationError),
}

/// Register the configured seed account when seeding is enabled.
///
/// An already-registered seed email is not an error; the existing account
/// is left untouched and `Ok(None)` is returned.
///
/// # Examples
///
/// ```rust,no_run
/// use std::ffi::OsString;
/// use std::sync::Arc;
///
/// use ortho_config::OrthoConfig;
/// use login_backend::config::AppSettings;
/// use login_backend::domain::AccountRegistrationService;
/// use login_backend::outbound::crypto::BcryptAdapter;
/// use login_backend::outbound::persistence::InMemoryAccountRepository;
/// use login_backend::seeding::seed_account_on_startup;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = AppSettings::load_from_iter([OsString::from("login-backend")])?;
/// let registration = AccountRegistrationService::new(
///     Arc::new(BcryptAdapter::default()),
///     Arc::new(InMemoryAccountRepository::new()),
/// );
/// let seeded = seed_account_on_startup(&settings, &registration).await?;
/// assert!(seeded.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_account_on_startup<H, S>(
    settings: &AppSettings,
    registration: &AccountRegistrationService<H, S>,
) -> Result<Option<Account>, StartupSeedingError>
where
    H: Hasher,
    S: AccountStore,
{
    let Some(account) = settings.seed_account()? else {
        info!(reason = "disabled", "account seeding skipped");
        return Ok(None);
    };

    match registration.register(account).await {
        Ok(stored) => {
            info!(account_id = %stored.id(), email = stored.email(), "seed account registered");
            Ok(Some(stored))
        }
        Err(RegistrationError::Store(AccountStoreError::DuplicateEmail { email })) => {
            info!(email = %email, "seed account already present; skipping");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    //! Startup seeding against the real in-memory adapters.

    use super::*;
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use crate::domain::ports::AccountLookup;
    use crate::outbound::crypto::BcryptAdapter;
    use crate::outbound::persistence::InMemoryAccountRepository;

    type Registration = AccountRegistrationService<BcryptAdapter, InMemoryAccountRepository>;

    fn settings(enabled: bool, email: Option<&str>, password: Option<&str>) -> AppSettings {
        AppSettings {
            bind_addr: None,
            bcrypt_cost: None,
            seed_enabled: enabled,
            seed_name: Some("Tony".to_owned()),
            seed_email: email.map(str::to_owned),
            seed_password: password.map(str::to_owned),
        }
    }

    #[fixture]
    fn store() -> Arc<InMemoryAccountRepository> {
        Arc::new(InMemoryAccountRepository::new())
    }

    fn registration(store: &Arc<InMemoryAccountRepository>) -> Registration {
        AccountRegistrationService::new(Arc::new(BcryptAdapter::new(4)), Arc::clone(store))
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_seeding_leaves_store_empty(store: Arc<InMemoryAccountRepository>) {
        let outcome = seed_account_on_startup(
            &settings(false, Some("tony@email.com"), Some("123")),
            &registration(&store),
        )
        .await
        .expect("disabled seeding succeeds");

        assert!(outcome.is_none());
        let found = store
            .load_by_email("tony@email.com")
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn enabled_seeding_stores_hashed_account(store: Arc<InMemoryAccountRepository>) {
        let seeded = seed_account_on_startup(
            &settings(true, Some("tony@email.com"), Some("123")),
            &registration(&store),
        )
        .await
        .expect("seeding succeeds")
        .expect("account seeded");

        assert_eq!(seeded.name(), "Tony");
        assert_ne!(seeded.password_hash(), "123");
        let found = store
            .load_by_email("tony@email.com")
            .await
            .expect("lookup succeeds");
        assert_eq!(found, Some(seeded));
    }

    #[rstest]
    #[tokio::test]
    async fn repeated_seeding_is_skipped(store: Arc<InMemoryAccountRepository>) {
        let config = settings(true, Some("tony@email.com"), Some("123"));
        let registration = registration(&store);
        seed_account_on_startup(&config, &registration)
            .await
            .expect("first seeding succeeds");

        let second = seed_account_on_startup(&config, &registration)
            .await
            .expect("duplicate seed is tolerated");

        assert!(second.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn incomplete_settings_are_rejected(store: Arc<InMemoryAccountRepository>) {
        let err = seed_account_on_startup(
            &settings(true, None, Some("123")),
            &registration(&store),
        )
        .await
        .expect_err("missing email must fail");

        assert!(matches!(
            err,
            StartupSeedingError::Settings(SeedSettingsError::Missing {
                variable: "LOGIN_SEED_EMAIL"
            })
        ));
    }
}
