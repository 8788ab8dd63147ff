//! Application settings loaded via OrthoConfig.
//!
//! Every value can come from the command line or a `LOGIN_`-prefixed
//! environment variable. Unset values fall back to the defaults exposed by
//! the accessor methods.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::domain::NewAccount;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_SEED_NAME: &str = "admin";

/// Errors raised when the seed settings are incomplete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedSettingsError {
    /// Seeding is enabled but a required value was not configured.
    #[error("account seeding is enabled but {variable} is not set")]
    Missing { variable: &'static str },
}

/// Configuration values for the login server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// bcrypt work factor for newly hashed passwords.
    pub bcrypt_cost: Option<u32>,
    /// Register a seed account on startup.
    #[ortho_config(default = false)]
    pub seed_enabled: bool,
    /// Display name of the seed account.
    #[serde(default, deserialize_with = "lenient_string")]
    pub seed_name: Option<String>,
    /// Email of the seed account.
    #[serde(default, deserialize_with = "lenient_string")]
    pub seed_email: Option<String>,
    /// Plain-text password of the seed account. Hashed before storage.
    #[serde(default, deserialize_with = "lenient_string")]
    pub seed_password: Option<String>,
}

impl AppSettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDR))
    }

    /// Return the bcrypt cost, falling back to the library default.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST)
    }

    pub fn is_seed_enabled(&self) -> bool {
        self.seed_enabled
    }

    /// Build the account to register at startup.
    ///
    /// Returns `Ok(None)` when seeding is disabled. Email and password have
    /// no defaults so a forgotten variable never seeds a guessable account.
    pub fn seed_account(&self) -> Result<Option<NewAccount>, SeedSettingsError> {
        if !self.seed_enabled {
            return Ok(None);
        }
        let email = non_empty(self.seed_email.as_deref()).ok_or(SeedSettingsError::Missing {
            variable: "LOGIN_SEED_EMAIL",
        })?;
        let password =
            non_empty(self.seed_password.as_deref()).ok_or(SeedSettingsError::Missing {
                variable: "LOGIN_SEED_PASSWORD",
            })?;
        let name = non_empty(self.seed_name.as_deref()).unwrap_or(DEFAULT_SEED_NAME);
        Ok(Some(NewAccount::new(name, email, password)))
    }
}

/// Accept a string setting that the environment layer parsed as a scalar,
/// so `LOGIN_SEED_PASSWORD=123` stays the text `"123"`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
        Flag(bool),
    }

    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
            Scalar::Text(text) => text,
            Scalar::Signed(number) => number.to_string(),
            Scalar::Unsigned(number) => number.to_string(),
            Scalar::Float(number) => number.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }),
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
