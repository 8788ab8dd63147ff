//! Authentication primitives such as login credentials and access tokens.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Domain error returned when login payload values are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was absent or empty.
    MissingEmail,
    /// Password was absent or empty.
    MissingPassword,
}

impl LoginValidationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingEmail => "email",
            Self::MissingPassword => "password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field: {}", self.field())
    }
}

impl std::error::Error for LoginValidationError {}

/// Shape-checked login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is non-empty. Format is checked separately by an email
///   validator so that a malformed address is reported distinctly.
/// - `password` is non-empty and keeps caller-provided whitespace to avoid
///   surprising credential comparisons.
///
/// # Examples
/// ```
/// use login_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("tony@email.com", "123").unwrap();
/// assert_eq!(creds.email(), "tony@email.com");
/// assert_eq!(creds.password(), "123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    ///
    /// Email is checked before password so callers always learn about the
    /// first missing field in a fixed order.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        if email.is_empty() {
            return Err(LoginValidationError::MissingEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::MissingPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for account lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Opaque credential issued after a successful authentication.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Result of a credential check.
///
/// `NotAuthenticated` covers both an unknown email and a wrong password; the
/// two are deliberately indistinguishable to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    Authenticated(AccessToken),
    NotAuthenticated,
}
