//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed domain entities and the authentication
//! use cases that inbound adapters drive. Keep types immutable and
//! transport agnostic; adapters own every protocol concern.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - LoginCredentials, AccessToken, AuthenticationOutcome — login values.
//! - Account, AccountId — stored identities.
//! - AccountAuthenticationService — credential verification use case.
//! - AccountRegistrationService — hash-then-store registration use case.

pub mod account;
pub mod account_registration;
pub mod auth;
pub mod authentication_service;
pub mod error;
pub mod ports;

pub use self::account::{Account, AccountId, AccountValidationError, HashedAccount, NewAccount};
pub use self::account_registration::{AccountRegistrationService, RegistrationError};
pub use self::auth::{AccessToken, AuthenticationOutcome, LoginCredentials, LoginValidationError};
pub use self::authentication_service::AccountAuthenticationService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
