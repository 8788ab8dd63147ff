//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_lookup;
mod account_store;
mod email_validator;
mod hash_comparer;
mod hasher;
mod login_service;
mod token_issuer;

#[cfg(test)]
pub use account_lookup::MockAccountLookup;
pub use account_lookup::{AccountLookup, AccountLookupError};
#[cfg(test)]
pub use account_store::MockAccountStore;
pub use account_store::{AccountStore, AccountStoreError};
#[cfg(test)]
pub use email_validator::MockEmailValidator;
pub use email_validator::{EmailValidator, EmailValidatorError};
#[cfg(test)]
pub use hash_comparer::MockHashComparer;
pub use hash_comparer::{HashComparer, HashComparerError};
#[cfg(test)]
pub use hasher::MockHasher;
pub use hasher::{Hasher, HasherError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{AuthenticationError, LoginService};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::{TokenIssuer, TokenIssuerError};
