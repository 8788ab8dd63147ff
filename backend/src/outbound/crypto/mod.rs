//! Cryptographic adapters for password hashing and token issuance.

mod bcrypt_adapter;
mod random_token_issuer;

pub use bcrypt_adapter::BcryptAdapter;
pub use random_token_issuer::RandomTokenIssuer;
