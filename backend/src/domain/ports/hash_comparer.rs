//! Driven port for checking a plain-text password against a stored hash.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised when the comparison mechanism itself malfunctions.
    ///
    /// A mismatch is never an error; it is `Ok(false)`.
    pub enum HashComparerError in stage "hash_comparison" {
        /// Stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
        /// Comparison could not be carried out.
        Comparison { message: String } => "password comparison failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HashComparer: Send + Sync {
    /// Return whether `plain_text` hashes to `hash`.
    async fn compare(&self, plain_text: &str, hash: &str) -> Result<bool, HashComparerError>;
}
