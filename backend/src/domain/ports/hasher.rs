//! Driven port for hashing passwords before they are stored.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum HasherError in stage "password_hashing" {
        /// Hash could not be computed.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Hasher: Send + Sync {
    /// Hash `plain_text` into a self-describing string suitable for storage.
    async fn hash(&self, plain_text: &str) -> Result<String, HasherError>;
}
