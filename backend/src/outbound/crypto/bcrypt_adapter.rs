//! bcrypt-backed password hashing and comparison.
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool rather than on the async executor threads.

use async_trait::async_trait;
use bcrypt::BcryptError;
use tokio::task;

use crate::domain::ports::{HashComparer, HashComparerError, Hasher, HasherError};

/// Password hasher and comparer using bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    /// Create an adapter hashing with the given work factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor applied to new hashes.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptAdapter {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

fn map_verify_error(err: BcryptError) -> HashComparerError {
    match err {
        BcryptError::InvalidHash(_)
        | BcryptError::InvalidPrefix(_)
        | BcryptError::InvalidCost(_)
        | BcryptError::InvalidBase64(_) => HashComparerError::malformed_hash(err.to_string()),
        other => HashComparerError::comparison(other.to_string()),
    }
}

#[async_trait]
impl HashComparer for BcryptAdapter {
    async fn compare(&self, plain_text: &str, hash: &str) -> Result<bool, HashComparerError> {
        let plain_text = plain_text.to_owned();
        let hash = hash.to_owned();
        task::spawn_blocking(move || bcrypt::verify(plain_text.as_bytes(), &hash))
            .await
            .map_err(|err| HashComparerError::comparison(format!("blocking task failed: {err}")))?
            .map_err(map_verify_error)
    }
}

#[async_trait]
impl Hasher for BcryptAdapter {
    async fn hash(&self, plain_text: &str) -> Result<String, HasherError> {
        let plain_text = plain_text.to_owned();
        let cost = self.cost;
        task::spawn_blocking(move || bcrypt::hash(plain_text.as_bytes(), cost))
            .await
            .map_err(|err| HasherError::hashing(format!("blocking task failed: {err}")))?
            .map_err(|err| HasherError::hashing(err.to_string()))
    }
}
