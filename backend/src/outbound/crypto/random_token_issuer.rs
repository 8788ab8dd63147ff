//! Opaque access token issuer.
//!
//! Tokens are 32 bytes of OS randomness bound to the account id through
//! SHA-256 and rendered as lowercase hex. Nothing about the token can be
//! decoded by clients.

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::domain::ports::{TokenIssuer, TokenIssuerError};
use crate::domain::{AccessToken, AccountId};

const NONCE_BYTES: usize = 32;

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenIssuer;

#[async_trait]
impl TokenIssuer for RandomTokenIssuer {
    async fn generate(&self, account_id: &AccountId) -> Result<AccessToken, TokenIssuerError> {
        let mut nonce = [0_u8; NONCE_BYTES];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|err| TokenIssuerError::generation(err.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(account_id.as_ref().as_bytes());
        hasher.update(nonce);
        Ok(AccessToken::new(hex::encode(hasher.finalize())))
    }
}
