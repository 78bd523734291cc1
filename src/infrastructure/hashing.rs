//! Argon2 implementation of the credential hasher.

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use serde_json::json;

use crate::domain::hashing::CredentialHasher;
use crate::error::AppError;

/// Hashes passwords with Argon2id into PHC strings (`$argon2id$v=19$...`).
///
/// `cost` is the Argon2 iteration count; memory and parallelism use the
/// crate defaults. Hashing runs on tokio's blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Builds a hasher with the given iteration count.
    ///
    /// # Errors
    ///
    /// Returns an error if `cost` is outside the range Argon2 accepts.
    pub fn new(cost: u32) -> Result<Self, argon2::Error> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost,
            Params::DEFAULT_P_COST,
            None,
        )?;

        Ok(Self { params })
    }

    fn hash_blocking(params: Params, plaintext: &str) -> Result<String, AppError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AppError::internal("Password hashing failed", json!({}))
            })
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let params = self.params.clone();
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || Self::hash_blocking(params, &plaintext))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AppError::internal("Password hashing failed", json!({}))
            })?
    }
}
