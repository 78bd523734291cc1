//! Credential hashing contract.

use crate::error::AppError;
use async_trait::async_trait;

/// One-way hashing of plaintext passwords before they are persisted.
///
/// The cost factor is fixed when the hasher is built, so callers only pass the
/// plaintext.
///
/// # Implementations
///
/// - [`crate::infrastructure::hashing::Argon2Hasher`] - Argon2id, PHC string output
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hashes `plaintext` and returns an opaque, self-describing hash string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    async fn hash(&self, plaintext: &str) -> Result<String, AppError>;
}
