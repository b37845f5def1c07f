/**
 * Password Hashing
 *
 * Salted bcrypt hashing and verification. Both operations are CPU-bound and
 * run on tokio's blocking pool so they never stall the async workers.
 *
 * # Security
 *
 * - Each digest carries its own random salt and cost factor
 * - Verification compares digests in constant time (inside bcrypt)
 * - A malformed digest verifies as `false`, never as an error
 * - `verify_absent` spends the same work when there is no digest to check,
 *   so a login for an unknown account takes as long as a wrong password
 */

use thiserror::Error;

/// Errors from password hashing
///
/// Only raised on system failures; a wrong password is never an error.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("failed to hash password: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Bcrypt password hasher with a fixed cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub async fn hash(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(digest)
    }

    /// Check a plaintext password against a stored digest
    pub async fn verify(&self, password: &str, digest: &str) -> bool {
        let password = password.to_owned();
        let digest = digest.to_owned();
        let outcome =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest)).await;

        match outcome {
            Ok(Ok(valid)) => valid,
            Ok(Err(e)) => {
                tracing::warn!("Stored password digest could not be parsed: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// Do the bcrypt work of one `verify` when no account matched
    ///
    /// Hashes the password at this hasher's cost and discards the result.
    /// Always returns `false`.
    pub async fn verify_absent(&self, password: &str) -> bool {
        let password = password.to_owned();
        let cost = self.cost;
        if let Err(e) = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await {
            tracing::error!("Password verification task failed: {}", e);
        }
        false
    }
}
