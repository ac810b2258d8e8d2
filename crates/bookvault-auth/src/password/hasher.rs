//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use bookvault_core::config::auth::AuthConfig;
use bookvault_core::error::AppError;

/// A syntactically valid digest with default Argon2id cost parameters.
/// Verified against on the unknown-email login path so that "no such user"
/// costs the same as "wrong password".
const DUMMY_DIGEST: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Maximum number of password bytes fed to the hash function.
    max_bytes: usize,
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            max_bytes: config.password_max_bytes,
        }
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// Input is truncated to the configured maximum byte length to bound
    /// hashing cost.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.truncate(password), &salt)
            .map_err(|e| AppError::internal(format!("Argon2 hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id digest.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// A malformed digest is an internal error, distinct from a mismatch.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(digest)
            .map_err(|e| AppError::internal(format!("Stored digest is not a valid PHC string: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(self.truncate(password), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Argon2 verification failed: {e}"
            ))),
        }
    }

    /// Runs a full-cost verification against a fixed dummy digest,
    /// discarding the outcome.
    pub fn dummy_verify(&self, password: &str) {
        let _ = self.verify(password, DUMMY_DIGEST);
    }

    fn truncate<'a>(&self, password: &'a str) -> &'a [u8] {
        let bytes = password.as_bytes();
        &bytes[..bytes.len().min(self.max_bytes)]
    }
}
