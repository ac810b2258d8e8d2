//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and token configuration.
///
/// Loaded once at process start; every field is immutable afterwards.
/// Swapping the signing key requires a restart and invalidates in-flight
/// tokens no earlier than their natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Signing algorithm: `"HS256"`, `"HS384"`, or `"HS512"`.
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// TTL for revocation-list entries in seconds.
    ///
    /// Must be at least the refresh token lifetime so a revoked token can
    /// never outlive its revocation record.
    #[serde(default = "default_revocation_ttl")]
    pub revocation_ttl_seconds: u64,
    /// TTL for email-action tokens in minutes.
    #[serde(default = "default_email_token_ttl")]
    pub email_token_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum number of password bytes fed to the hash function.
    #[serde(default = "default_password_max_bytes")]
    pub password_max_bytes: usize,
}

impl AuthConfig {
    /// Checks cross-field invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.jwt_algorithm.as_str() {
            "HS256" | "HS384" | "HS512" => {}
            other => {
                return Err(AppError::configuration(format!(
                    "Unsupported signing algorithm '{other}'. Supported: HS256, HS384, HS512"
                )));
            }
        }

        let refresh_ttl_seconds = self.refresh_ttl_days * 24 * 60 * 60;
        if self.revocation_ttl_seconds < refresh_ttl_seconds {
            return Err(AppError::configuration(format!(
                "revocation_ttl_seconds ({}) is shorter than the refresh token \
                 lifetime ({refresh_ttl_seconds}s); a revoked token would outlive \
                 its revocation record",
                self.revocation_ttl_seconds
            )));
        }

        if self.password_max_bytes == 0 {
            return Err(AppError::configuration(
                "password_max_bytes must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            revocation_ttl_seconds: default_revocation_ttl(),
            email_token_ttl_minutes: default_email_token_ttl(),
            password_min_length: default_password_min(),
            password_max_bytes: default_password_max_bytes(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    2
}

fn default_revocation_ttl() -> u64 {
    // Matches the default refresh lifetime of 2 days.
    172_800
}

fn default_email_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}

fn default_password_max_bytes() -> usize {
    72
}
