//! Session issuance — login, refresh, and logout flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use bookvault_core::error::AppError;
use bookvault_entity::user::UserProfile;

use crate::directory::UserDirectory;
use crate::password::hasher::PasswordHasher;
use crate::revocation::TokenRevocationList;
use crate::token::claims::{Claims, TokenKind};
use crate::token::encoder::{JwtEncoder, TokenPair};

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginOutcome {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// Public view of the authenticated user.
    pub user: UserProfile,
}

/// Mints and retires session tokens.
///
/// All collaborators are injected at construction; the issuer itself is
/// immutable and shared across requests.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    /// External user directory.
    directory: Arc<dyn UserDirectory>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Revocation list for logout.
    revocations: Arc<TokenRevocationList>,
}

impl SessionIssuer {
    /// Creates a new session issuer with all required dependencies.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        revocations: Arc<TokenRevocationList>,
    ) -> Self {
        Self {
            directory,
            hasher,
            encoder,
            revocations,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the subject by email
    /// 2. Verify the password
    /// 3. Mint an access + refresh token pair
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`;
    /// the unknown-email path runs a dummy verification so the two are not
    /// timing-distinguishable either.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = match self.directory.find_by_email(email).await? {
            Some(user) => user,
            None => {
                self.hasher.dummy_verify(password);
                debug!("Login attempt for unknown email");
                return Err(AppError::invalid_credentials("Invalid email or password"));
            }
        };

        let password_valid = self.hasher.verify(password, &user.password_hash)?;
        if !password_valid {
            debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials("Invalid email or password"));
        }

        let tokens = self.encoder.token_pair(&user)?;

        info!(user_id = %user.id, "Login successful");

        Ok(LoginOutcome {
            tokens,
            user: user.profile(),
        })
    }

    /// Mints a new access token from valid refresh claims.
    ///
    /// The expiry check is independent of signature validation, and the
    /// subject's CURRENT role is re-read from the directory so a role
    /// change cannot persist through refreshes.
    pub async fn refresh(&self, claims: &Claims) -> Result<(String, DateTime<Utc>), AppError> {
        if claims.kind() != TokenKind::Refresh {
            return Err(AppError::refresh_token_required(
                "Please provide a valid refresh token",
            ));
        }

        if claims.expires_at() <= Utc::now() {
            return Err(AppError::token_expired("Refresh token has expired"));
        }

        let user = self
            .directory
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::invalid_token("Subject no longer exists"))?;

        let (token, expires_at) = self.encoder.sign_access(user.id, &user.email, user.role)?;

        info!(user_id = %user.id, "Access token refreshed");

        Ok((token, expires_at))
    }

    /// Revokes the presented token's id.
    ///
    /// Idempotent: logging out twice rewrites the same revocation entry.
    /// Returns only after the store has acknowledged the write.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        self.revocations.revoke(claims.jti).await?;

        info!(user_id = %claims.sub, jti = %claims.jti, "Session token revoked");

        Ok(())
    }
}
