//! Signed token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use bookvault_core::config::auth::AuthConfig;
use bookvault_core::error::AppError;
use bookvault_entity::user::{User, UserRole};

use super::claims::Claims;

/// Creates signed access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Header carrying the configured algorithm.
    header: Header,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// The two tokens a successful login hands back, with their expiries.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived token for resource operations.
    pub access_token: String,
    /// Long-lived token accepted only by the refresh flow.
    pub refresh_token: String,
    /// When the access token lapses.
    pub access_expires_at: DateTime<Utc>,
    /// When the refresh token lapses.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(algorithm),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        })
    }

    /// Generates a new access + refresh token pair for the given user.
    ///
    /// Each token gets a freshly generated jti. The refresh token carries
    /// no role claim.
    pub fn token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) =
            self.sign_access(user.id, &user.email, user.role)?;
        let (refresh_token, refresh_expires_at) = self.sign_refresh(user.id, &user.email)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Signs a standalone access token (e.g., after refresh).
    pub fn sign_access(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.access_ttl_minutes);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role: Some(role),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            refresh: false,
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok((token, exp))
    }

    /// Signs a standalone refresh token.
    pub fn sign_refresh(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.refresh_ttl_days);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role: None,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            refresh: true,
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok((token, exp))
    }
}

/// Parses the configured algorithm name, restricted to the HMAC family
/// compatible with a shared-secret key.
pub(crate) fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported signing algorithm '{other}'. Supported: HS256, HS384, HS512"
        ))),
    }
}
