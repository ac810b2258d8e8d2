//! Email-action tokens for verification and password-reset links.
//!
//! These tokens live in their own signing domain: the key is derived from
//! the configured secret plus a fixed context string, so an email-action
//! token can never be replayed as a session token and vice versa. They are
//! stateless — validity is signature plus elapsed time, with no revocation
//! entry.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use bookvault_core::config::auth::AuthConfig;
use bookvault_core::error::AppError;

use super::encoder::parse_algorithm;

/// Context string mixed into the signing key for the email-action domain.
const EMAIL_SIGNING_CONTEXT: &str = "bookvault:email-action";

/// Claims carried by an email-action token. The purpose (verify vs reset)
/// is implied by the endpoint that consumes the token, not embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EmailActionClaims {
    /// The email address the action applies to.
    email: String,
    /// Issued-at timestamp (seconds since epoch).
    iat: i64,
    /// Expiration timestamp (seconds since epoch).
    exp: i64,
}

/// Signs and validates email-action tokens.
#[derive(Clone)]
pub struct EmailTokenCodec {
    /// Derived HMAC key for the email-action domain.
    encoding_key: EncodingKey,
    /// Derived HMAC key for verification.
    decoding_key: DecodingKey,
    /// Header carrying the configured algorithm.
    header: Header,
    /// Validation configuration.
    validation: Validation,
    /// Default token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for EmailTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailTokenCodec")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl EmailTokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let key = derive_key(&config.jwt_secret);

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 5;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&key),
            decoding_key: DecodingKey::from_secret(&key),
            header: Header::new(algorithm),
            validation,
            ttl_minutes: config.email_token_ttl_minutes as i64,
        })
    }

    /// Signs an email-action token with the configured TTL.
    pub fn sign(&self, email: &str) -> Result<String, AppError> {
        self.sign_with_ttl(email, chrono::Duration::minutes(self.ttl_minutes))
    }

    /// Signs an email-action token with an explicit TTL.
    pub fn sign_with_ttl(
        &self,
        email: &str,
        ttl: chrono::Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = EmailActionClaims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode email token: {e}")))
    }

    /// Decodes an email-action token and returns the embedded email.
    ///
    /// An elapsed token fails with `TokenExpired`; it never yields a stale
    /// payload.
    pub fn decode(&self, token: &str) -> Result<String, AppError> {
        let token_data = decode::<EmailActionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::token_expired("Email token has expired")
                }
                _ => AppError::invalid_token("Invalid email token"),
            })?;

        Ok(token_data.claims.email)
    }
}

/// Derives the email-domain signing key from the process secret.
fn derive_key(secret: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(EMAIL_SIGNING_CONTEXT.as_bytes());
    hasher.finalize().into()
}
