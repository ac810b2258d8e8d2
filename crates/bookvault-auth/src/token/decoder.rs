//! Signed token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};

use bookvault_core::config::auth::AuthConfig;
use bookvault_core::error::AppError;

use super::claims::Claims;
use super::encoder::parse_algorithm;

/// Validates signed access and refresh tokens.
///
/// Decoding is pure: revocation checks live in the authenticator so that
/// policy layers can compose them explicitly.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates a token string, checking signature and expiry.
    ///
    /// Expiry is reported as `TokenExpired` so callers can tell it apart
    /// from forgery; both surface identically at the API boundary.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_token("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => AppError::invalid_token(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}
