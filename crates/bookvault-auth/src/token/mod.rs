//! Signed token creation and validation.
//!
//! Access and refresh tokens share one signing domain; email-action tokens
//! use a separately derived key so the two domains can never cross-validate.

pub mod claims;
pub mod decoder;
pub mod email;
pub mod encoder;

pub use claims::{Claims, TokenKind};
pub use decoder::JwtDecoder;
pub use email::EmailTokenCodec;
pub use encoder::{JwtEncoder, TokenPair};
