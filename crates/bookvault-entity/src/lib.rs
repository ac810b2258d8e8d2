//! # bookvault-entity
//!
//! Domain entities shared across the Bookvault crates.

pub mod user;

pub use user::{User, UserProfile, UserRole};
