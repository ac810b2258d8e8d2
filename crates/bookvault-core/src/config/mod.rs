//! Process configuration, read once at startup.
//!
//! Settings come from layered TOML files plus environment overrides and are
//! immutable for the life of the process. Each sub-module holds one section
//! of the tree.

pub mod auth;
pub mod blocklist;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::blocklist::BlocklistConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root of the configuration tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token, password, and TTL settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Revocation store settings.
    #[serde(default)]
    pub blocklist: BlocklistConfig,
    /// Tracing output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read and validate the configuration for the named environment.
    ///
    /// Layers, later sources winning: `config/default.toml`, then
    /// `config/{env}.toml`, then environment variables prefixed
    /// `BOOKVAULT__` (double underscore separating section from field).
    /// Missing files are fine; serde defaults cover absent fields.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let merged = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BOOKVAULT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let parsed: Self = merged.try_deserialize()?;
        parsed.auth.validate()?;

        Ok(parsed)
    }
}
