//! Logging configuration.

use serde::{Deserialize, Serialize};

/// How the embedding process should emit tracing output.
///
/// The auth core only records events through `tracing` macros; installing
/// a subscriber honouring these settings is the embedder's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level to record: `"trace"` through `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Output shape: `"json"` for machine-readable logs, `"pretty"` for
    /// local development.
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Whether output should be machine-readable JSON.
    pub fn json_output(&self) -> bool {
        self.format == "json"
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}
