use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error", "off".
    pub log_level: String,
    /// Shortcut for `log_level = "debug"`.
    pub debug: bool,
}

impl ObservabilityConfig {
    /// Filter directive used when `ESTATUS_LOG` is unset.
    pub fn filter_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            debug: defaults::DEFAULT_DEBUG,
        }
    }
}
