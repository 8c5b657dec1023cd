//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error, `kriess_core=debug`)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Logging settings as written in a config file; absent keys stay unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingOverlay {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl LoggingConfig {
    /// Overwrite the fields `overlay` sets
    pub fn apply(&mut self, overlay: LoggingOverlay) {
        if let Some(level) = overlay.level {
            self.level = level;
        }
        if let Some(format) = overlay.format {
            self.format = format;
        }
    }
}
