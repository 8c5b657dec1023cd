//! Configuration model

use serde::{Deserialize, Serialize};

use super::logging_config::{LoggingConfig, LoggingOverlay};
use crate::error::{KriessError, KriessResult};

/// Dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KriessConfig {
    /// Prefix used by guilds without an override
    pub default_prefix: String,
    /// User ids allowed to run owner-only commands
    pub owners: Vec<String>,
    /// Bot account id; enables `<@id>` mention prefixes before the ready event
    pub bot_user_id: Option<String>,
    /// Ignore messages written by bot accounts
    pub ignore_bots: bool,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// One config file as written. Keys the file leaves out are `None`, so
/// applying it never resets what an earlier source set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub default_prefix: Option<String>,
    pub owners: Vec<String>,
    pub bot_user_id: Option<String>,
    pub ignore_bots: Option<bool>,
    pub logging: LoggingOverlay,
}

impl Default for KriessConfig {
    fn default() -> Self {
        Self {
            default_prefix: "!".to_string(),
            owners: Vec::new(),
            bot_user_id: None,
            ignore_bots: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl KriessConfig {
    /// Overwrite the fields `overlay` sets; owner lists are combined
    pub fn apply(&mut self, overlay: ConfigOverlay) {
        if let Some(prefix) = overlay.default_prefix {
            self.default_prefix = prefix;
        }
        for owner in overlay.owners {
            if !self.owners.contains(&owner) {
                self.owners.push(owner);
            }
        }
        if overlay.bot_user_id.is_some() {
            self.bot_user_id = overlay.bot_user_id;
        }
        if let Some(ignore_bots) = overlay.ignore_bots {
            self.ignore_bots = ignore_bots;
        }
        self.logging.apply(overlay.logging);
    }

    /// Validate the configuration
    pub fn validate(&self) -> KriessResult<()> {
        if self.default_prefix.is_empty() {
            return Err(KriessError::invalid_field(
                "Default prefix cannot be empty",
                "default_prefix",
            ));
        }
        if self.default_prefix.chars().any(char::is_whitespace) {
            return Err(KriessError::invalid_field(
                format!("Default prefix '{}' contains whitespace", self.default_prefix),
                "default_prefix",
            ));
        }
        if let Some(id) = &self.bot_user_id {
            if id.parse::<u64>().is_err() {
                return Err(KriessError::invalid_field(
                    format!("Bot user id '{}' is not a snowflake", id),
                    "bot_user_id",
                ));
            }
        }
        Ok(())
    }
}
