//! Guild settings types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::KriessResult;

/// Settings for one guild
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSettings {
    pub guild_id: u64,
    /// Prefix override; `None` uses the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl GuildSettings {
    /// Fresh settings for a guild that has none stored
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            prefix: None,
        }
    }

    /// The prefix that triggers commands in this guild
    pub fn effective_prefix<'a>(&'a self, default: &'a str) -> &'a str {
        self.prefix.as_deref().unwrap_or(default)
    }
}

/// Mutation applied by [`GuildSettingsManager::edit_settings`]
pub type SettingsEdit = Box<dyn FnOnce(&mut GuildSettings) + Send>;

/// Lookup and mutation of per-guild settings
#[async_trait]
pub trait GuildSettingsManager: Send + Sync {
    /// Settings for a guild, created with defaults when absent
    async fn settings_for(&self, guild_id: u64) -> KriessResult<GuildSettings>;

    /// Apply `edit` to a guild's settings and store the result
    async fn edit_settings(&self, guild_id: u64, edit: SettingsEdit) -> KriessResult<()>;
}
