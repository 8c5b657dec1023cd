//! In-memory guild settings store

use async_trait::async_trait;
use dashmap::DashMap;

use super::types::{GuildSettings, GuildSettingsManager, SettingsEdit};
use crate::error::KriessResult;

/// Guild settings held in a concurrent map, lost on shutdown
#[derive(Debug, Default)]
pub struct InMemoryGuildSettings {
    settings: DashMap<u64, GuildSettings>,
}

impl InMemoryGuildSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guilds with stored settings
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

#[async_trait]
impl GuildSettingsManager for InMemoryGuildSettings {
    async fn settings_for(&self, guild_id: u64) -> KriessResult<GuildSettings> {
        Ok(self
            .settings
            .entry(guild_id)
            .or_insert_with(|| GuildSettings::new(guild_id))
            .clone())
    }

    async fn edit_settings(&self, guild_id: u64, edit: SettingsEdit) -> KriessResult<()> {
        let mut entry = self
            .settings
            .entry(guild_id)
            .or_insert_with(|| GuildSettings::new(guild_id));
        edit(entry.value_mut());
        tracing::debug!("Updated settings for guild {}", guild_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_guild_gets_defaults() {
        let store = InMemoryGuildSettings::new();
        let settings = store.settings_for(42).await.unwrap();

        assert_eq!(settings, GuildSettings::new(42));
        assert_eq!(settings.effective_prefix("!"), "!");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_prefix() {
        let store = InMemoryGuildSettings::new();
        store
            .edit_settings(7, Box::new(|s| s.prefix = Some("?".to_string())))
            .await
            .unwrap();

        let settings = store.settings_for(7).await.unwrap();
        assert_eq!(settings.effective_prefix("!"), "?");
    }
}
