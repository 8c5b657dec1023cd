//! Core types for the command manager

use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use super::event::CommandEvent;
use super::message::{IncomingMessage, ReplySink};
use crate::commands::arguments::{EntityResolver, MentionResolver};
use crate::commands::registry::CommandRegistry;
use crate::commands::types::Command;
use crate::config::KriessConfig;
use crate::error::{KriessError, KriessResult};
use crate::settings::GuildSettingsManager;

/// Called with the event and error whenever a handler task fails
pub type ErrorHook = Arc<dyn Fn(&CommandEvent, &KriessError) + Send + Sync>;

/// Dispatcher from chat messages to command handlers
pub struct CommandManager {
    pub(super) registry: Arc<RwLock<CommandRegistry>>,
    pub(super) settings: Arc<dyn GuildSettingsManager>,
    pub(super) resolver: Arc<dyn EntityResolver>,
    pub(super) sink: Arc<dyn ReplySink>,
    pub(super) owners: RwLock<HashSet<String>>,
    pub(super) mention_prefixes: RwLock<Vec<String>>,
    pub(super) default_prefix: String,
    pub(super) ignore_bots: bool,
    pub(super) error_hook: Option<ErrorHook>,
}

impl CommandManager {
    /// Create a manager from configuration.
    ///
    /// Entity arguments are resolved with [`MentionResolver`] until
    /// [`with_resolver`](Self::with_resolver) installs a platform-backed one.
    pub fn new(
        config: &KriessConfig,
        settings: Arc<dyn GuildSettingsManager>,
        sink: Arc<dyn ReplySink>,
    ) -> Self {
        let manager = Self {
            registry: Arc::new(RwLock::new(CommandRegistry::new())),
            settings,
            resolver: Arc::new(MentionResolver),
            sink,
            owners: RwLock::new(config.owners.iter().cloned().collect()),
            mention_prefixes: RwLock::new(Vec::new()),
            default_prefix: config.default_prefix.clone(),
            ignore_bots: config.ignore_bots,
            error_hook: None,
        };
        if let Some(bot_id) = &config.bot_user_id {
            manager.on_ready(bot_id);
        }
        manager
    }

    /// Use a different entity resolver
    pub fn with_resolver(mut self, resolver: Arc<dyn EntityResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Share an existing registry
    pub fn with_registry(mut self, registry: Arc<RwLock<CommandRegistry>>) -> Self {
        self.registry = registry;
        self
    }

    /// Install the error hook
    pub fn with_error_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CommandEvent, &KriessError) + Send + Sync + 'static,
    {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Install mention prefixes for the bot account, once
    pub fn on_ready(&self, bot_user_id: &str) {
        let mut prefixes = self.mention_prefixes.write();
        if prefixes.is_empty() {
            *prefixes = vec![format!("<@{}>", bot_user_id), format!("<@!{}>", bot_user_id)];
            tracing::info!("Mention prefixes installed for bot {}", bot_user_id);
        }
    }

    /// Handle a chat message.
    ///
    /// Returns the handle of the spawned handler task, or `None` when the
    /// message is not a runnable command for its author.
    pub async fn on_message(
        &self,
        message: IncomingMessage,
    ) -> KriessResult<Option<tokio::task::JoinHandle<()>>> {
        super::dispatch::dispatch(self, message).await
    }

    pub fn registry(&self) -> &Arc<RwLock<CommandRegistry>> {
        &self.registry
    }

    /// Register a root command
    pub fn add_command(&self, command: impl Into<Arc<Command>>) -> bool {
        self.registry.write().add_command(command)
    }

    /// Remove a root command by name
    pub fn remove_command(&self, name: &str) -> Option<Arc<Command>> {
        self.registry.write().remove_command(name)
    }

    /// Get a root command by exact name or alias
    pub fn get_command(&self, label: &str) -> Option<Arc<Command>> {
        self.registry.read().get_command(label)
    }

    /// All root commands
    pub fn commands(&self) -> Vec<Arc<Command>> {
        self.registry.read().commands().to_vec()
    }

    pub fn add_owner(&self, id: impl Into<String>) {
        self.owners.write().insert(id.into());
    }

    pub fn remove_owner(&self, id: &str) {
        self.owners.write().remove(id);
    }

    pub fn is_owner(&self, id: &str) -> bool {
        self.owners.read().contains(id)
    }

    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }
}
