//! A resolved command invocation

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

use super::message::{IncomingMessage, ReplySink};
use crate::commands::arguments::{ArgumentResult, EntityResolver, ParseContext};
use crate::commands::registry::CommandRegistry;
use crate::commands::types::Command;
use crate::error::KriessResult;
use crate::settings::{GuildSettings, GuildSettingsManager};

/// Everything a handler sees about the message that triggered it
pub struct CommandEvent {
    pub(super) message: IncomingMessage,
    pub(super) command: Arc<Command>,
    pub(super) label: String,
    pub(super) args: String,
    pub(super) is_owner: bool,
    pub(super) settings: GuildSettings,
    pub(super) settings_manager: Arc<dyn GuildSettingsManager>,
    pub(super) registry: Arc<RwLock<CommandRegistry>>,
    pub(super) resolver: Arc<dyn EntityResolver>,
    pub(super) sink: Arc<dyn ReplySink>,
    pub(super) arguments: OnceCell<ArgumentResult>,
}

impl CommandEvent {
    pub fn message(&self) -> &IncomingMessage {
        &self.message
    }

    /// The command chosen to handle this event
    pub fn command(&self) -> &Arc<Command> {
        &self.command
    }

    /// Root command label as typed, lowercased
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Message text after the prefix and command tokens
    pub fn args(&self) -> &str {
        &self.args
    }

    /// Whether the author is registered as a bot owner
    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    /// Settings of the guild the message was sent in, as read at dispatch time
    pub fn settings(&self) -> &GuildSettings {
        &self.settings
    }

    pub fn settings_manager(&self) -> &Arc<dyn GuildSettingsManager> {
        &self.settings_manager
    }

    pub fn registry(&self) -> &Arc<RwLock<CommandRegistry>> {
        &self.registry
    }

    /// Arguments parsed from [`args`](Self::args) against the command's grammar.
    ///
    /// Parsed on first call and cached for the rest of the event.
    pub fn arguments(&self) -> KriessResult<&ArgumentResult> {
        self.arguments.get_or_try_init(|| {
            let registry = self.registry.read();
            let ctx = ParseContext::new(self.resolver.as_ref()).with_registry(&registry);
            self.command.parse_arguments(&self.args, &ctx)
        })
    }

    /// Send a message to the channel the event came from
    pub async fn reply(&self, content: impl Into<String>) -> KriessResult<()> {
        self.sink.send(self.message.channel_id, content.into()).await
    }

    /// Send an error message, prefixed with `:x:`
    pub async fn reply_error(&self, content: impl AsRef<str>) -> KriessResult<()> {
        self.reply(format!(":x: {}", content.as_ref())).await
    }
}

impl std::fmt::Debug for CommandEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandEvent")
            .field("message", &self.message)
            .field("command", &self.command.path())
            .field("args", &self.args)
            .field("is_owner", &self.is_owner)
            .finish()
    }
}
