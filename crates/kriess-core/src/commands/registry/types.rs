//! Command registry types and core implementation

use std::sync::Arc;
use tracing::debug;

use crate::commands::types::Command;
use crate::utils::split_first_token;

/// Registry of root commands, in registration order
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<Command>>,
}

/// Outcome of resolving input against the registry
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Deepest command named by the input
    pub command: Arc<Command>,
    /// Label the root command was invoked with
    pub label: String,
    /// Input left after the command tokens, for argument parsing
    pub remainder: String,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root command. Returns `false` when a command with the same
    /// name is already registered; the existing one is kept.
    pub fn add_command(&mut self, command: impl Into<Arc<Command>>) -> bool {
        let command = command.into();
        if self.commands.iter().any(|c| c.name() == command.name()) {
            debug!("Command '{}' already registered", command.name());
            return false;
        }
        debug!("Registered command '{}'", command.usage());
        self.commands.push(command);
        true
    }

    /// Remove a root command by name
    pub fn remove_command(&mut self, name: &str) -> Option<Arc<Command>> {
        let index = self.commands.iter().position(|c| c.name() == name)?;
        Some(self.commands.remove(index))
    }

    /// Get a root command by exact name or alias.
    ///
    /// Case-sensitive: callers fold case before looking up.
    pub fn get_command(&self, label: &str) -> Option<Arc<Command>> {
        self.commands
            .iter()
            .find(|c| c.matches_exact(label))
            .cloned()
    }

    /// All root commands
    pub fn commands(&self) -> &[Arc<Command>] {
        &self.commands
    }

    /// Root commands shown in help listings
    pub fn visible(&self) -> impl Iterator<Item = &Arc<Command>> {
        self.commands.iter().filter(|c| c.visible_in_help())
    }

    /// Check if a command exists
    pub fn contains(&self, label: &str) -> bool {
        self.commands.iter().any(|c| c.matches_exact(label))
    }

    /// Get command count
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Clear all commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Names of root commands starting with `prefix`, for completion
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.commands
            .iter()
            .filter(|c| c.name().starts_with(&prefix))
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Resolve prefix-stripped input to a command and its argument remainder.
    ///
    /// The first token is lowercased and looked up as a root command; the rest
    /// is walked through sub-commands. Returns `None` when no root matches.
    pub fn resolve(&self, input: &str) -> Option<Resolution> {
        let (label, rest) = split_first_token(input)?;
        let label = label.to_lowercase();
        let root = self.get_command(&label)?;
        let (command, remainder) = root.resolve(rest);

        Some(Resolution {
            command: Arc::clone(command),
            label,
            remainder,
        })
    }
}
