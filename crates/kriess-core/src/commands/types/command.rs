//! Command tree node

use std::fmt;
use std::sync::Arc;

use super::builder::CommandBuilder;
use super::handler::CommandHandler;
use super::path::CommandPath;
use crate::commands::arguments::{self, ArgumentResult, Grammar, ParseContext};
use crate::error::KriessResult;

/// One addressable unit of the command tree.
///
/// Nodes are built once through [`CommandBuilder`] and never change afterwards.
/// A node owns its children; the `parent` link is only the parent's path and
/// is never used to reach the parent object.
pub struct Command {
    pub(super) name: String,
    pub(super) aliases: Vec<String>,
    pub(super) description: String,
    pub(super) category: Option<String>,
    pub(super) requires_owner: bool,
    pub(super) visible_in_help: bool,
    pub(super) grammar: Grammar,
    pub(super) children: Vec<Arc<Command>>,
    pub(super) parent: Option<CommandPath>,
    pub(super) path: CommandPath,
    pub(super) usage: String,
    pub(super) handler: Option<Arc<dyn CommandHandler>>,
}

impl Command {
    /// Start building a command
    pub fn builder(name: impl Into<String>) -> CommandBuilder {
        CommandBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Only bot owners may run this command
    pub fn requires_owner(&self) -> bool {
        self.requires_owner
    }

    /// Whether help listings should include this command
    pub fn visible_in_help(&self) -> bool {
        self.visible_in_help
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Sub-commands in declaration order
    pub fn children(&self) -> &[Arc<Command>] {
        &self.children
    }

    /// Path of the owning node, `None` for root commands
    pub fn parent(&self) -> Option<&CommandPath> {
        self.parent.as_ref()
    }

    pub fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Path followed by the rendered grammar, e.g. `config prefix <value:word>`
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn handler(&self) -> Option<&Arc<dyn CommandHandler>> {
        self.handler.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Name or alias equals `label`, ignoring case
    pub fn matches(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.name.to_lowercase() == label || self.aliases.iter().any(|a| a.to_lowercase() == label)
    }

    /// Name or alias equals `label` exactly
    pub fn matches_exact(&self, label: &str) -> bool {
        self.name == label || self.aliases.iter().any(|a| a == label)
    }

    /// Parse `remainder` against this command's grammar
    pub fn parse_arguments(
        &self,
        remainder: &str,
        ctx: &ParseContext<'_>,
    ) -> KriessResult<ArgumentResult> {
        arguments::parse(&self.grammar, remainder, ctx)
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Command {}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("path", &self.path)
            .field("aliases", &self.aliases)
            .field("grammar", &self.grammar.usage())
            .field("children", &self.children.len())
            .field("requires_owner", &self.requires_owner)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
