//! Command construction

use std::sync::Arc;

use super::command::Command;
use super::handler::CommandHandler;
use super::path::CommandPath;
use crate::commands::arguments::Grammar;

/// Builder for a command and, recursively, its sub-commands.
///
/// The tree is assembled bottom-up by nesting builders with [`child`](Self::child);
/// [`build`](Self::build) then creates the nodes top-down so every node gets its
/// path, parent link and usage string at construction time.
pub struct CommandBuilder {
    name: String,
    aliases: Vec<String>,
    arguments: String,
    description: String,
    category: Option<String>,
    requires_owner: bool,
    visible_in_help: bool,
    children: Vec<CommandBuilder>,
    handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandBuilder {
    /// Create a new command builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            arguments: String::new(),
            description: String::new(),
            category: None,
            requires_owner: false,
            visible_in_help: true,
            children: Vec::new(),
            handler: None,
        }
    }

    /// Add an alias
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    /// Add several aliases
    pub fn aliases<I, S>(self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        aliases.into_iter().fold(self, |builder, alias| builder.alias(alias))
    }

    /// Set the argument grammar spec, e.g. `"<user> [duration]"`
    pub fn arguments(mut self, spec: impl Into<String>) -> Self {
        self.arguments = spec.into();
        self
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set help category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to bot owners
    pub fn owner_only(mut self) -> Self {
        self.requires_owner = true;
        self
    }

    /// Hide from help listings
    pub fn hidden(mut self) -> Self {
        self.visible_in_help = false;
        self
    }

    /// Add a sub-command. Declaration order decides alias ties.
    pub fn child(mut self, child: CommandBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Attach the handler run when this node is the resolved command
    pub fn handler(mut self, handler: impl CommandHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Attach an already shared handler
    pub fn shared_handler(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Build a root command
    pub fn build(self) -> Command {
        self.build_under(None)
    }

    fn build_under(self, parent: Option<&CommandPath>) -> Command {
        let path = match parent {
            Some(parent) => parent.join(&self.name),
            None => CommandPath::root(&self.name),
        };
        let grammar = Grammar::compile(&self.arguments);
        let usage = if grammar.is_empty() {
            path.to_string()
        } else {
            format!("{} {}", path, grammar.usage())
        };
        let children = self
            .children
            .into_iter()
            .map(|child| Arc::new(child.build_under(Some(&path))))
            .collect();

        Command {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            category: self.category,
            requires_owner: self.requires_owner,
            visible_in_help: self.visible_in_help,
            grammar,
            children,
            parent: parent.cloned(),
            path,
            usage,
            handler: self.handler,
        }
    }
}

impl From<CommandBuilder> for Command {
    fn from(builder: CommandBuilder) -> Self {
        builder.build()
    }
}

impl From<CommandBuilder> for Arc<Command> {
    fn from(builder: CommandBuilder) -> Self {
        Arc::new(builder.build())
    }
}
