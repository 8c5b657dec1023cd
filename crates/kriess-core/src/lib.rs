//! Kriess Core Library
//!
//! This crate resolves chat-bot commands from free text and parses their
//! arguments into typed values: a command tree with alias-aware sub-command
//! resolution, a grammar compiler for per-command argument specs, an argument
//! parser, and a dispatcher that runs command handlers for incoming messages.

pub mod commands;
pub mod config;
pub mod error;
pub mod settings;
pub mod utils;

// Re-export commonly used types
pub use commands::{
    ArgumentKind, ArgumentResult, ArgumentValue, Command, CommandBuilder, CommandEvent,
    CommandHandler, CommandManager, CommandPath, CommandRegistry, Entity, EntityResolver, Grammar,
    IncomingMessage, MentionResolver, ParseContext, ReplySink, Resolution,
};
pub use config::{ConfigLoader, KriessConfig, LoggingConfig, default_config_path, load_config};
pub use error::{KriessError, KriessResult};
pub use settings::{GuildSettings, GuildSettingsManager, InMemoryGuildSettings};
