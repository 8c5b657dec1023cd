//! Command tree and argument system
//!
//! # Overview
//!
//! Commands form a tree. A root command is looked up by the first token of the
//! prefix-stripped message; following tokens are matched against sub-command
//! names and aliases for as long as they keep matching. Whatever is left is
//! parsed against the resolved command's argument grammar.
//!
//! ```rust,ignore
//! use kriess_core::commands::{Command, CommandRegistry, ParseContext};
//!
//! let mut registry = CommandRegistry::new();
//! registry.add_command(
//!     Command::builder("config")
//!         .child(Command::builder("prefix").arguments("<value:word>")),
//! );
//!
//! let resolution = registry.resolve("config prefix !").unwrap();
//! assert_eq!(resolution.command.path().to_string(), "config prefix");
//!
//! let args = resolution
//!     .command
//!     .parse_arguments(&resolution.remainder, &ParseContext::default())?;
//! assert_eq!(args.word("value")?, Some("!".to_string()));
//! ```
//!
//! # Grammar syntax
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `<kind>` / `<name:kind>` | required argument |
//! | `[kind]` / `[name:kind]` | optional argument |
//! | `<name:kind...>` | array of values |
//! | `[!name]` | flag, matched as `!name` anywhere in the input |
//!
//! Kinds: `channel`, `command`, `digit`, `duration`, `emote`, `flag`, `role`,
//! `text`, `user`, `voice`, `category`, `word`.

pub mod arguments;
pub mod manager;
pub mod registry;
mod tree;
pub mod types;

pub use arguments::{
    ArgumentDefinition, ArgumentKind, ArgumentResult, ArgumentValue, Entity, EntityResolver,
    Grammar, MentionResolver, ParseContext,
};
pub use manager::{CommandEvent, CommandManager, ErrorHook, IncomingMessage, ReplySink};
pub use registry::{CommandRegistry, Resolution};
pub use types::{Command, CommandBuilder, CommandHandler, CommandPath};
