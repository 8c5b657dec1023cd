//! Command tree node types

mod builder;
mod command;
mod handler;
mod path;

pub use builder::CommandBuilder;
pub use command::Command;
pub use handler::CommandHandler;
pub use path::CommandPath;

#[cfg(test)]
mod tests;
