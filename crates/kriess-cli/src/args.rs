//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kriess")]
#[command(about = "Drive the Kriess command engine from the terminal")]
#[command(
    long_about = r#"Drive the Kriess command engine from the terminal

Each line read from stdin (or each MESSAGE argument) is delivered to the
dispatcher as a chat message; replies are printed to stdout.

USAGE:
  kriess                          # Read messages from stdin
  kriess '!ping' '!help remind'   # Dispatch the given messages and exit
  kriess --owner '!config prefix ?'"#
)]
#[command(version)]
pub struct Cli {
    /// Messages to dispatch instead of reading stdin
    pub messages: Vec<String>,

    /// Path to configuration file (toml, yaml or json)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Override the default command prefix
    #[arg(long, env = "KRIESS_PREFIX")]
    pub prefix: Option<String>,

    /// User id the console speaks as
    #[arg(long, default_value = "console")]
    pub author: String,

    /// Treat the console user as a bot owner
    #[arg(long)]
    pub owner: bool,

    /// Guild id messages are sent in
    #[arg(long, default_value_t = 1)]
    pub guild: u64,

    /// Channel id messages are sent in
    #[arg(long, default_value_t = 1)]
    pub channel: u64,

    /// Log output format, overriding the configured one
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Parse a configured format name, falling back to pretty output
    pub fn from_config(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}
