//! Kriess console driver
//!
//! Feeds terminal input through the command dispatcher as if it were chat
//! messages, so command trees can be tried without a chat platform.
//!
//! ```bash
//! cargo run -p kriess-cli -- --owner '!config prefix ?' '?help config'
//! ```

mod args;
mod bot;
mod console;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use kriess_core::{CommandManager, IncomingMessage, InMemoryGuildSettings, KriessConfig, load_config};

use args::{Cli, LogFormat};
use console::ConsoleSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(prefix) = &cli.prefix {
        config.default_prefix = prefix.clone();
    }
    if cli.owner && !config.owners.contains(&cli.author) {
        config.owners.push(cli.author.clone());
    }
    config.validate()?;

    init_logging(&cli, &config);

    let manager = build_manager(&config);
    tracing::info!(
        "Serving {} commands with prefix '{}'",
        manager.commands().len(),
        manager.default_prefix()
    );

    if !cli.messages.is_empty() {
        for content in &cli.messages {
            dispatch(&manager, &cli, content).await?;
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        dispatch(&manager, &cli, &line).await?;
    }
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over the
/// configured level.
fn init_logging(cli: &Cli, config: &KriessConfig) {
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let format = cli
        .log_format
        .unwrap_or_else(|| LogFormat::from_config(&config.logging.format));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn build_manager(config: &KriessConfig) -> CommandManager {
    let manager = CommandManager::new(
        config,
        Arc::new(InMemoryGuildSettings::new()),
        Arc::new(ConsoleSink),
    )
    .with_error_hook(|event, err| console::report_failure(&event.command().path().to_string(), err));

    for command in bot::commands() {
        manager.add_command(command);
    }
    manager
}

/// Dispatch one message and wait for its handler so output stays in order
async fn dispatch(manager: &CommandManager, cli: &Cli, content: &str) -> anyhow::Result<()> {
    let message = IncomingMessage::new(cli.guild, cli.channel, cli.author.as_str(), content);
    match manager.on_message(message).await? {
        Some(handle) => handle.await.context("handler task failed")?,
        None => tracing::debug!("Ignored message '{}'", content),
    }
    Ok(())
}
