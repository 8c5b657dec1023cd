//! End-to-end scenarios through the public API
//!
//! A small bot is assembled from builders, then fed messages the way a chat
//! gateway would.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use kriess::{
    ArgumentKind, Command, CommandEvent, CommandHandler, CommandManager, Entity, EntityResolver,
    GuildSettingsManager, InMemoryGuildSettings, IncomingMessage, KriessConfig, KriessResult,
    ReplySink,
};

#[derive(Default)]
struct Transcript(Mutex<Vec<String>>);

#[async_trait]
impl ReplySink for Transcript {
    async fn send(&self, _channel_id: u64, content: String) -> KriessResult<()> {
        self.0.lock().push(content);
        Ok(())
    }
}

/// Resolves `@name` tokens against a fixed member list
struct Members;

impl EntityResolver for Members {
    fn resolve(&self, kind: ArgumentKind, token: &str) -> Option<Entity> {
        let name = token.strip_prefix('@')?;
        let id = match (kind, name) {
            (ArgumentKind::User, "alice") => 1,
            (ArgumentKind::User, "bob") => 2,
            _ => return None,
        };
        Some(Entity::new(kind, id).named(name))
    }
}

struct Remind;

#[async_trait]
impl CommandHandler for Remind {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let args = event.arguments()?;
        let user = args.user("user")?.and_then(|u| u.name).unwrap_or_default();
        let after = args.duration("duration")?.unwrap_or(Duration::from_secs(60));
        let reason = args.text("reason")?.unwrap_or_else(|| "no reason".to_string());
        event
            .reply(format!("remind {} in {}s: {}", user, after.as_secs(), reason))
            .await
    }
}

struct Prefix;

#[async_trait]
impl CommandHandler for Prefix {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let value = event.arguments()?.word("value")?.unwrap_or_default();
        let reply = format!("prefix is now {}", value);
        event
            .settings_manager()
            .edit_settings(
                event.message().guild_id,
                Box::new(move |s| s.prefix = Some(value)),
            )
            .await?;
        event.reply(reply).await
    }
}

struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let target = event.arguments()?.command("command")?;
        let text = match target {
            Some(command) => command.usage().to_string(),
            None => {
                let registry = event.registry().read();
                registry
                    .visible()
                    .map(|c| c.name().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        };
        event.reply(text).await
    }
}

fn bot() -> (CommandManager, Arc<Transcript>, Arc<InMemoryGuildSettings>) {
    let transcript = Arc::new(Transcript::default());
    let settings = Arc::new(InMemoryGuildSettings::new());
    let manager = CommandManager::new(&KriessConfig::default(), settings.clone(), transcript.clone())
        .with_resolver(Arc::new(Members));

    manager.add_command(
        Command::builder("remind")
            .arguments("<user> [duration] [reason:text]")
            .handler(Remind),
    );
    manager.add_command(
        Command::builder("config")
            .child(Command::builder("prefix").arguments("<value:word>").handler(Prefix)),
    );
    manager.add_command(Command::builder("help").arguments("[command]").handler(Help));

    (manager, transcript, settings)
}

async fn say(manager: &CommandManager, content: &str) -> anyhow::Result<()> {
    if let Some(handle) = manager.on_message(IncomingMessage::new(1, 2, "u", content)).await? {
        handle.await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_remind_with_all_arguments() -> anyhow::Result<()> {
    let (manager, transcript, _) = bot();

    say(&manager, "!remind @alice 1h30m take a break").await?;
    say(&manager, "!remind @bob").await?;
    say(&manager, "!remind @bob 5m 30s stretch").await?;

    assert_eq!(
        *transcript.0.lock(),
        vec![
            "remind alice in 5400s: take a break",
            "remind bob in 60s: no reason",
            "remind bob in 330s: stretch",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_user_is_rejected() -> anyhow::Result<()> {
    let (manager, transcript, _) = bot();

    say(&manager, "!remind @carol 5m").await?;

    assert!(transcript.0.lock().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_config_prefix_changes_trigger() -> anyhow::Result<()> {
    let (manager, transcript, settings) = bot();

    say(&manager, "!config prefix $").await?;
    say(&manager, "!help").await?;
    say(&manager, "$HELP config").await?;

    assert_eq!(settings.settings_for(1).await?.prefix.as_deref(), Some("$"));
    assert_eq!(
        *transcript.0.lock(),
        vec!["prefix is now $", "config"]
    );
    Ok(())
}

#[tokio::test]
async fn test_help_lists_commands() -> anyhow::Result<()> {
    let (manager, transcript, _) = bot();

    say(&manager, "!help").await?;

    assert_eq!(*transcript.0.lock(), vec!["remind, config, help"]);
    Ok(())
}
