//! Demo command tree served by the console driver

use async_trait::async_trait;
use std::time::Duration;

use kriess_core::{Command, CommandBuilder, CommandEvent, CommandHandler, KriessResult};

/// Root commands, in registration order
pub fn commands() -> Vec<CommandBuilder> {
    vec![
        Command::builder("help")
            .alias("h")
            .arguments("[command]")
            .description("List commands or show one command's usage")
            .category("general")
            .handler(Help),
        Command::builder("ping")
            .description("Check that the bot is alive")
            .category("general")
            .handler(Ping),
        Command::builder("echo")
            .arguments("<message:text>")
            .description("Repeat a message")
            .category("general")
            .handler(Echo),
        Command::builder("remind")
            .alias("remindme")
            .arguments("<user> [duration] [reason:text]")
            .description("Schedule a reminder for a user")
            .category("utility")
            .handler(Remind),
        Command::builder("purge")
            .arguments("<count:digit> [users:user...] [!silent]")
            .description("Delete recent messages")
            .category("moderation")
            .owner_only()
            .handler(Purge),
        Command::builder("config")
            .description("Show or change guild settings")
            .category("admin")
            .handler(ShowConfig)
            .child(
                Command::builder("prefix")
                    .arguments("<value:word>")
                    .description("Change the command prefix for this guild")
                    .owner_only()
                    .handler(SetPrefix),
            ),
    ]
}

struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        if let Some(command) = event.arguments()?.command("command")? {
            let mut lines = vec![format!("{}: {}", command.usage(), command.description())];
            lines.extend(
                command
                    .children()
                    .iter()
                    .filter(|c| c.visible_in_help())
                    .map(|c| format!("  {}: {}", c.usage(), c.description())),
            );
            return event.reply(lines.join("\n")).await;
        }

        let listing = {
            let registry = event.registry().read();
            registry
                .visible()
                .map(|c| format!("{} ({})", c.name(), c.category().unwrap_or("misc")))
                .collect::<Vec<_>>()
                .join(", ")
        };
        event.reply(format!("Commands: {}", listing)).await
    }
}

struct Ping;

#[async_trait]
impl CommandHandler for Ping {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        event.reply("pong").await
    }
}

struct Echo;

#[async_trait]
impl CommandHandler for Echo {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let message = event.arguments()?.text("message")?.unwrap_or_default();
        event.reply(message).await
    }
}

struct Remind;

#[async_trait]
impl CommandHandler for Remind {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let args = event.arguments()?;
        let Some(user) = args.user("user")? else {
            return event.reply_error("Who should I remind?").await;
        };
        let after = args.duration("duration")?.unwrap_or(Duration::from_secs(5 * 60));
        let reason = args.text("reason")?;

        let who = user.name.unwrap_or_else(|| format!("<@{}>", user.id));
        let mut reply = format!("Reminding {} in {}", who, format_duration(after));
        if let Some(reason) = reason {
            reply.push_str(&format!(": {}", reason));
        }
        event.reply(reply).await
    }
}

struct Purge;

#[async_trait]
impl CommandHandler for Purge {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let args = event.arguments()?;
        let count = args.digit("count")?.unwrap_or(0);
        if count <= 0 {
            return event.reply_error("Count must be positive").await;
        }
        if args.flag("silent")?.unwrap_or(false) {
            return Ok(());
        }

        let users = args.array::<kriess_core::Entity>("users").unwrap_or_default();
        let reply = if users.is_empty() {
            format!("Deleted {} messages", count)
        } else {
            let ids: Vec<String> = users.iter().map(|u| u.id.to_string()).collect();
            format!("Deleted {} messages from {}", count, ids.join(", "))
        };
        event.reply(reply).await
    }
}

struct ShowConfig;

#[async_trait]
impl CommandHandler for ShowConfig {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let settings = event.settings();
        let prefix = settings.prefix.as_deref().unwrap_or("(default)");
        event
            .reply(format!("Guild {} prefix: {}", settings.guild_id, prefix))
            .await
    }
}

struct SetPrefix;

#[async_trait]
impl CommandHandler for SetPrefix {
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()> {
        let Some(prefix) = event.arguments()?.word("value")? else {
            return event.reply_error("Missing prefix").await;
        };
        let reply = format!("Prefix set to `{}`", prefix);
        event
            .settings_manager()
            .edit_settings(
                event.message().guild_id,
                Box::new(move |settings| settings.prefix = Some(prefix)),
            )
            .await?;
        event.reply(reply).await
    }
}

/// Render a duration as `1h 30m`, `45s`
fn format_duration(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }

    let mut parts = Vec::new();
    for (unit, size) in [("d", 86_400), ("h", 3_600), ("m", 60), ("s", 1)] {
        if secs >= size {
            parts.push(format!("{}{}", secs / size, unit));
            secs %= size;
        }
    }
    parts.join(" ")
}
