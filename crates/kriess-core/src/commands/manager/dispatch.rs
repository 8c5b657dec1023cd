//! Message dispatch logic

use futures::FutureExt;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::event::CommandEvent;
use super::message::IncomingMessage;
use super::types::CommandManager;
use crate::commands::types::CommandHandler;
use crate::error::{KriessError, KriessResult};

/// Resolve a message and spawn its handler
pub(super) async fn dispatch(
    manager: &CommandManager,
    message: IncomingMessage,
) -> KriessResult<Option<JoinHandle<()>>> {
    if manager.ignore_bots && message.author_is_bot {
        return Ok(None);
    }

    let settings = manager.settings.settings_for(message.guild_id).await?;
    let prefix = settings.effective_prefix(&manager.default_prefix);
    let Some(input) = strip_prefix(manager, &message.content, prefix) else {
        return Ok(None);
    };

    let Some(resolution) = manager.registry.read().resolve(input) else {
        debug!("No command matches '{}'", input);
        return Ok(None);
    };

    let command = resolution.command;
    let is_owner = manager.is_owner(&message.author_id);
    if command.requires_owner() && !is_owner {
        debug!(
            "User {} is not an owner, ignoring '{}'",
            message.author_id,
            command.path()
        );
        return Ok(None);
    }

    let Some(handler) = command.handler().cloned() else {
        debug!("Command '{}' has no handler", command.path());
        return Ok(None);
    };

    debug!(
        "Dispatching '{}' with remainder '{}'",
        command.path(),
        resolution.remainder
    );

    let event = CommandEvent {
        message,
        command,
        label: resolution.label,
        args: resolution.remainder,
        is_owner,
        settings,
        settings_manager: Arc::clone(&manager.settings),
        registry: Arc::clone(&manager.registry),
        resolver: Arc::clone(&manager.resolver),
        sink: Arc::clone(&manager.sink),
        arguments: OnceCell::new(),
    };
    let hook = manager.error_hook.clone();

    Ok(Some(tokio::spawn(async move {
        let outcome = AssertUnwindSafe(run_handler(handler.as_ref(), &event))
            .catch_unwind()
            .await;
        let err = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(err)) => err,
            Err(panic) => {
                KriessError::handler(event.command.path().to_string(), panic_message(panic.as_ref()))
            }
        };

        if err.is_user_error() {
            debug!("Command '{}' rejected input: {}", event.command.path(), err);
        } else {
            error!("Command '{}' failed: {}", event.command.path(), err);
        }
        if let Some(hook) = hook {
            hook(&event, &err);
        }
    })))
}

async fn run_handler(handler: &dyn CommandHandler, event: &CommandEvent) -> KriessResult<()> {
    if !handler.pre_handle(event).await {
        debug!("pre_handle declined '{}'", event.command.path());
        return Ok(());
    }
    handler.handle(event).await
}

/// Remove a mention prefix or the guild prefix, returning the trimmed rest
fn strip_prefix<'a>(manager: &CommandManager, content: &'a str, prefix: &str) -> Option<&'a str> {
    let mentions = manager.mention_prefixes.read();
    let rest = mentions
        .iter()
        .find_map(|mention| content.strip_prefix(mention.as_str()))
        .or_else(|| content.strip_prefix(prefix))?;
    Some(rest.trim())
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("handler panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("handler panicked: {}", s)
    } else {
        "handler panicked".to_string()
    }
}
