//! Command handler trait

use async_trait::async_trait;

use crate::commands::manager::CommandEvent;
use crate::error::KriessResult;

/// Behavior attached to a command node.
///
/// The dispatcher runs `pre_handle` and, when it returns `true`, `handle`,
/// both on the task spawned for the triggering message.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Gate run before `handle`. Default: always proceed.
    async fn pre_handle(&self, event: &CommandEvent) -> bool {
        let _ = event;
        true
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Errors are reported through the dispatcher's error hook; returning
    /// `KriessError::MissingArgument` from `event.arguments()?` is the usual
    /// way to reject bad input.
    async fn handle(&self, event: &CommandEvent) -> KriessResult<()>;
}
