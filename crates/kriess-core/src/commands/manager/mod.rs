//! Message dispatch
//!
//! [`CommandManager`] turns incoming chat messages into command invocations:
//! it strips the guild prefix or a bot mention, resolves the command through the
//! registry, and runs the command's handler on its own tokio task. A failing or
//! panicking handler is logged and reported to the error hook without
//! affecting any other message.

mod dispatch;
mod event;
mod message;
mod types;


pub use event::CommandEvent;
pub use message::{IncomingMessage, ReplySink};
pub use types::{CommandManager, ErrorHook};
