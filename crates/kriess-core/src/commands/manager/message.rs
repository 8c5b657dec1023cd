//! Chat platform contracts

use async_trait::async_trait;

use crate::error::KriessResult;

/// A chat message delivered to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub guild_id: u64,
    pub channel_id: u64,
    pub author_id: String,
    pub author_is_bot: bool,
    /// Raw message text, prefix included
    pub content: String,
}

impl IncomingMessage {
    pub fn new(
        guild_id: u64,
        channel_id: u64,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            guild_id,
            channel_id,
            author_id: author_id.into(),
            author_is_bot: false,
            content: content.into(),
        }
    }

    /// Mark the author as a bot account
    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }
}

/// Sends replies back to the platform
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, channel_id: u64, content: String) -> KriessResult<()>;
}
