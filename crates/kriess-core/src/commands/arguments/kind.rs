//! Argument kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value an argument definition parses to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    /// Text channel in the current guild
    Channel,
    /// Registered command, looked up by name or alias
    Command,
    /// Base-10 digits that fit into an `i64`
    Digit,
    /// A duration, stored as whole seconds
    Duration,
    /// Custom emote
    Emote,
    /// Presence-only switch written as `!name`. Never required, never an array.
    Flag,
    /// Guild role
    Role,
    /// Every remaining token. Never an array.
    Text,
    /// Mentioned user
    User,
    /// Voice channel
    Voice,
    /// Channel category
    Category,
    /// A single token
    Word,
    /// Unrecognized type tag; fails whenever it is parsed
    Unknown,
}

impl ArgumentKind {
    /// Every kind a grammar tag can name
    pub const ALL: [ArgumentKind; 12] = [
        Self::Channel,
        Self::Command,
        Self::Digit,
        Self::Duration,
        Self::Emote,
        Self::Flag,
        Self::Role,
        Self::Text,
        Self::User,
        Self::Voice,
        Self::Category,
        Self::Word,
    ];

    /// Look up a kind by its tag, ignoring case. Unrecognized tags map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Unknown)
    }

    /// Lowercase tag used in grammar specs and as the default argument name
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Command => "command",
            Self::Digit => "digit",
            Self::Duration => "duration",
            Self::Emote => "emote",
            Self::Flag => "flag",
            Self::Role => "role",
            Self::Text => "text",
            Self::User => "user",
            Self::Voice => "voice",
            Self::Category => "category",
            Self::Word => "word",
            Self::Unknown => "unknown",
        }
    }

    /// Whether values of this kind come from the platform entity lookup
    pub fn is_entity(&self) -> bool {
        matches!(
            self,
            Self::Channel | Self::Emote | Self::Role | Self::User | Self::Voice | Self::Category
        )
    }

    /// Whether this kind may be declared as an array
    pub fn allows_array(&self) -> bool {
        !matches!(self, Self::Text | Self::Flag)
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
