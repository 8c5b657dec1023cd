//! Per-guild settings
//!
//! The dispatcher only needs to read a guild's prefix override, so the contract
//! is a small async trait. Persisting settings is left to implementations;
//! [`InMemoryGuildSettings`] keeps them for the life of the process.

mod memory;
mod types;

pub use memory::InMemoryGuildSettings;
pub use types::{GuildSettings, GuildSettingsManager, SettingsEdit};
