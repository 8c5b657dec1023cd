//! Configuration management for Kriess

pub mod loader;
pub mod logging_config;
pub mod model;

pub use loader::{ConfigLoader, ConfigSource, default_config_path, load_config};
pub use logging_config::{LoggingConfig, LoggingOverlay};
pub use model::{ConfigOverlay, KriessConfig};
