//! Configuration loading
//!
//! Sources are applied in the order they are added, each one overriding the
//! ones before it. The config is validated once all sources are applied.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::{ConfigOverlay, KriessConfig};
use crate::error::{KriessError, KriessResult};

/// Environment variable overriding the default prefix
pub const ENV_PREFIX: &str = "KRIESS_PREFIX";
/// Environment variable adding comma-separated owner ids
pub const ENV_OWNERS: &str = "KRIESS_OWNERS";
/// Environment variable setting the bot user id
pub const ENV_BOT_ID: &str = "KRIESS_BOT_ID";
/// Environment variable setting the log level
pub const ENV_LOG: &str = "KRIESS_LOG";

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a file
    File(PathBuf),
    /// Configuration from process environment variables
    Environment,
    /// Configuration from explicit `KRIESS_*` key/value pairs
    Variables(HashMap<String, String>),
    /// Reset to the default configuration
    Default,
}

/// Configuration loader with support for multiple sources
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add explicit variables source
    pub fn with_vars(self, vars: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::Variables(vars))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> KriessResult<KriessConfig> {
        let mut config = KriessConfig::default();

        for source in &self.sources {
            match source {
                ConfigSource::File(path) => {
                    tracing::debug!("Loading config from file: {}", path.display());
                    config.apply(read_file(path)?);
                }
                ConfigSource::Environment => {
                    tracing::debug!("Loading config from environment");
                    apply_vars(&mut config, std::env::vars());
                }
                ConfigSource::Variables(vars) => {
                    tracing::debug!("Loading config from {} variable(s)", vars.len());
                    apply_vars(&mut config, vars.clone());
                }
                ConfigSource::Default => {
                    tracing::debug!("Resetting to default config");
                    config = KriessConfig::default();
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read one config file.
///
/// The format follows the extension: TOML, YAML (`.yaml`/`.yml`), or JSON for
/// anything else. A missing file sets nothing.
fn read_file(path: &Path) -> KriessResult<ConfigOverlay> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        return Ok(ConfigOverlay::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        KriessError::io_with_path(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;
    let context = format!("Reading configuration from '{}'", path.display());

    let config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(KriessError::from),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(KriessError::from),
        _ => serde_json::from_str(&content).map_err(KriessError::from),
    };

    config.map_err(|e| e.with_context(context))
}

/// Apply `KRIESS_*` overrides from key/value pairs; other keys are ignored
fn apply_vars<I>(config: &mut KriessConfig, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in vars {
        match key.as_str() {
            ENV_PREFIX => config.default_prefix = value,
            ENV_OWNERS => {
                for owner in value.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    if !config.owners.iter().any(|o| o == owner) {
                        config.owners.push(owner.to_string());
                    }
                }
            }
            ENV_BOT_ID => config.bot_user_id = Some(value),
            ENV_LOG => config.logging.level = value,
            _ => {}
        }
    }
}

/// Default config file location: `<config dir>/kriess/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kriess")
        .join("config.toml")
}

/// Load defaults, then `path` (or the default location), then the environment
pub fn load_config(path: Option<&Path>) -> KriessResult<KriessConfig> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    ConfigLoader::new()
        .with_defaults()
        .with_file(path)
        .with_env()
        .load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::new()
            .with_file(temp_dir.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(config, KriessConfig::default());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
default_prefix = "k!"
owners = ["1001"]
bot_user_id = "555"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.default_prefix, "k!");
        assert_eq!(config.owners, vec!["1001".to_string()]);
        assert_eq!(config.bot_user_id.as_deref(), Some("555"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.ignore_bots);
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        fs::write(&path, "default_prefix: \"?\"\nignore_bots: false\n").unwrap();

        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.default_prefix, "?");
        assert!(!config.ignore_bots);
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"owners": ["1", "2"]}"#).unwrap();

        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.owners.len(), 2);
        assert_eq!(config.default_prefix, "!");
    }

    #[test]
    fn test_malformed_file_reports_context() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_prefix = [").unwrap();

        let err = ConfigLoader::new().with_file(&path).load().unwrap_err();
        assert!(matches!(err, KriessError::Serialization { .. }));
        assert!(err.context().unwrap().contains("config.toml"));
    }

    #[test]
    fn test_variables_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_prefix = \"k!\"\nowners = [\"1\"]\n").unwrap();

        let vars = HashMap::from([
            (ENV_PREFIX.to_string(), ">>".to_string()),
            (ENV_OWNERS.to_string(), "1, 2,,3".to_string()),
            (ENV_LOG.to_string(), "trace".to_string()),
            ("UNRELATED".to_string(), "x".to_string()),
        ]);

        let config = ConfigLoader::new()
            .with_file(&path)
            .with_vars(vars)
            .load()
            .unwrap();
        assert_eq!(config.default_prefix, ">>");
        assert_eq!(config.owners, vec!["1", "2", "3"]);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_file_keeps_values_it_omits() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.yml");
        let second = temp_dir.path().join("second.toml");
        fs::write(&first, "ignore_bots: false
logging:
  format: json
").unwrap();
        fs::write(&second, "owners = [\"7\"]\n").unwrap();

        let vars = HashMap::from([(ENV_PREFIX.to_string(), ">>".to_string())]);
        let config = ConfigLoader::new()
            .with_vars(vars)
            .with_file(&first)
            .with_file(&second)
            .load()
            .unwrap();

        assert_eq!(config.default_prefix, ">>");
        assert!(!config.ignore_bots);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.owners, vec!["7"]);
    }

    #[test]
    fn test_defaults_source_resets() {
        let vars = HashMap::from([(ENV_PREFIX.to_string(), ">>".to_string())]);
        let config = ConfigLoader::new()
            .with_vars(vars)
            .with_defaults()
            .load()
            .unwrap();
        assert_eq!(config, KriessConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_prefix() {
        let vars = HashMap::from([(ENV_PREFIX.to_string(), "a b".to_string())]);
        let err = ConfigLoader::new().with_vars(vars).load().unwrap_err();
        assert!(matches!(err, KriessError::InvalidInput { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_bot_id() {
        let vars = HashMap::from([(ENV_BOT_ID.to_string(), "not-a-number".to_string())]);
        assert!(ConfigLoader::new().with_vars(vars).load().is_err());
    }
}
