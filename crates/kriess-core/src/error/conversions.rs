//! From trait implementations for KriessError conversions

use super::types::KriessError;

impl From<std::io::Error> for KriessError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for KriessError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string(), "JSON")
    }
}

impl From<serde_yaml::Error> for KriessError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization(error.to_string(), "YAML")
    }
}

impl From<toml::de::Error> for KriessError {
    fn from(error: toml::de::Error) -> Self {
        Self::serialization(error.to_string(), "TOML")
    }
}
