//! Core error types for Kriess

use thiserror::Error;

/// Result type alias for Kriess operations
pub type KriessResult<T> = Result<T, KriessError>;

/// Main error type for Kriess
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KriessError {
    /// A required argument definition had nothing left to consume,
    /// or the token it found did not resolve
    #[error("Required argument {argument} is missing in text {input}")]
    MissingArgument {
        /// Lowercase name of the unsatisfied definition
        argument: String,
        /// The remainder text the grammar was parsed against
        input: String,
    },

    /// A parsed value was requested as the wrong type
    #[error("Argument {argument} is a {found}, not a {expected}")]
    TypeMismatch {
        argument: String,
        expected: String,
        found: String,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Serialization/deserialization errors (TOML, YAML, JSON)
    #[error("{format} error: {message}")]
    Serialization {
        message: String,
        format: String,
        context: Option<String>,
    },

    /// A command handler failed
    #[error("Command {command} failed: {message}")]
    Handler {
        command: String,
        message: String,
        context: Option<String>,
    },
}

impl KriessError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => "KRIESS_MISSING_ARGUMENT",
            Self::TypeMismatch { .. } => "KRIESS_TYPE_MISMATCH",
            Self::InvalidInput { .. } => "KRIESS_INVALID_INPUT",
            Self::Io { .. } => "KRIESS_IO",
            Self::Serialization { .. } => "KRIESS_SERIALIZATION",
            Self::Handler { .. } => "KRIESS_HANDLER",
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::MissingArgument { .. } | Self::TypeMismatch { .. } => None,
            Self::InvalidInput { context, .. }
            | Self::Io { context, .. }
            | Self::Serialization { context, .. }
            | Self::Handler { context, .. } => context.as_deref(),
        }
    }

    /// Whether the error was caused by what the chat author typed, as opposed
    /// to a defect in a handler or the bot's setup
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::MissingArgument { .. } | Self::InvalidInput { .. })
    }
}
