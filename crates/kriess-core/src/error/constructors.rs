//! Constructor methods for KriessError

use super::types::KriessError;

impl KriessError {
    /// Create a missing argument error
    pub fn missing_argument(argument: impl Into<String>, input: impl Into<String>) -> Self {
        Self::MissingArgument {
            argument: argument.into(),
            input: input.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        argument: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            argument: argument.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid input error for a specific field
    pub fn invalid_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a serialization error for the given format
    pub fn serialization(message: impl Into<String>, format: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            format: format.into(),
            context: None,
        }
    }

    /// Create a handler failure for a command
    pub fn handler(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            command: command.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to an error that carries a context slot.
    /// Argument errors are returned unchanged.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidInput { context, .. }
            | Self::Io { context, .. }
            | Self::Serialization { context, .. }
            | Self::Handler { context, .. } => *context = Some(ctx.into()),
            Self::MissingArgument { .. } | Self::TypeMismatch { .. } => {}
        }
        self
    }
}
