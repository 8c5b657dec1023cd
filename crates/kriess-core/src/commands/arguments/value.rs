//! Parsed argument values

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::kind::ArgumentKind;
use crate::commands::types::Command;

/// Handle to a platform object (user, role, channel, ...) resolved from a token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Which lookup produced this entity
    pub kind: ArgumentKind,
    /// Platform snowflake id
    pub id: u64,
    /// Display name, when the resolver knows it
    pub name: Option<String>,
}

impl Entity {
    pub fn new(kind: ArgumentKind, id: u64) -> Self {
        Self {
            kind,
            id,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A single parsed value, tagged by what produced it
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Digit(i64),
    Duration(Duration),
    Text(String),
    Word(String),
    Flag(bool),
    Entity(Entity),
    Command(Arc<Command>),
    Array(Vec<ArgumentValue>),
}

impl ArgumentValue {
    /// Name of the stored variant, used in type mismatch errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Duration(_) => "duration",
            Self::Text(_) => "text",
            Self::Word(_) => "word",
            Self::Flag(_) => "flag",
            Self::Entity(entity) => entity.kind.tag(),
            Self::Command(_) => "command",
            Self::Array(_) => "array",
        }
    }

    /// Elements of an array value, or the value itself as a one-element slice
    pub fn as_slice(&self) -> &[ArgumentValue] {
        match self {
            Self::Array(values) => values,
            single => std::slice::from_ref(single),
        }
    }
}

/// Conversion from a stored [`ArgumentValue`] into a concrete Rust type
pub trait FromArgumentValue: Sized {
    /// Name reported when the stored value has a different type
    const EXPECTED: &'static str;

    /// Convert, or `None` when the value holds something else
    fn from_value(value: &ArgumentValue) -> Option<Self>;
}

impl FromArgumentValue for i64 {
    const EXPECTED: &'static str = "digit";

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Digit(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromArgumentValue for Duration {
    const EXPECTED: &'static str = "duration";

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

impl FromArgumentValue for String {
    const EXPECTED: &'static str = "text";

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Text(s) | ArgumentValue::Word(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromArgumentValue for bool {
    const EXPECTED: &'static str = "flag";

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromArgumentValue for Entity {
    const EXPECTED: &'static str = "entity";

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Entity(e) => Some(e.clone()),
            _ => None,
        }
    }
}

impl FromArgumentValue for Arc<Command> {
    const EXPECTED: &'static str = "command";

    fn from_value(value: &ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Command(c) => Some(Arc::clone(c)),
            _ => None,
        }
    }
}
