//! Typed lookup over parsed arguments

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::kind::ArgumentKind;
use super::value::{ArgumentValue, Entity, FromArgumentValue};
use crate::commands::types::Command;
use crate::error::{KriessError, KriessResult};

/// Arguments parsed for one invocation, keyed by lowercase definition name.
///
/// Names that were never populated read as `Ok(None)`. Asking for the wrong
/// type is an integration defect and reads as [`KriessError::TypeMismatch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentResult {
    values: HashMap<String, ArgumentValue>,
}

impl ArgumentResult {
    pub fn new(values: HashMap<String, ArgumentValue>) -> Self {
        Self { values }
    }

    /// Whether an argument with this name was parsed
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw stored value
    pub fn value(&self, name: &str) -> Option<&ArgumentValue> {
        self.values.get(&name.to_lowercase())
    }

    /// The stored value converted to `T`
    pub fn get<T: FromArgumentValue>(&self, name: &str) -> KriessResult<Option<T>> {
        let Some(value) = self.value(name) else {
            return Ok(None);
        };
        T::from_value(value)
            .map(Some)
            .ok_or_else(|| KriessError::type_mismatch(name, T::EXPECTED, value.type_name()))
    }

    /// Elements of a stored array that convert to `T`; others are skipped.
    /// A scalar value is treated as a one-element array.
    pub fn array<T: FromArgumentValue>(&self, name: &str) -> Option<Vec<T>> {
        let value = self.value(name)?;
        Some(value.as_slice().iter().filter_map(T::from_value).collect())
    }

    /// `Some(true)` when the flag was given, `None` otherwise
    pub fn flag(&self, name: &str) -> KriessResult<Option<bool>> {
        self.get(name)
    }

    pub fn digit(&self, name: &str) -> KriessResult<Option<i64>> {
        self.get(name)
    }

    pub fn duration(&self, name: &str) -> KriessResult<Option<Duration>> {
        self.get(name)
    }

    pub fn text(&self, name: &str) -> KriessResult<Option<String>> {
        self.get(name)
    }

    pub fn word(&self, name: &str) -> KriessResult<Option<String>> {
        self.get(name)
    }

    pub fn command(&self, name: &str) -> KriessResult<Option<Arc<Command>>> {
        self.get(name)
    }

    pub fn channel(&self, name: &str) -> KriessResult<Option<Entity>> {
        self.entity(name, ArgumentKind::Channel)
    }

    pub fn emote(&self, name: &str) -> KriessResult<Option<Entity>> {
        self.entity(name, ArgumentKind::Emote)
    }

    pub fn role(&self, name: &str) -> KriessResult<Option<Entity>> {
        self.entity(name, ArgumentKind::Role)
    }

    pub fn user(&self, name: &str) -> KriessResult<Option<Entity>> {
        self.entity(name, ArgumentKind::User)
    }

    pub fn voice(&self, name: &str) -> KriessResult<Option<Entity>> {
        self.entity(name, ArgumentKind::Voice)
    }

    pub fn category(&self, name: &str) -> KriessResult<Option<Entity>> {
        self.entity(name, ArgumentKind::Category)
    }

    fn entity(&self, name: &str, kind: ArgumentKind) -> KriessResult<Option<Entity>> {
        match self.value(name) {
            None => Ok(None),
            Some(ArgumentValue::Entity(entity)) if entity.kind == kind => Ok(Some(entity.clone())),
            Some(other) => Err(KriessError::type_mismatch(
                name,
                kind.tag(),
                other.type_name(),
            )),
        }
    }
}
