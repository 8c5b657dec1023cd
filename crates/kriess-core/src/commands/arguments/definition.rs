//! A single argument definition

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::ArgumentKind;

/// One compiled entry of a command's grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    /// Lowercase name, unique within its grammar
    pub name: String,
    /// What the argument parses to
    pub kind: ArgumentKind,
    /// Whether parsing fails when the argument cannot be satisfied
    pub required: bool,
    /// Whether the argument collects repeated values
    pub is_array: bool,
}

impl ArgumentDefinition {
    /// Create a definition, normalizing the name to lowercase
    pub fn new(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into().to_lowercase(),
            kind,
            required: false,
            is_array: false,
        }
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as an array
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Whether the definition is matched by its `!name` marker rather than by position
    pub fn is_flag(&self) -> bool {
        self.kind == ArgumentKind::Flag
    }

    /// Render back into grammar syntax, e.g. `<user>`, `[reason:text]`, `[!silent]`
    pub fn usage(&self) -> String {
        let body = if self.is_flag() {
            format!("!{}", self.name)
        } else {
            let mut body = if self.name == self.kind.tag() {
                self.name.clone()
            } else {
                format!("{}:{}", self.name, self.kind)
            };
            if self.is_array {
                body.push_str("...");
            }
            body
        };

        if self.required {
            format!("<{}>", body)
        } else {
            format!("[{}]", body)
        }
    }
}

impl fmt::Display for ArgumentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.usage())
    }
}
