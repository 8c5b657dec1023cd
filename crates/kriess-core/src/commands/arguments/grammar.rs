//! Grammar compilation
//!
//! A grammar spec is a whitespace-separated list of argument tokens:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `<user>` | required, kind `user`, named `user` |
//! | `[reason:text]` | optional, kind `text`, named `reason` |
//! | `<ids:digit...>` | required array of digits named `ids` |
//! | `[!silent]` | flag named `silent` (same as `[silent:flag]`) |
//!
//! Compilation never fails. Unrecognized kinds compile to
//! [`ArgumentKind::Unknown`], and contradictory markers are normalized with a
//! warning: flags are always optional and never arrays, text is never an array,
//! and a repeated name keeps only its first definition.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use super::definition::ArgumentDefinition;
use super::kind::ArgumentKind;

const ARRAY_MARKER: &str = "...";
const FLAG_MARKER: char = '!';

/// Ordered list of argument definitions attached to one command.
///
/// Serialized as the plain definition list; deserializing normalizes it the
/// same way [`Grammar::from_definitions`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ArgumentDefinition>", into = "Vec<ArgumentDefinition>")]
pub struct Grammar {
    definitions: Vec<ArgumentDefinition>,
}

impl Grammar {
    /// Compile a grammar spec string
    pub fn compile(spec: &str) -> Self {
        let definitions = spec.split_whitespace().map(compile_token).collect();
        Self::normalized(definitions, spec)
    }

    /// Build a grammar from already-constructed definitions, applying the
    /// same normalization as [`compile`](Self::compile)
    pub fn from_definitions(definitions: Vec<ArgumentDefinition>) -> Self {
        let origin = definitions
            .iter()
            .map(ArgumentDefinition::usage)
            .collect::<Vec<_>>()
            .join(" ");
        Self::normalized(definitions, &origin)
    }

    fn normalized(definitions: Vec<ArgumentDefinition>, origin: &str) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(definitions.len());

        for definition in definitions {
            let definition = normalize(definition);
            if !seen.insert(definition.name.clone()) {
                warn!(
                    "Dropping duplicate argument '{}' in grammar '{}'",
                    definition.name, origin
                );
                continue;
            }
            kept.push(definition);
        }

        let grammar = Self { definitions: kept };
        if let Some(text) = grammar.trailing_after_text() {
            warn!(
                "Arguments declared after text argument '{}' in grammar '{}' will never be parsed",
                text.name, origin
            );
        }
        grammar
    }

    /// All definitions in declaration order
    pub fn definitions(&self) -> &[ArgumentDefinition] {
        &self.definitions
    }

    /// Flag definitions, in declaration order
    pub fn flags(&self) -> impl Iterator<Item = &ArgumentDefinition> {
        self.definitions.iter().filter(|d| d.is_flag())
    }

    /// Positional (non-flag) definitions, in declaration order
    pub fn positional(&self) -> impl Iterator<Item = &ArgumentDefinition> {
        self.definitions.iter().filter(|d| !d.is_flag())
    }

    /// Look up a definition by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&ArgumentDefinition> {
        let name = name.to_lowercase();
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Render the grammar back into spec syntax
    pub fn usage(&self) -> String {
        self.definitions
            .iter()
            .map(ArgumentDefinition::usage)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The text definition, if any positional definition follows it
    fn trailing_after_text(&self) -> Option<&ArgumentDefinition> {
        let mut positional = self.positional();
        let text = positional.by_ref().find(|d| d.kind == ArgumentKind::Text)?;
        positional.next().map(|_| text)
    }
}

fn compile_token(token: &str) -> ArgumentDefinition {
    let (body, required) = if let Some(inner) = strip_brackets(token, '<', '>') {
        (inner, true)
    } else if let Some(inner) = strip_brackets(token, '[', ']') {
        (inner, false)
    } else {
        (token, true)
    };

    let (body, is_array) = match body.strip_suffix(ARRAY_MARKER) {
        Some(body) => (body, true),
        None => (body, false),
    };

    let mut definition = if let Some(name) = body.strip_prefix(FLAG_MARKER) {
        ArgumentDefinition::new(name, ArgumentKind::Flag)
    } else {
        match body.split_once(':') {
            Some((name, tag)) => ArgumentDefinition::new(name, ArgumentKind::from_name(tag)),
            None => {
                let kind = ArgumentKind::from_name(body);
                let name = match kind {
                    ArgumentKind::Unknown => body,
                    known => known.tag(),
                };
                ArgumentDefinition::new(name, kind)
            }
        }
    };
    definition.required = required;
    definition.is_array = is_array;

    if definition.kind == ArgumentKind::Unknown {
        warn!("Unknown argument kind in token '{}'", token);
    }
    definition
}

/// Flags are optional scalars; only some kinds may be arrays
fn normalize(mut definition: ArgumentDefinition) -> ArgumentDefinition {
    definition.name = definition.name.to_lowercase();
    if definition.is_flag() && definition.required {
        warn!("Flag '{}' cannot be required, making it optional", definition.name);
        definition.required = false;
    }
    if definition.is_array && !definition.kind.allows_array() {
        warn!(
            "Argument '{}' of kind {} cannot be an array",
            definition.name, definition.kind
        );
        definition.is_array = false;
    }
    definition
}

fn strip_brackets(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

impl From<Vec<ArgumentDefinition>> for Grammar {
    fn from(definitions: Vec<ArgumentDefinition>) -> Self {
        Self::from_definitions(definitions)
    }
}

impl From<Grammar> for Vec<ArgumentDefinition> {
    fn from(grammar: Grammar) -> Self {
        grammar.definitions
    }
}
