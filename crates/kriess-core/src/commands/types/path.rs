//! Root-to-node name sequences

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names from the root command down to a node, e.g. `config prefix`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandPath(Vec<String>);

impl CommandPath {
    /// Path of a root command
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Path of a child of this node
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of names in the path; root commands have depth 1
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Name of the node itself
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for CommandPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
