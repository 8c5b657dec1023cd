//! Sub-command resolution
//!
//! Starting from a node, leading tokens of the remainder are matched against
//! child names and aliases for as long as they keep matching. Each matched
//! token is removed from the remainder, so a returned node always comes with a
//! strictly shorter remainder than the one passed in.

use std::sync::Arc;
use tracing::debug;

use crate::commands::types::Command;
use crate::utils::split_first_token;

impl Command {
    /// Find the deepest descendant named by the leading tokens of `remainder`.
    ///
    /// Returns `(None, remainder)` unchanged when the first token names no child;
    /// the caller then keeps the current node. Otherwise returns the deepest
    /// matched node and what is left after its tokens. Children are tried in
    /// declaration order and the first match wins.
    pub fn find_child(&self, remainder: &str) -> (Option<&Arc<Command>>, String) {
        let Some((token, rest)) = split_first_token(remainder) else {
            return (None, remainder.to_string());
        };
        let Some(child) = self.children().iter().find(|child| child.matches(token)) else {
            return (None, remainder.to_string());
        };

        debug!("'{}' resolved to sub-command '{}'", token, child.path());

        if rest.is_empty() {
            return (Some(child), String::new());
        }

        match child.find_child(rest) {
            (Some(deeper), deeper_rest) => (Some(deeper), deeper_rest),
            (None, _) => (Some(child), rest.to_string()),
        }
    }

    /// Resolve `remainder` starting at this node, returning the final node
    /// (this one when no child matches) and the unconsumed text
    pub fn resolve<'a>(self: &'a Arc<Self>, remainder: &str) -> (&'a Arc<Command>, String) {
        match self.find_child(remainder) {
            (Some(node), rest) => (node, rest),
            (None, rest) => (self, rest.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests;
