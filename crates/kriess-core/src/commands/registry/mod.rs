//! Command registry
//!
//! This module holds the root commands a dispatcher resolves input against.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CommandRegistry, Resolution};
