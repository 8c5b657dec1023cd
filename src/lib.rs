//! Kriess: command trees and typed argument parsing for chat bots.
//!
//! This crate re-exports [`kriess_core`]; see its docs for the grammar syntax
//! and the dispatcher.

pub use kriess_core::*;
