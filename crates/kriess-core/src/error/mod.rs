//! Error types for Kriess
//!
//! Every fallible operation in the engine returns [`KriessResult`]. Variants carry
//! the fields a dispatcher needs to report the failure back to the chat author
//! (`MissingArgument` names the definition and echoes the text it was parsed from)
//! or to log it as an integration defect (`TypeMismatch`).

mod constructors;
mod conversions;
mod types;


pub use types::{KriessError, KriessResult};
