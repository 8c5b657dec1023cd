//! Utility functions

pub mod strings;

pub use strings::{remove_extra_spaces, split_first_token, split_spaces};
