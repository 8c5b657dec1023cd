//! Argument grammars and parsing
//!
//! A command declares its arguments as a small spec string such as
//! `"<user> [duration] [reason:text] [!silent]"`. The spec is compiled once into
//! a [`Grammar`] when the command is built, and every invocation parses its
//! remainder against that grammar into an [`ArgumentResult`].

mod definition;
pub mod duration;
mod grammar;
mod kind;
mod parser;
mod resolver;
mod result;
mod value;


pub use definition::ArgumentDefinition;
pub use grammar::Grammar;
pub use kind::ArgumentKind;
pub use parser::parse;
pub use resolver::{EntityResolver, MentionResolver, ParseContext};
pub use result::ArgumentResult;
pub use value::{ArgumentValue, Entity, FromArgumentValue};

#[cfg(test)]
pub use resolver::MockEntityResolver;
