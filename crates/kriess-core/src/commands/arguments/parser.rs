//! Argument parsing
//!
//! Parsing runs in two passes over the whitespace-split remainder:
//!
//! 1. Every `!name` token matching a declared flag is removed, wherever it
//!    appears. Only flags that were present are recorded.
//! 2. Positional definitions consume the remaining tokens in declaration
//!    order. A text definition takes everything that is left and ends parsing;
//!    anything declared after it is ignored.
//!
//! An optional definition that cannot be satisfied is left out of the result
//! without consuming its token. A required one fails the whole parse with
//! [`KriessError::MissingArgument`].

use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::definition::ArgumentDefinition;
use super::duration;
use super::grammar::Grammar;
use super::kind::ArgumentKind;
use super::resolver::ParseContext;
use super::result::ArgumentResult;
use super::value::ArgumentValue;
use crate::error::{KriessError, KriessResult};

/// Parse `input` against `grammar`
pub fn parse(
    grammar: &Grammar,
    input: &str,
    ctx: &ParseContext<'_>,
) -> KriessResult<ArgumentResult> {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    let mut values = HashMap::new();

    for flag in grammar.flags() {
        let before = tokens.len();
        tokens.retain(|token| !is_flag_marker(token, &flag.name));
        if tokens.len() != before {
            values.insert(flag.name.clone(), ArgumentValue::Flag(true));
        }
    }

    let mut pos = 0;
    for definition in grammar.positional() {
        let remaining = &tokens[pos..];
        let parsed = if definition.kind == ArgumentKind::Text {
            take_text(remaining)
        } else if definition.is_array {
            take_array(definition.kind, remaining, ctx)
        } else {
            take_one(definition.kind, remaining, ctx)
        };

        match parsed {
            Some((value, consumed)) => {
                pos += consumed;
                values.insert(definition.name.clone(), value);
            }
            None => unsatisfied(definition, input)?,
        }

        if definition.kind == ArgumentKind::Text {
            break;
        }
    }

    if pos < tokens.len() {
        debug!(
            "Ignoring {} unparsed token(s) in '{}'",
            tokens.len() - pos,
            input
        );
    }

    Ok(ArgumentResult::new(values))
}

fn unsatisfied(definition: &ArgumentDefinition, input: &str) -> KriessResult<()> {
    if definition.required {
        return Err(KriessError::missing_argument(&definition.name, input));
    }
    debug!("Optional argument '{}' not present", definition.name);
    Ok(())
}

fn is_flag_marker(token: &str, name: &str) -> bool {
    token
        .strip_prefix('!')
        .is_some_and(|marker| marker.to_lowercase() == name)
}

fn take_text(tokens: &[&str]) -> Option<(ArgumentValue, usize)> {
    if tokens.is_empty() {
        return None;
    }
    Some((ArgumentValue::Text(tokens.join(" ")), tokens.len()))
}

fn take_array(
    kind: ArgumentKind,
    tokens: &[&str],
    ctx: &ParseContext<'_>,
) -> Option<(ArgumentValue, usize)> {
    let items: Vec<ArgumentValue> = tokens
        .iter()
        .map_while(|token| take_element(kind, token, ctx))
        .collect();

    if items.is_empty() {
        None
    } else {
        let used = items.len();
        Some((ArgumentValue::Array(items), used))
    }
}

/// One array element from exactly one token. Durations are not folded here:
/// `1h 2h 30` is three elements.
fn take_element(
    kind: ArgumentKind,
    token: &str,
    ctx: &ParseContext<'_>,
) -> Option<ArgumentValue> {
    match kind {
        ArgumentKind::Duration => duration::parse_token(token)
            .map(|secs| ArgumentValue::Duration(Duration::from_secs(secs))),
        _ => take_one(kind, &[token], ctx).map(|(value, _)| value),
    }
}

/// Parse a single value of `kind` from the front of `tokens`, returning the
/// value and how many tokens it used
fn take_one(
    kind: ArgumentKind,
    tokens: &[&str],
    ctx: &ParseContext<'_>,
) -> Option<(ArgumentValue, usize)> {
    let first = *tokens.first()?;

    match kind {
        ArgumentKind::Word => Some((ArgumentValue::Word(first.to_string()), 1)),
        ArgumentKind::Digit => parse_digit(first).map(|n| (ArgumentValue::Digit(n), 1)),
        ArgumentKind::Duration => take_duration(tokens),
        ArgumentKind::Command => {
            let command = ctx.registry?.get_command(&first.to_lowercase())?;
            Some((ArgumentValue::Command(command), 1))
        }
        ArgumentKind::Text | ArgumentKind::Flag | ArgumentKind::Unknown => None,
        entity => match ctx.resolver.resolve(entity, first) {
            Some(resolved) => Some((ArgumentValue::Entity(resolved), 1)),
            None => {
                debug!("Token '{}' did not resolve to a {}", first, entity);
                None
            }
        },
    }
}

fn parse_digit(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// The first token must be a duration; later tokens extend it only while
/// they carry a unit, so `1h 30m` is one value but in `30 5` the `5` is left
fn take_duration(tokens: &[&str]) -> Option<(ArgumentValue, usize)> {
    let mut total = duration::parse_token(tokens.first()?)?;
    let mut used = 1;

    for token in &tokens[1..] {
        if !duration::has_unit(token) {
            break;
        }
        match duration::parse_token(token).and_then(|secs| total.checked_add(secs)) {
            Some(sum) => {
                total = sum;
                used += 1;
            }
            None => break,
        }
    }

    Some((ArgumentValue::Duration(Duration::from_secs(total)), used))
}
