//! Tests for sub-command resolution

use crate::commands::types::Command;
use std::sync::Arc;

fn tree() -> Arc<Command> {
    Arc::new(
        Command::builder("root")
            .child(Command::builder("help").alias("h"))
            .child(
                Command::builder("config")
                    .alias("cfg")
                    .child(Command::builder("prefix").arguments("<value:word>"))
                    .child(Command::builder("reset")),
            )
            .build(),
    )
}

fn token_count(s: &str) -> usize {
    s.split_whitespace().count()
}

#[test]
fn test_config_prefix_scenario() {
    let root = tree();
    let (node, remainder) = root.find_child("config prefix !");
    let node = node.unwrap();

    assert_eq!(node.path().segments(), ["root", "config", "prefix"]);
    assert_eq!(remainder, "!");
}

#[test]
fn test_alias_case_insensitive() {
    let root = tree();
    let (upper, upper_rest) = root.find_child("HELP");
    let (lower, lower_rest) = root.find_child("help");
    let (alias, _) = root.find_child("H");

    assert_eq!(upper.unwrap().path(), lower.unwrap().path());
    assert_eq!(alias.unwrap().name(), "help");
    assert_eq!(upper_rest, lower_rest);
    assert_eq!(upper_rest, "");
}

#[test]
fn test_no_match_returns_input_unchanged() {
    let root = tree();
    let (node, remainder) = root.find_child("unknown thing ");

    assert!(node.is_none());
    assert_eq!(remainder, "unknown thing ");
}

#[test]
fn test_empty_input() {
    let root = tree();
    let (node, remainder) = root.find_child("");

    assert!(node.is_none());
    assert_eq!(remainder, "");
}

#[test]
fn test_stops_at_first_unmatched_token() {
    let root = tree();
    let (node, remainder) = root.find_child("cfg   something else");

    assert_eq!(node.unwrap().name(), "config");
    assert_eq!(remainder, "something else");
}

#[test]
fn test_matched_token_at_end_leaves_empty_remainder() {
    let root = tree();
    let (node, remainder) = root.find_child("config reset   ");

    assert_eq!(node.unwrap().name(), "reset");
    assert_eq!(remainder, "");
}

#[test]
fn test_progress_guarantee() {
    let root = tree();
    let inputs = [
        "help",
        "help me",
        "config",
        "config prefix",
        "config prefix ! extra",
        "cfg reset now",
        "nothing here",
        "",
    ];

    for input in inputs {
        let (node, remainder) = root.find_child(input);
        if node.is_some() {
            assert!(
                token_count(&remainder) < token_count(input),
                "no progress for '{}'",
                input
            );
        } else {
            assert_eq!(remainder, input);
        }
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let root = tree();
    let first = root.find_child("config prefix ?");
    let second = root.find_child("config prefix ?");

    assert_eq!(first.0.map(|n| n.path().clone()), second.0.map(|n| n.path().clone()));
    assert_eq!(first.1, second.1);
}

#[test]
fn test_first_declared_child_wins_collision() {
    let root = Command::builder("root")
        .child(Command::builder("list").alias("ls"))
        .child(Command::builder("ls"))
        .build();

    let (node, _) = root.find_child("ls");
    assert_eq!(node.unwrap().name(), "list");
}

#[test]
fn test_resolve_falls_back_to_self() {
    let root = tree();

    let (node, remainder) = root.resolve("  not a child ");
    assert_eq!(node.name(), "root");
    assert_eq!(remainder, "not a child");

    let (node, remainder) = root.resolve("config prefix k!");
    assert_eq!(node.name(), "prefix");
    assert_eq!(remainder, "k!");
}
