//! Tests for command node types

use super::*;
use crate::commands::arguments::ArgumentKind;
use std::sync::Arc;

fn config_tree() -> Command {
    Command::builder("config")
        .alias("cfg")
        .description("Guild configuration")
        .category("admin")
        .child(Command::builder("prefix").arguments("<value:word>"))
        .child(
            Command::builder("feature")
                .child(Command::builder("enable").arguments("<name:word> [!quiet]")),
        )
        .build()
}

#[test]
fn test_root_command_metadata() {
    let cmd = config_tree();

    assert_eq!(cmd.name(), "config");
    assert_eq!(cmd.aliases(), ["cfg".to_string()]);
    assert_eq!(cmd.description(), "Guild configuration");
    assert_eq!(cmd.category(), Some("admin"));
    assert!(cmd.is_root());
    assert!(cmd.parent().is_none());
    assert!(cmd.visible_in_help());
    assert!(!cmd.requires_owner());
    assert!(cmd.handler().is_none());
}

#[test]
fn test_paths_are_computed_at_build_time() {
    let cmd = config_tree();
    let prefix = &cmd.children()[0];
    let enable = &cmd.children()[1].children()[0];

    assert_eq!(cmd.path().to_string(), "config");
    assert_eq!(prefix.path().to_string(), "config prefix");
    assert_eq!(prefix.parent(), Some(cmd.path()));
    assert_eq!(enable.path().segments(), ["config", "feature", "enable"]);
    assert_eq!(enable.path().depth(), 3);
    assert_eq!(enable.parent().map(|p| p.to_string()).as_deref(), Some("config feature"));
}

#[test]
fn test_usage_includes_grammar() {
    let cmd = config_tree();

    assert_eq!(cmd.usage(), "config");
    assert_eq!(cmd.children()[0].usage(), "config prefix <value:word>");
    assert_eq!(
        cmd.children()[1].children()[0].usage(),
        "config feature enable <name:word> [!quiet]"
    );
}

#[test]
fn test_grammar_compiled_on_build() {
    let cmd = config_tree();
    let grammar = cmd.children()[0].grammar();

    assert_eq!(grammar.len(), 1);
    let value = grammar.get("VALUE").unwrap();
    assert_eq!(value.kind, ArgumentKind::Word);
    assert!(value.required);
}

#[test]
fn test_matches_ignores_case() {
    let cmd = config_tree();

    assert!(cmd.matches("config"));
    assert!(cmd.matches("CONFIG"));
    assert!(cmd.matches("Cfg"));
    assert!(!cmd.matches("conf"));
}

#[test]
fn test_matches_exact_is_case_sensitive() {
    let cmd = config_tree();

    assert!(cmd.matches_exact("config"));
    assert!(cmd.matches_exact("cfg"));
    assert!(!cmd.matches_exact("Config"));
}

#[test]
fn test_owner_only_and_hidden() {
    let cmd = Command::builder("shutdown").owner_only().hidden().build();

    assert!(cmd.requires_owner());
    assert!(!cmd.visible_in_help());
}

#[test]
fn test_duplicate_aliases_collapse() {
    let cmd = Command::builder("help")
        .aliases(["h", "?", "h"])
        .build();

    assert_eq!(cmd.aliases(), ["h".to_string(), "?".to_string()]);
}

#[test]
fn test_builder_conversions() {
    let cmd: Command = Command::builder("ping").into();
    let shared: Arc<Command> = Command::builder("ping").into();

    assert_eq!(cmd, *shared);
}

#[test]
fn test_equality_is_by_path() {
    let a = Command::builder("ping").description("one").build();
    let b = Command::builder("ping").description("two").build();
    let c = Command::builder("pong").build();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_command_path_from_iter() {
    let path: CommandPath = ["config", "prefix"].into_iter().collect();

    assert_eq!(path, CommandPath::root("config").join("prefix"));
    assert_eq!(path.last(), Some("prefix"));
}
