//! Tests for command registry

use super::*;
use crate::commands::types::Command;

fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.add_command(Command::builder("help").alias("h"));
    registry.add_command(
        Command::builder("config")
            .child(Command::builder("prefix").arguments("<value:word>")),
    );
    registry.add_command(Command::builder("shutdown").owner_only().hidden());
    registry
}

#[test]
fn test_registry_creation() {
    let registry = CommandRegistry::new();
    assert_eq!(registry.count(), 0);
    assert!(registry.resolve("help").is_none());
}

#[test]
fn test_register_command() {
    let registry = registry();

    assert!(registry.contains("help"));
    assert!(registry.contains("h"));
    assert_eq!(registry.count(), 3);
}

#[test]
fn test_duplicate_name_rejected() {
    let mut registry = registry();
    let added = registry.add_command(Command::builder("help").description("second"));

    assert!(!added);
    assert_eq!(registry.count(), 3);
    assert_eq!(registry.get_command("help").unwrap().description(), "");
}

#[test]
fn test_get_command_is_case_sensitive() {
    let registry = registry();

    assert_eq!(registry.get_command("h").unwrap().name(), "help");
    assert!(registry.get_command("HELP").is_none());
}

#[test]
fn test_remove_command() {
    let mut registry = registry();

    let removed = registry.remove_command("help").unwrap();
    assert_eq!(removed.name(), "help");
    assert!(!registry.contains("help"));
    assert!(registry.remove_command("help").is_none());
}

#[test]
fn test_registration_order_preserved() {
    let registry = registry();
    let names: Vec<_> = registry.commands().iter().map(|c| c.name()).collect();

    assert_eq!(names, ["help", "config", "shutdown"]);
}

#[test]
fn test_visible_skips_hidden() {
    let registry = registry();
    let names: Vec<_> = registry.visible().map(|c| c.name()).collect();

    assert_eq!(names, ["help", "config"]);
}

#[test]
fn test_suggestions() {
    let registry = registry();

    assert_eq!(registry.suggestions("H"), vec!["help"]);
    assert_eq!(registry.suggestions("s"), vec!["shutdown"]);
    assert!(registry.suggestions("x").is_empty());
}

#[test]
fn test_resolve_folds_root_label() {
    let registry = registry();
    let resolution = registry.resolve("CONFIG prefix !").unwrap();

    assert_eq!(resolution.label, "config");
    assert_eq!(resolution.command.path().to_string(), "config prefix");
    assert_eq!(resolution.remainder, "!");
}

#[test]
fn test_resolve_root_only() {
    let registry = registry();
    let resolution = registry.resolve("h   some topic").unwrap();

    assert_eq!(resolution.command.name(), "help");
    assert_eq!(resolution.remainder, "some topic");
}

#[test]
fn test_resolve_unknown() {
    let registry = registry();

    assert!(registry.resolve("nope").is_none());
    assert!(registry.resolve("   ").is_none());
}

#[test]
fn test_clear() {
    let mut registry = registry();
    registry.clear();
    assert_eq!(registry.count(), 0);
}
