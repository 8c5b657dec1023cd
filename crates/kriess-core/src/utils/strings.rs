//! Whitespace handling for command input

use once_cell::sync::Lazy;
use regex::Regex;

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Collapse every run of whitespace into a single space and trim the ends
pub fn remove_extra_spaces(s: &str) -> String {
    SPACES.replace_all(s, " ").trim().to_string()
}

/// Split on whitespace runs, at most `limit` pieces (`0` means no limit).
///
/// Leading whitespace is trimmed first so the first piece is never empty
/// for non-blank input.
pub fn split_spaces(s: &str, limit: usize) -> Vec<&str> {
    let s = s.trim_start();
    if s.is_empty() {
        return Vec::new();
    }
    if limit == 0 {
        SPACES.split(s).filter(|p| !p.is_empty()).collect()
    } else {
        SPACES.splitn(s, limit).collect()
    }
}

/// Split off the first whitespace-delimited token.
///
/// Returns the token and the trimmed rest, or `None` for blank input.
pub fn split_first_token(s: &str) -> Option<(&str, &str)> {
    let mut parts = split_spaces(s, 2).into_iter();
    let first = parts.next()?;
    let rest = parts.next().map(str::trim).unwrap_or("");
    Some((first, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_extra_spaces() {
        assert_eq!(remove_extra_spaces("  a   b\t\nc  "), "a b c");
        assert_eq!(remove_extra_spaces(""), "");
    }

    #[test]
    fn test_split_spaces_unlimited() {
        assert_eq!(split_spaces("one  two\tthree ", 0), vec!["one", "two", "three"]);
        assert!(split_spaces("   ", 0).is_empty());
    }

    #[test]
    fn test_split_spaces_limited() {
        assert_eq!(split_spaces("config  prefix !", 2), vec!["config", "prefix !"]);
        assert_eq!(split_spaces("help", 2), vec!["help"]);
    }

    #[test]
    fn test_split_first_token() {
        assert_eq!(split_first_token("  prefix   !  "), Some(("prefix", "!")));
        assert_eq!(split_first_token("help"), Some(("help", "")));
        assert_eq!(split_first_token(" \t "), None);
    }
}
