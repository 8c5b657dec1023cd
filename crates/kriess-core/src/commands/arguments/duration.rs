//! Duration token parsing
//!
//! A bare number is read as seconds. Otherwise a token is one or more
//! `<number><unit>` segments, e.g. `90s`, `2h`, `1h30m`, `1w2d`.

use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+[smhdw])+$").expect("valid duration pattern"));
static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)([smhdw])").expect("valid duration segment pattern"));

/// Seconds represented by one unit suffix
fn unit_seconds(unit: &str) -> u64 {
    match unit {
        "m" => 60,
        "h" => 60 * 60,
        "d" => 60 * 60 * 24,
        "w" => 60 * 60 * 24 * 7,
        _ => 1,
    }
}

/// Parse one token into seconds. Returns `None` for anything that is not a
/// duration or that overflows.
pub fn parse_token(token: &str) -> Option<u64> {
    let token = token.to_ascii_lowercase();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().ok();
    }
    if !SEGMENTS.is_match(&token) {
        return None;
    }

    SEGMENT.captures_iter(&token).try_fold(0u64, |total, caps| {
        let amount: u64 = caps[1].parse().ok()?;
        amount
            .checked_mul(unit_seconds(&caps[2]))
            .and_then(|secs| total.checked_add(secs))
    })
}

/// Whether the token carries a unit suffix (as opposed to a bare number).
/// Only such tokens extend a duration that started on an earlier token.
pub fn has_unit(token: &str) -> bool {
    SEGMENTS.is_match(&token.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_token("30"), Some(30));
        assert_eq!(parse_token("0"), Some(0));
    }

    #[test]
    fn test_units() {
        assert_eq!(parse_token("90s"), Some(90));
        assert_eq!(parse_token("5m"), Some(300));
        assert_eq!(parse_token("2H"), Some(7200));
        assert_eq!(parse_token("1d"), Some(86_400));
        assert_eq!(parse_token("1w"), Some(604_800));
    }

    #[test]
    fn test_compound() {
        assert_eq!(parse_token("1h30m"), Some(5400));
        assert_eq!(parse_token("1w2d3h4m5s"), Some(604_800 + 172_800 + 10_800 + 240 + 5));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_token(""), None);
        assert_eq!(parse_token("soon"), None);
        assert_eq!(parse_token("10x"), None);
        assert_eq!(parse_token("h10"), None);
        assert_eq!(parse_token("-5"), None);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(parse_token("99999999999999999999"), None);
        assert_eq!(parse_token("18446744073709551615w"), None);
    }

    #[test]
    fn test_has_unit() {
        assert!(has_unit("30m"));
        assert!(!has_unit("30"));
        assert!(!has_unit("later"));
    }
}
