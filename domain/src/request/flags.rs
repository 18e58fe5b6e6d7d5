//! Lenient boolean parsing for query-string flags.
//!
//! Request flags such as `useparsoid` are typed by hand into URLs, so
//! parsing is forgiving: common spellings of yes/no are recognised
//! case-insensitively, an absent flag yields the caller's default, and an
//! unrecognised value also yields the default instead of an error.

const TRUTHY: &[&str] = &["1", "true", "yes", "on", "y"];
const FALSY: &[&str] = &["0", "false", "no", "off", "n", ""];

/// Parse a flag value, returning `None` for unrecognised input.
pub fn parse_bool(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSY.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parse an optional flag value, falling back to `default`.
pub fn fuzzy_bool(value: Option<&str>, default: bool) -> bool {
    value.and_then(parse_bool).unwrap_or(default)
}
