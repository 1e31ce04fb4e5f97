//! Shared text extraction helpers for version resolvers.

use regex::Regex;

/// Semver range operators stripped from declared versions, in order.
const RANGE_PREFIXES: &[&str] = &["^", "~", ">="];

/// First capture group of `pattern` in `content`.
pub fn first_capture(pattern: &str, content: &str) -> Option<String> {
    Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First capture among several patterns, tried in order.
pub fn first_capture_of(patterns: &[&str], content: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| first_capture(pattern, content))
}

/// First non-empty, non-comment line of a pin file, trimmed, with an optional
/// leading prefix removed. Files such as pyenv's `.python-version` may list
/// several versions; only the first is used. Blank pins count as absent.
pub fn pin_value(content: &str, prefix: Option<&str>) -> Option<String> {
    let line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))?;
    let value = prefix
        .and_then(|p| line.strip_prefix(p))
        .unwrap_or(line)
        .trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Removes `^`, `~` and `>=` (each at most once, in that order) and a leading `v`,
/// then cuts the value at the first character that cannot be part of a version.
///
/// `">=3.9,<4.0"` becomes `"3.9"`, `"^18.2 || ^20"` becomes `"18.2"`.
pub fn strip_range(raw: &str) -> String {
    let mut version = raw.trim();
    for prefix in RANGE_PREFIXES {
        version = version.strip_prefix(prefix).unwrap_or(version).trim_start();
    }
    let version = version.strip_prefix('v').unwrap_or(version);

    version
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '*')
        .collect()
}

/// `major.minor` of a range; `None` when fewer than two components are present.
pub fn major_minor(raw: &str) -> Option<String> {
    let version = strip_range(raw);
    let mut parts = version.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) if !major.is_empty() && !minor.is_empty() => {
            Some(format!("{}.{}", major, minor))
        }
        _ => None,
    }
}

/// Major component of a range.
pub fn major_only(raw: &str) -> Option<String> {
    let version = strip_range(raw);
    version
        .split('.')
        .next()
        .filter(|major| !major.is_empty())
        .map(str::to_string)
}
