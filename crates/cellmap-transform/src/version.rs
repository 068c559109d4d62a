//! Version tag arithmetic.
//!
//! Configuration versions are `"v<number>"` tags, compared and bumped
//! textually rather than stored as numbers so the wire format stays a
//! plain string.

use std::sync::LazyLock;

use regex::Regex;

/// `v` (either case) followed by one or more digits, nothing else.
static VERSION_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^v(\d+)$").expect("Invalid version tag regex"));

/// Extracts the numeric part of a version tag.
///
/// Input is trimmed and matched case-insensitively; anything that is not
/// `v<digits>` (or whose digits overflow a `u64`) yields `None`.
pub fn parse_version_tag(version: &str) -> Option<u64> {
    let captures = VERSION_TAG_REGEX.captures(version.trim())?;
    captures[1].parse().ok()
}

/// Bumps a version tag to its successor.
///
/// Tags that do not parse restart the sequence at `"v1"`.
pub fn increment_version_tag(version: &str) -> String {
    match parse_version_tag(version).and_then(|numeric| numeric.checked_add(1)) {
        Some(next) => format!("v{next}"),
        None => "v1".to_string(),
    }
}
