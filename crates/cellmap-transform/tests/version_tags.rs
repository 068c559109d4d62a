//! Version tag parsing and bumping tests.

use cellmap_transform::{increment_version_tag, parse_version_tag};

#[test]
fn parses_well_formed_tags() {
    assert_eq!(parse_version_tag("v12"), Some(12));
    assert_eq!(parse_version_tag("V7"), Some(7));
    assert_eq!(parse_version_tag("  v3  "), Some(3));
    assert_eq!(parse_version_tag("v0"), Some(0));
}

#[test]
fn rejects_malformed_tags() {
    assert_eq!(parse_version_tag("12"), None);
    assert_eq!(parse_version_tag("v3.1"), None);
    assert_eq!(parse_version_tag("version 3"), None);
    assert_eq!(parse_version_tag("vv2"), None);
    assert_eq!(parse_version_tag("v-1"), None);
    assert_eq!(parse_version_tag(""), None);
    // More digits than u64 can hold.
    assert_eq!(parse_version_tag("v99999999999999999999999999"), None);
}

#[test]
fn increments_or_restarts() {
    assert_eq!(increment_version_tag("v3"), "v4");
    assert_eq!(increment_version_tag("V9"), "v10");
    assert_eq!(increment_version_tag("v0"), "v1");
    assert_eq!(increment_version_tag("abc"), "v1");
    assert_eq!(increment_version_tag(""), "v1");
    // u64::MAX cannot be bumped; the sequence restarts like any bad tag.
    assert_eq!(increment_version_tag("v18446744073709551615"), "v1");
}
