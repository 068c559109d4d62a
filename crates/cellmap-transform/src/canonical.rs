//! Stable serialization and snapshot equality.

use cellmap_model::ExportConfiguration;

use crate::export::normalize_export_snapshot;

/// Serializes a snapshot with recursively sorted object keys.
///
/// `serde_json::Value` maps iterate in key order, so routing through a
/// value tree yields the same bytes for the same snapshot regardless of
/// struct field declaration order.
///
/// # Panics
///
/// If the snapshot fails to serialize to a JSON value. The model is an
/// owned, acyclic tree of plain serde derives, so this indicates a broken
/// model definition rather than a runtime condition.
pub fn canonical_json(snapshot: &ExportConfiguration) -> String {
    let value =
        serde_json::to_value(snapshot).expect("export configuration serializes to a JSON value");
    value.to_string()
}

/// Compares two snapshots for semantic equality.
///
/// Each side is re-normalized first (re-sorted mappings, canonical key
/// order), so mapping order and JSON formatting differences never produce
/// a false "changed" answer.
pub fn are_exports_equal(first: &ExportConfiguration, second: &ExportConfiguration) -> bool {
    canonical_json(&normalize_export_snapshot(first))
        == canonical_json(&normalize_export_snapshot(second))
}
