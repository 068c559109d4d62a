//! Draft/export lowering and rehydration tests.

use cellmap_model::{
    ConfigurationMetadata, Constraint, DataType, DraftConfiguration, InputMapping, OutputMapping,
    SequentialIds,
};
use cellmap_transform::{
    are_exports_equal, canonical_json, draft_from_export_configuration, to_export_configuration,
};

fn make_metadata() -> ConfigurationMetadata {
    ConfigurationMetadata {
        created_at: "2024-05-01T10:00:00.000Z".to_string(),
        version: "v3".to_string(),
        updated_at: None,
        schema_version: None,
        source: None,
    }
}

fn make_input(id: &str, sheet: &str, cell: &str, label: &str) -> InputMapping {
    InputMapping {
        id: id.to_string(),
        sheet_name: sheet.to_string(),
        cell_id: cell.to_string(),
        label: label.to_string(),
        data_type: Some(DataType::Number),
        constraints: None,
    }
}

fn make_output(id: &str, sheet: &str, cell: &str, label: &str) -> OutputMapping {
    OutputMapping {
        id: id.to_string(),
        sheet_name: sheet.to_string(),
        cell_id: cell.to_string(),
        label: label.to_string(),
    }
}

fn make_draft() -> DraftConfiguration {
    DraftConfiguration {
        inputs: vec![
            make_input("in-1", "Budget", "C4", "Rate"),
            make_input("in-2", "Budget", "A1", "Amount"),
        ],
        outputs: vec![make_output("out-1", "Budget", "F9", "Total")],
        metadata: make_metadata(),
    }
}

#[test]
fn export_sanitizes_fields_and_strips_ids() {
    let mut draft = make_draft();
    draft.inputs[0].sheet_name = "  Budget  ".to_string();
    draft.inputs[0].cell_id = " c4 ".to_string();
    draft.inputs[0].label = "  Rate ".to_string();

    let export = to_export_configuration(&draft);

    let rate = export
        .inputs
        .iter()
        .find(|mapping| mapping.label == "Rate")
        .expect("rate input survives export");
    assert_eq!(rate.sheet_name, "Budget");
    assert_eq!(rate.cell_id, "C4");

    let json = canonical_json(&export);
    assert!(!json.contains("in-1"));
    assert!(!json.contains("\"id\""));
}

#[test]
fn export_sorts_mappings_by_location() {
    let export = to_export_configuration(&make_draft());
    let cells: Vec<&str> = export
        .inputs
        .iter()
        .map(|mapping| mapping.cell_id.as_str())
        .collect();
    assert_eq!(cells, vec!["A1", "C4"]);
}

#[test]
fn export_mirrors_version_and_schema_version() {
    let mut draft = make_draft();
    draft.metadata.schema_version = Some("1.0".to_string());

    let export = to_export_configuration(&draft);
    assert_eq!(export.version, "v3");
    assert_eq!(export.metadata.version, "v3");
    assert_eq!(export.schema_version.as_deref(), Some("1.0"));
    assert_eq!(export.metadata.schema_version.as_deref(), Some("1.0"));
}

#[test]
fn round_trip_preserves_semantics() {
    let mut draft = make_draft();
    draft.inputs[0].constraints = Some(Constraint::range(Some(0.0), Some(100.0)));
    draft.inputs[1].constraints = Some(Constraint::discrete(["a", "b"]));

    let export = to_export_configuration(&draft);
    let ids = SequentialIds::new();
    let rehydrated = draft_from_export_configuration(&export, &ids);
    let second_export = to_export_configuration(&rehydrated);

    assert!(are_exports_equal(&export, &second_export));
    assert_eq!(canonical_json(&export), canonical_json(&second_export));
}

#[test]
fn rehydration_mints_fresh_ids() {
    let export = to_export_configuration(&make_draft());
    let ids = SequentialIds::new();
    let draft = draft_from_export_configuration(&export, &ids);

    assert_eq!(draft.inputs[0].id, "input-1");
    assert_eq!(draft.inputs[1].id, "input-2");
    assert_eq!(draft.outputs[0].id, "output-3");
}

#[test]
fn rehydration_resolves_schema_version_from_metadata_first() {
    let mut export = to_export_configuration(&make_draft());
    export.metadata.schema_version = Some("2.0".to_string());
    export.schema_version = Some("1.0".to_string());

    let ids = SequentialIds::new();
    let draft = draft_from_export_configuration(&export, &ids);
    assert_eq!(draft.metadata.schema_version.as_deref(), Some("2.0"));
}

#[test]
fn rehydration_falls_back_to_top_level_schema_version() {
    let mut export = to_export_configuration(&make_draft());
    export.metadata.schema_version = None;
    export.schema_version = Some("1.0".to_string());

    let ids = SequentialIds::new();
    let draft = draft_from_export_configuration(&export, &ids);
    assert_eq!(draft.metadata.schema_version.as_deref(), Some("1.0"));
}

#[test]
fn repeated_normalization_is_idempotent() {
    let draft = make_draft();
    let first = to_export_configuration(&draft);
    let ids = SequentialIds::new();
    let second = to_export_configuration(&draft_from_export_configuration(&first, &ids));
    let third = to_export_configuration(&draft_from_export_configuration(&second, &ids));

    assert_eq!(canonical_json(&first), canonical_json(&second));
    assert_eq!(canonical_json(&second), canonical_json(&third));
}
