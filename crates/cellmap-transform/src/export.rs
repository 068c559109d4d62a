//! Draft to export lowering and rehydration.

use cellmap_model::{
    ConfigurationMetadata, DraftConfiguration, ExportConfiguration, ExportInputMapping,
    ExportOutputMapping, IdFactory, InputMapping, MappingKind, OutputMapping, RandomIds,
};

fn sanitize_sheet_name(value: &str) -> String {
    value.trim().to_string()
}

fn sanitize_cell_id(value: &str) -> String {
    value.trim().to_uppercase()
}

fn sanitize_label(value: &str) -> String {
    value.trim().to_string()
}

fn to_export_input(mapping: &InputMapping) -> ExportInputMapping {
    ExportInputMapping {
        kind: MappingKind::Input,
        sheet_name: sanitize_sheet_name(&mapping.sheet_name),
        cell_id: sanitize_cell_id(&mapping.cell_id),
        label: sanitize_label(&mapping.label),
        // Missing draft data types are a validation failure; the lowering
        // itself stays total and falls back to the default.
        data_type: mapping.data_type.unwrap_or_default(),
        constraints: mapping.constraints.clone(),
    }
}

fn to_export_output(mapping: &OutputMapping) -> ExportOutputMapping {
    ExportOutputMapping {
        kind: MappingKind::Output,
        sheet_name: sanitize_sheet_name(&mapping.sheet_name),
        cell_id: sanitize_cell_id(&mapping.cell_id),
        label: sanitize_label(&mapping.label),
    }
}

fn mapping_sort_key(sheet_name: &str, cell_id: &str, label: &str, kind: MappingKind) -> String {
    format!(
        "{}::{}::{}::{}",
        sheet_name.to_lowercase(),
        cell_id.to_lowercase(),
        label.to_lowercase(),
        kind.as_str()
    )
}

fn sort_inputs(inputs: &mut [ExportInputMapping]) {
    inputs.sort_by_key(|mapping| {
        mapping_sort_key(
            &mapping.sheet_name,
            &mapping.cell_id,
            &mapping.label,
            mapping.kind,
        )
    });
}

fn sort_outputs(outputs: &mut [ExportOutputMapping]) {
    outputs.sort_by_key(|mapping| {
        mapping_sort_key(
            &mapping.sheet_name,
            &mapping.cell_id,
            &mapping.label,
            mapping.kind,
        )
    });
}

/// Lowers a draft into its canonical export form.
///
/// Strips identifiers, trims sheet names and labels, uppercases cell ids,
/// and sorts inputs and outputs independently by the case-insensitive
/// `sheet::cell::label::kind` key so equal configurations serialize to
/// byte-identical JSON regardless of editing order.
pub fn normalize_export_configuration(configuration: &DraftConfiguration) -> ExportConfiguration {
    let mut inputs: Vec<ExportInputMapping> =
        configuration.inputs.iter().map(to_export_input).collect();
    sort_inputs(&mut inputs);

    let mut outputs: Vec<ExportOutputMapping> =
        configuration.outputs.iter().map(to_export_output).collect();
    sort_outputs(&mut outputs);

    let metadata = ConfigurationMetadata {
        created_at: configuration.metadata.created_at.clone(),
        version: configuration.metadata.version.clone(),
        updated_at: configuration.metadata.updated_at.clone(),
        schema_version: configuration.metadata.schema_version.clone(),
        source: configuration.metadata.source.clone(),
    };

    ExportConfiguration {
        version: metadata.version.clone(),
        inputs,
        outputs,
        schema_version: metadata.schema_version.clone(),
        metadata,
    }
}

/// Public entry point for export flows.
pub fn to_export_configuration(configuration: &DraftConfiguration) -> ExportConfiguration {
    normalize_export_configuration(configuration)
}

/// Re-normalizes a snapshot that did not necessarily come from
/// [`normalize_export_configuration`]: mappings are re-sorted but field
/// values are taken as-is.
pub(crate) fn normalize_export_snapshot(snapshot: &ExportConfiguration) -> ExportConfiguration {
    let mut normalized = snapshot.clone();
    sort_inputs(&mut normalized.inputs);
    sort_outputs(&mut normalized.outputs);
    normalized
}

/// Rehydrates an export snapshot into an editable draft.
///
/// Every mapping receives a fresh identifier from `ids`; snapshots never
/// carry identifiers across a process boundary. The draft's schema version
/// resolves from `metadata.schema_version` first, then the snapshot's
/// top-level mirror.
pub fn draft_from_export_configuration(
    snapshot: &ExportConfiguration,
    ids: &dyn IdFactory,
) -> DraftConfiguration {
    let resolved_schema_version = snapshot
        .metadata
        .schema_version
        .clone()
        .or_else(|| snapshot.schema_version.clone());

    DraftConfiguration {
        inputs: snapshot
            .inputs
            .iter()
            .map(|mapping| InputMapping {
                id: ids.create_id("input"),
                sheet_name: mapping.sheet_name.clone(),
                cell_id: mapping.cell_id.clone(),
                label: mapping.label.clone(),
                data_type: Some(mapping.data_type),
                constraints: mapping.constraints.clone(),
            })
            .collect(),
        outputs: snapshot
            .outputs
            .iter()
            .map(|mapping| OutputMapping {
                id: ids.create_id("output"),
                sheet_name: mapping.sheet_name.clone(),
                cell_id: mapping.cell_id.clone(),
                label: mapping.label.clone(),
            })
            .collect(),
        metadata: ConfigurationMetadata {
            created_at: snapshot.metadata.created_at.clone(),
            version: snapshot.metadata.version.clone(),
            updated_at: snapshot.metadata.updated_at.clone(),
            schema_version: resolved_schema_version,
            source: snapshot.metadata.source.clone(),
        },
    }
}

/// [`draft_from_export_configuration`] with random identifiers.
pub fn draft_from_export(snapshot: &ExportConfiguration) -> DraftConfiguration {
    draft_from_export_configuration(snapshot, &RandomIds)
}
