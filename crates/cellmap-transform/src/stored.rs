//! Stored draft-bundle codec.
//!
//! A portal session persists one [`DraftBundle`] as a JSON string. Two
//! generations of that payload exist: the current `{configuration,
//! importBaseline}` bundle and a legacy bare configuration from before
//! import baselines. Both are accepted; stored mappings may predate
//! mapping identifiers and data-type backfills, so the codec repairs what
//! it can instead of rejecting. The caller owns the actual storage slot;
//! this module only converts text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cellmap_model::{
    ConfigurationMetadata, Constraint, DataType, DraftBundle, DraftConfiguration, IdFactory,
    ImportBaseline, InputMapping, MappingKind, OutputMapping,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredInputMapping {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<MappingKind>,
    sheet_name: String,
    cell_id: String,
    label: String,
    data_type: Option<DataType>,
    constraints: Option<Constraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredOutputMapping {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<MappingKind>,
    sheet_name: String,
    cell_id: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredDraftConfiguration {
    inputs: Vec<StoredInputMapping>,
    outputs: Vec<StoredOutputMapping>,
    metadata: ConfigurationMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDraftBundle {
    configuration: StoredDraftConfiguration,
    import_baseline: Option<ImportBaseline>,
}

fn with_ids(stored: StoredDraftConfiguration, ids: &dyn IdFactory) -> DraftConfiguration {
    DraftConfiguration {
        inputs: stored
            .inputs
            .into_iter()
            .map(|mapping| InputMapping {
                id: mapping.id.unwrap_or_else(|| ids.create_id("input")),
                sheet_name: mapping.sheet_name,
                cell_id: mapping.cell_id,
                label: mapping.label,
                data_type: Some(mapping.data_type.unwrap_or_default()),
                constraints: mapping.constraints,
            })
            .collect(),
        outputs: stored
            .outputs
            .into_iter()
            .map(|mapping| OutputMapping {
                id: mapping.id.unwrap_or_else(|| ids.create_id("output")),
                sheet_name: mapping.sheet_name,
                cell_id: mapping.cell_id,
                label: mapping.label,
            })
            .collect(),
        metadata: stored.metadata,
    }
}

fn is_stored_bundle(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.contains_key("configuration") && object.contains_key("importBaseline")
    })
}

fn try_parse(raw: &str, ids: &dyn IdFactory) -> Result<DraftBundle, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;

    if is_stored_bundle(&value) {
        let stored: StoredDraftBundle = serde_json::from_value(value)?;
        return Ok(DraftBundle {
            configuration: with_ids(stored.configuration, ids),
            import_baseline: stored.import_baseline,
        });
    }

    let stored: StoredDraftConfiguration = serde_json::from_value(value)?;
    Ok(DraftBundle {
        configuration: with_ids(stored, ids),
        import_baseline: None,
    })
}

/// Decodes a stored payload, migrating legacy shapes and minting
/// identifiers for mappings that lack one. Malformed payloads are logged
/// and dropped rather than surfaced; a session recovers by starting empty.
pub fn parse_stored_bundle(raw: &str, ids: &dyn IdFactory) -> Option<DraftBundle> {
    match try_parse(raw, ids) {
        Ok(bundle) => Some(bundle),
        Err(error) => {
            tracing::warn!(%error, "discarding malformed stored configuration bundle");
            None
        }
    }
}

/// Encodes a bundle for the storage slot. Unlike exports, stored drafts
/// keep their identifiers so a reload resumes the same session.
pub fn serialize_stored_bundle(bundle: &DraftBundle) -> String {
    let stored = StoredDraftBundle {
        configuration: StoredDraftConfiguration {
            inputs: bundle
                .configuration
                .inputs
                .iter()
                .map(|mapping| StoredInputMapping {
                    kind: Some(MappingKind::Input),
                    sheet_name: mapping.sheet_name.clone(),
                    cell_id: mapping.cell_id.clone(),
                    label: mapping.label.clone(),
                    data_type: mapping.data_type,
                    constraints: mapping.constraints.clone(),
                    id: Some(mapping.id.clone()),
                })
                .collect(),
            outputs: bundle
                .configuration
                .outputs
                .iter()
                .map(|mapping| StoredOutputMapping {
                    kind: Some(MappingKind::Output),
                    sheet_name: mapping.sheet_name.clone(),
                    cell_id: mapping.cell_id.clone(),
                    label: mapping.label.clone(),
                    id: Some(mapping.id.clone()),
                })
                .collect(),
            metadata: bundle.configuration.metadata.clone(),
        },
        import_baseline: bundle.import_baseline.clone(),
    };

    serde_json::to_string(&stored).expect("stored bundle serializes to JSON")
}
