use serde::{Deserialize, Serialize};

use crate::mapping::{ExportInputMapping, ExportOutputMapping, InputMapping, OutputMapping};

/// Provenance block attached to every configuration.
///
/// `updated_at` is always present on the wire (`null` when never updated);
/// `schema_version` and `source` are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationMetadata {
    pub created_at: String,
    pub version: String,
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The mutable configuration a UI session edits.
///
/// Drafts never cross a process boundary directly; they are lowered to an
/// [`ExportConfiguration`] first and rehydrated with fresh identifiers on
/// the way back in.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftConfiguration {
    pub inputs: Vec<InputMapping>,
    pub outputs: Vec<OutputMapping>,
    pub metadata: ConfigurationMetadata,
}

/// The canonical interchange form of a configuration.
///
/// The top-level `version` mirrors `metadata.version`; the optional
/// top-level `schema_version` mirrors `metadata.schema_version` when set.
/// Mapping order is the canonical sort produced by the transform layer,
/// not insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfiguration {
    pub version: String,
    pub inputs: Vec<ExportInputMapping>,
    pub outputs: Vec<ExportOutputMapping>,
    pub metadata: ConfigurationMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
}
