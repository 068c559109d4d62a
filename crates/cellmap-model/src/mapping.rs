use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::datatype::DataType;

/// Per-mapping discriminator carried on the wire as `"type"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
    Input,
    Output,
}

impl MappingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingKind::Input => "input",
            MappingKind::Output => "output",
        }
    }
}

/// An editable input mapping as held by a UI session.
///
/// `data_type` is `None` while the user has not picked a type yet; draft
/// validation reports that state. Identifiers exist only on drafts and are
/// regenerated whenever an export snapshot is rehydrated.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMapping {
    pub id: String,
    pub sheet_name: String,
    pub cell_id: String,
    pub label: String,
    pub data_type: Option<DataType>,
    pub constraints: Option<Constraint>,
}

/// An editable output mapping. Outputs are read-only derived values and
/// carry neither a data type nor constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputMapping {
    pub id: String,
    pub sheet_name: String,
    pub cell_id: String,
    pub label: String,
}

/// Canonical, identifier-free form of an input mapping.
///
/// `constraints` is omitted from JSON entirely when absent; absence, not
/// `null`, denotes "no constraint" in the export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInputMapping {
    #[serde(rename = "type")]
    pub kind: MappingKind,
    pub sheet_name: String,
    pub cell_id: String,
    pub label: String,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraint>,
}

/// Canonical, identifier-free form of an output mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutputMapping {
    #[serde(rename = "type")]
    pub kind: MappingKind,
    pub sheet_name: String,
    pub cell_id: String,
    pub label: String,
}
