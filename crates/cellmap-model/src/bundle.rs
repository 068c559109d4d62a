use serde::{Deserialize, Serialize};

use crate::configuration::{DraftConfiguration, ExportConfiguration};

/// Snapshot remembered at import time.
///
/// Lets a session answer "has anything really changed since the import?"
/// by comparing the current draft's export against `snapshot`. The two
/// optional fields serialize as explicit `null` so stored baselines keep a
/// fixed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBaseline {
    pub snapshot: ExportConfiguration,
    pub imported_at: String,
    pub source_file_name: Option<String>,
    pub schema_version: Option<String>,
}

/// The single unit a portal session persists: the working draft plus the
/// baseline of the import it started from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBundle {
    pub configuration: DraftConfiguration,
    pub import_baseline: Option<ImportBaseline>,
}
