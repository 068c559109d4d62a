//! Untrusted import validation.
//!
//! Imported files come from outside the portal and can contain anything;
//! every field is checked structurally before the payload is allowed to
//! become a draft. The validator accumulates findings instead of bailing
//! on the first one (apart from the two parse gates that leave nothing to
//! inspect) and never panics on any input.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use cellmap_model::{
    ConfigurationMetadata, Constraint, DataType, DraftConfiguration, ExportConfiguration,
    ExportInputMapping, ExportOutputMapping, MappingKind,
};
use cellmap_transform::{draft_from_export, parse_version_tag, to_export_configuration};

use crate::draft::validate_configuration;

/// Schema revisions this build understands.
pub const SUPPORTED_SCHEMA_VERSIONS: [&str; 1] = ["1.0"];

/// Outcome of [`validate_imported_json`].
#[derive(Debug)]
pub enum ImportValidationResult {
    /// The payload is usable: a rehydrated draft, its re-normalized
    /// snapshot, and the schema version the file declared, if any.
    Success {
        draft: DraftConfiguration,
        snapshot: ExportConfiguration,
        schema_version: Option<String>,
    },
    /// The payload was rejected; messages are deduplicated and ordered by
    /// first occurrence.
    Failure { errors: Vec<String> },
}

fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

fn parse_schema_version_field(
    value: Option<&Value>,
    context: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    let value = value?;

    let Some(text) = value.as_str() else {
        errors.push(format!("{context} must be a non-empty string."));
        return None;
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        errors.push(format!("{context} cannot be empty."));
        return None;
    }

    Some(trimmed.to_string())
}

enum ConstraintParse {
    Ok(Option<Constraint>),
    Failed,
}

fn scalar_to_trimmed_string(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        // Composite entries carry no usable discrete value.
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_bound(value: Option<&Value>) -> Result<Option<f64>, ()> {
    match value {
        None => Err(()),
        Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(Value::String(text)) => match text.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
            _ => Err(()),
        },
        Some(_) => Err(()),
    }
}

fn parse_constraint_value(
    value: Option<&Value>,
    context: &str,
    errors: &mut Vec<String>,
) -> ConstraintParse {
    let Some(value) = value else {
        return ConstraintParse::Ok(None);
    };

    if value.is_null() {
        return ConstraintParse::Ok(None);
    }

    let Some(object) = value.as_object() else {
        errors.push(format!("{context}: constraints must be an object or null."));
        return ConstraintParse::Failed;
    };

    match object.get("type").and_then(Value::as_str) {
        Some("discrete") => {
            let items = object
                .get("values")
                .and_then(Value::as_array)
                .filter(|items| !items.is_empty());
            let Some(items) = items else {
                errors.push(format!(
                    "{context}: discrete constraints require a non-empty array of values."
                ));
                return ConstraintParse::Failed;
            };

            let values: Vec<String> = items
                .iter()
                .filter_map(scalar_to_trimmed_string)
                .filter(|item| !item.is_empty())
                .collect();

            if values.is_empty() {
                errors.push(format!(
                    "{context}: discrete constraints must include at least one non-empty value."
                ));
                return ConstraintParse::Failed;
            }

            ConstraintParse::Ok(Some(Constraint::Discrete { values }))
        }
        Some("range") => {
            let min = coerce_bound(object.get("min"));
            let max = coerce_bound(object.get("max"));

            match (min, max) {
                (Ok(min), Ok(max)) => ConstraintParse::Ok(Some(Constraint::Range { min, max })),
                _ => {
                    errors.push(format!(
                        "{context}: range constraints require numeric minimum and maximum values."
                    ));
                    ConstraintParse::Failed
                }
            }
        }
        _ => {
            errors.push(format!("{context}: unsupported constraint type."));
            ConstraintParse::Failed
        }
    }
}

fn parse_export_input_mapping(
    value: &Value,
    index: usize,
    errors: &mut Vec<String>,
) -> Option<ExportInputMapping> {
    let context = format!("Input #{}", index + 1);

    let Some(object) = value.as_object() else {
        errors.push(format!("{context}: expected an object."));
        return None;
    };

    let start_error_count = errors.len();

    if object.get("type").and_then(Value::as_str) != Some("input") {
        errors.push(format!("{context}: type must be \"input\"."));
    }

    let sheet_name = non_empty_string(object.get("sheetName"));
    if sheet_name.is_none() {
        errors.push(format!("{context}: sheetName is required."));
    }

    let cell_id = non_empty_string(object.get("cellId"));
    if cell_id.is_none() {
        errors.push(format!("{context}: cellId is required."));
    }

    let label = non_empty_string(object.get("label"));
    if label.is_none() {
        errors.push(format!("{context}: label is required."));
    }

    let raw_data_type = non_empty_string(object.get("dataType"));
    if raw_data_type.is_none() {
        errors.push(format!("{context}: dataType is required."));
    }

    let data_type = raw_data_type.and_then(DataType::parse);
    if data_type.is_none() {
        let allowed = DataType::ALL.map(|data_type| data_type.as_str()).join(", ");
        errors.push(format!("{context}: dataType must be one of {allowed}."));
    }

    let constraint_result = parse_constraint_value(object.get("constraints"), &context, errors);

    let ConstraintParse::Ok(constraints) = constraint_result else {
        return None;
    };
    if errors.len() > start_error_count {
        return None;
    }

    Some(ExportInputMapping {
        kind: MappingKind::Input,
        sheet_name: sheet_name.unwrap_or_default().to_string(),
        cell_id: cell_id.unwrap_or_default().to_string(),
        label: label.unwrap_or_default().to_string(),
        data_type: data_type.unwrap_or_default(),
        constraints,
    })
}

fn parse_export_output_mapping(
    value: &Value,
    index: usize,
    errors: &mut Vec<String>,
) -> Option<ExportOutputMapping> {
    let context = format!("Output #{}", index + 1);

    let Some(object) = value.as_object() else {
        errors.push(format!("{context}: expected an object."));
        return None;
    };

    let start_error_count = errors.len();

    if object.get("type").and_then(Value::as_str) != Some("output") {
        errors.push(format!("{context}: type must be \"output\"."));
    }

    let sheet_name = non_empty_string(object.get("sheetName"));
    if sheet_name.is_none() {
        errors.push(format!("{context}: sheetName is required."));
    }

    let cell_id = non_empty_string(object.get("cellId"));
    if cell_id.is_none() {
        errors.push(format!("{context}: cellId is required."));
    }

    let label = non_empty_string(object.get("label"));
    if label.is_none() {
        errors.push(format!("{context}: label is required."));
    }

    if object.contains_key("dataType") {
        errors.push(format!(
            "{context}: outputs must not include a dataType. Remove the metadata field."
        ));
    }

    if object.contains_key("constraints") {
        errors.push(format!(
            "{context}: outputs must not include constraints metadata. Remove the constraints field."
        ));
    }

    if errors.len() > start_error_count {
        return None;
    }

    Some(ExportOutputMapping {
        kind: MappingKind::Output,
        sheet_name: sheet_name.unwrap_or_default().to_string(),
        cell_id: cell_id.unwrap_or_default().to_string(),
        label: label.unwrap_or_default().to_string(),
    })
}

fn parse_metadata(
    metadata_object: &Map<String, Value>,
    resolved_schema_version: Option<&str>,
    errors: &mut Vec<String>,
) -> Option<ConfigurationMetadata> {
    let created_at = non_empty_string(metadata_object.get("createdAt"));
    if created_at.is_none() {
        errors.push("metadata.createdAt must be an ISO timestamp string.".to_string());
    }

    let metadata_version = non_empty_string(metadata_object.get("version"));
    match metadata_version {
        None => errors.push("metadata.version must be provided (e.g., \"v5\").".to_string()),
        Some(version) if parse_version_tag(version).is_none() => {
            errors.push(format!(
                "metadata.version '{version}' must follow the pattern v<number>."
            ));
        }
        Some(_) => {}
    }

    let updated_at = match metadata_object.get("updatedAt") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(_) => {
            errors.push("metadata.updatedAt must be null or a timestamp string.".to_string());
            None
        }
    };

    // An explicit null source reads as "not recorded", same as absence.
    let source = match metadata_object.get("source") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            errors.push("metadata.source must be a string when provided.".to_string());
            None
        }
    };

    let (created_at, version) = (created_at?, metadata_version?);
    Some(ConfigurationMetadata {
        created_at: created_at.to_string(),
        version: version.to_string(),
        updated_at,
        schema_version: resolved_schema_version.map(str::to_string),
        source,
    })
}

fn collect_unique_errors(messages: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    messages
        .into_iter()
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .filter(|message| seen.insert(message.clone()))
        .collect()
}

/// Validates an untrusted JSON payload and, when sound, turns it into a
/// working draft.
///
/// Structural checks run first; any finding fails the import with the
/// full deduplicated list. A structurally sound payload is then converted
/// to a draft and run through [`validate_configuration`], so a file that
/// parses cleanly but violates draft rules (a duplicated cell location,
/// say) is still rejected.
pub fn validate_imported_json(raw: &str) -> ImportValidationResult {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(_) => {
            return ImportValidationResult::Failure {
                errors: vec!["The selected file does not contain valid JSON.".to_string()],
            };
        }
    };

    let Some(root) = parsed.as_object() else {
        return ImportValidationResult::Failure {
            errors: vec!["Imported configuration must be a JSON object.".to_string()],
        };
    };

    let mut errors: Vec<String> = Vec::new();

    let version_value = non_empty_string(root.get("version"));
    match version_value {
        None => errors
            .push("Configuration is missing a top-level version (e.g., \"v5\").".to_string()),
        Some(version) if parse_version_tag(version).is_none() => {
            errors.push(format!(
                "Version '{version}' must follow the pattern v<number>."
            ));
        }
        Some(_) => {}
    }

    let inputs_value = root.get("inputs").and_then(Value::as_array);
    if inputs_value.is_none() {
        errors.push("Configuration requires an 'inputs' array.".to_string());
    }

    let outputs_value = root.get("outputs").and_then(Value::as_array);
    if outputs_value.is_none() {
        errors.push("Configuration requires an 'outputs' array.".to_string());
    }

    let metadata_value = root.get("metadata").and_then(Value::as_object);
    if metadata_value.is_none() {
        errors.push("Configuration requires a 'metadata' object.".to_string());
    }

    let root_schema_version =
        parse_schema_version_field(root.get("schemaVersion"), "schemaVersion", &mut errors);
    let metadata_schema_version = parse_schema_version_field(
        metadata_value.and_then(|metadata| metadata.get("schemaVersion")),
        "metadata.schemaVersion",
        &mut errors,
    );

    if let (Some(root_version), Some(metadata_version)) =
        (&root_schema_version, &metadata_schema_version)
    {
        if root_version != metadata_version {
            errors.push(
                "schemaVersion must match metadata.schemaVersion when both are provided."
                    .to_string(),
            );
        }
    }

    let resolved_schema_version = root_schema_version.or(metadata_schema_version);

    let metadata = metadata_value.and_then(|metadata_object| {
        parse_metadata(
            metadata_object,
            resolved_schema_version.as_deref(),
            &mut errors,
        )
    });

    let mut parsed_inputs: Vec<ExportInputMapping> = Vec::new();
    if let Some(items) = inputs_value {
        for (index, item) in items.iter().enumerate() {
            if let Some(mapping) = parse_export_input_mapping(item, index, &mut errors) {
                parsed_inputs.push(mapping);
            }
        }
    }

    let mut parsed_outputs: Vec<ExportOutputMapping> = Vec::new();
    if let Some(items) = outputs_value {
        for (index, item) in items.iter().enumerate() {
            if let Some(mapping) = parse_export_output_mapping(item, index, &mut errors) {
                parsed_outputs.push(mapping);
            }
        }
    }

    if let (Some(metadata), Some(version)) = (&metadata, version_value) {
        if metadata.version != version {
            errors.push("Top-level version must match metadata.version.".to_string());
        }
    }

    let Some(metadata) = metadata else {
        errors.push("Configuration metadata is incomplete.".to_string());
        return ImportValidationResult::Failure {
            errors: collect_unique_errors(errors),
        };
    };

    let unique_errors = collect_unique_errors(errors);
    if !unique_errors.is_empty() {
        return ImportValidationResult::Failure {
            errors: unique_errors,
        };
    }

    let snapshot = ExportConfiguration {
        version: metadata.version.clone(),
        inputs: parsed_inputs,
        outputs: parsed_outputs,
        schema_version: resolved_schema_version.clone(),
        metadata,
    };

    let draft = draft_from_export(&snapshot);
    let validation = validate_configuration(&draft);

    if !validation.is_valid {
        let messages = collect_unique_errors(
            validation
                .errors
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        return ImportValidationResult::Failure { errors: messages };
    }

    ImportValidationResult::Success {
        snapshot: to_export_configuration(&draft),
        draft,
        schema_version: resolved_schema_version,
    }
}
