//! Draft configuration validation.
//!
//! Runs every check and reports every violation in one pass; the portal
//! shows the full list rather than stopping at the first problem.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use cellmap_model::{Constraint, DraftConfiguration, InputMapping, OutputMapping, ValidationError};

/// `A1`-style cell reference: column letters, then row digits.
pub static EXCEL_CELL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+[0-9]+$").expect("Invalid cell reference regex"));

/// Outcome of validating a draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

struct SanitizedFields {
    sheet_name: String,
    cell_id: String,
    label: String,
}

fn sanitize_common_fields(sheet_name: &str, cell_id: &str, label: &str) -> SanitizedFields {
    SanitizedFields {
        sheet_name: sheet_name.trim().to_string(),
        cell_id: cell_id.trim().to_uppercase(),
        label: label.trim().to_string(),
    }
}

fn validate_common_fields(
    id: &str,
    sheet_name: &str,
    cell_id: &str,
    label: &str,
    errors: &mut Vec<ValidationError>,
    seen_locations: &mut BTreeSet<String>,
) {
    let sanitized = sanitize_common_fields(sheet_name, cell_id, label);
    // Findings point at the label when there is one, else at the location.
    let descriptor = if sanitized.label.is_empty() {
        format!("{} {}", sanitized.sheet_name, sanitized.cell_id)
    } else {
        sanitized.label.clone()
    };

    if sanitized.sheet_name.is_empty() {
        errors.push(ValidationError::new(
            descriptor.clone(),
            "Sheet name is required",
        ));
    }

    if sanitized.cell_id.is_empty() {
        errors.push(ValidationError::new(descriptor.clone(), "Cell is required"));
    } else if !EXCEL_CELL_REGEX.is_match(&sanitized.cell_id) {
        errors.push(ValidationError::new(
            descriptor.clone(),
            format!(
                "Cell '{}' is not a valid Excel cell reference (e.g., 'A1')",
                sanitized.cell_id
            ),
        ));
    }

    if sanitized.label.is_empty() {
        errors.push(ValidationError::new(id, "Label is required"));
    }

    if !sanitized.sheet_name.is_empty() && !sanitized.cell_id.is_empty() {
        let location_key = format!(
            "{}::{}",
            sanitized.sheet_name.to_lowercase(),
            sanitized.cell_id
        );
        if seen_locations.contains(&location_key) {
            errors.push(ValidationError::new(
                descriptor,
                format!(
                    "Cell location '{}' - '{}' already exists",
                    sanitized.sheet_name, sanitized.cell_id
                ),
            ));
        } else {
            seen_locations.insert(location_key);
        }
    }
}

fn ensure_constraint_integrity(mapping: &InputMapping, errors: &mut Vec<ValidationError>) {
    let Some(constraints) = &mapping.constraints else {
        return;
    };
    let field = format!("{} constraint", mapping.label);

    match constraints {
        Constraint::Discrete { values } => {
            let has_value = values.iter().any(|value| !value.trim().is_empty());
            if !has_value {
                errors.push(ValidationError::new(
                    field,
                    "Discrete constraint must have at least one value",
                ));
            }
        }
        Constraint::Range { min, max } => {
            let range_capable = mapping
                .data_type
                .is_some_and(|data_type| data_type.is_range_capable());
            if !range_capable {
                errors.push(ValidationError::new(
                    field,
                    "Range constraints are only allowed for numeric or date inputs",
                ));
                return;
            }

            let (Some(min), Some(max)) = (min, max) else {
                errors.push(ValidationError::new(
                    field,
                    "Range constraint requires both minimum and maximum values",
                ));
                return;
            };

            if min > max {
                errors.push(ValidationError::new(
                    field,
                    format!("Constraint range min ({min}) must be ≤ max ({max})"),
                ));
            }
        }
    }
}

fn validate_inputs(
    inputs: &[InputMapping],
    errors: &mut Vec<ValidationError>,
    seen_locations: &mut BTreeSet<String>,
) {
    for input in inputs {
        validate_common_fields(
            &input.id,
            &input.sheet_name,
            &input.cell_id,
            &input.label,
            errors,
            seen_locations,
        );

        if input.data_type.is_none() {
            let field = if input.label.is_empty() {
                input.id.clone()
            } else {
                input.label.clone()
            };
            let name = if input.label.is_empty() {
                input.cell_id.as_str()
            } else {
                input.label.as_str()
            };
            errors.push(ValidationError::new(
                field,
                format!("Input '{name}' is missing a data type"),
            ));
        }

        ensure_constraint_integrity(input, errors);
    }
}

fn validate_outputs(
    outputs: &[OutputMapping],
    errors: &mut Vec<ValidationError>,
    seen_locations: &mut BTreeSet<String>,
) {
    for output in outputs {
        validate_common_fields(
            &output.id,
            &output.sheet_name,
            &output.cell_id,
            &output.label,
            errors,
            seen_locations,
        );
    }
}

/// Validates a whole draft, accumulating every finding.
///
/// Inputs are checked first, then outputs, each in array order. Duplicate
/// cell locations are detected across both lists with the sheet name
/// compared case-insensitively; the first occupant of a location is never
/// flagged, every later one is.
pub fn validate_configuration(configuration: &DraftConfiguration) -> ValidationResult {
    let mut errors = Vec::new();

    if configuration.inputs.is_empty() {
        errors.push(ValidationError::document(
            "Configuration must have at least one input mapping",
        ));
    }

    if configuration.outputs.is_empty() {
        errors.push(ValidationError::document(
            "Configuration must have at least one output mapping",
        ));
    }

    let mut seen_locations = BTreeSet::new();

    validate_inputs(&configuration.inputs, &mut errors, &mut seen_locations);
    validate_outputs(&configuration.outputs, &mut errors, &mut seen_locations);

    ValidationResult::from_errors(errors)
}
