//! Value-level checks for user-entered input values.
//!
//! The calculation side binds a form field to each input mapping; these
//! helpers turn a raw field string into a typed value and hold it against
//! the mapping's constraint. They are deliberately forgiving about
//! formatting (values are trimmed, discrete matching ignores case) and
//! strict about meaning.

use thiserror::Error;

use cellmap_model::{Constraint, InputMapping};

/// A field value after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn comparable(&self) -> String {
        match self {
            FieldValue::Number(number) => number.to_string().to_lowercase(),
            FieldValue::Text(text) => text.to_lowercase(),
        }
    }
}

/// Why a field value was rejected. Messages are surfaced verbatim next to
/// the form field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldValueError {
    #[error("Enter a numeric value.")]
    NumericRequired,
    #[error("Value must be a valid number.")]
    InvalidNumber,
    #[error("Select a value.")]
    SelectionRequired,
    #[error("Value must be one of: {allowed}.")]
    NotAllowed { allowed: String },
    #[error("Value must be greater than or equal to {min}.")]
    BelowMinimum { min: f64 },
    #[error("Value must be less than or equal to {max}.")]
    AboveMaximum { max: f64 },
}

/// Turns a raw form string into a typed value for `mapping`.
///
/// Numeric data types require a finite number; discrete-constrained
/// inputs require a non-empty selection; everything else trims to text.
pub fn normalize_field_value(
    mapping: &InputMapping,
    raw: &str,
) -> Result<FieldValue, FieldValueError> {
    let trimmed = raw.trim();

    if mapping.data_type.is_some_and(|data_type| data_type.is_numeric()) {
        if trimmed.is_empty() {
            return Err(FieldValueError::NumericRequired);
        }
        let parsed: f64 = trimmed
            .parse()
            .map_err(|_| FieldValueError::InvalidNumber)?;
        if !parsed.is_finite() {
            return Err(FieldValueError::InvalidNumber);
        }
        return Ok(FieldValue::Number(parsed));
    }

    if matches!(&mapping.constraints, Some(Constraint::Discrete { .. })) {
        if trimmed.is_empty() {
            return Err(FieldValueError::SelectionRequired);
        }
        return Ok(FieldValue::Text(trimmed.to_string()));
    }

    Ok(FieldValue::Text(trimmed.to_string()))
}

/// Holds a normalized value against the mapping's constraint.
///
/// Discrete membership compares stringified values case-insensitively, so
/// a numeric `15` satisfies the allowed value `"15"`. Range bounds apply
/// to numeric values only.
pub fn check_field_value(
    mapping: &InputMapping,
    value: &FieldValue,
) -> Result<(), FieldValueError> {
    let Some(constraints) = &mapping.constraints else {
        return Ok(());
    };

    match constraints {
        Constraint::Discrete { values } if !values.is_empty() => {
            let candidate = value.comparable();
            if values.iter().any(|entry| entry.to_lowercase() == candidate) {
                Ok(())
            } else {
                Err(FieldValueError::NotAllowed {
                    allowed: values.join(", "),
                })
            }
        }
        Constraint::Discrete { .. } => Ok(()),
        Constraint::Range { min, max } => {
            if let FieldValue::Number(number) = value {
                if let Some(min) = min {
                    if number < min {
                        return Err(FieldValueError::BelowMinimum { min: *min });
                    }
                }
                if let Some(max) = max {
                    if number > max {
                        return Err(FieldValueError::AboveMaximum { max: *max });
                    }
                }
            }
            Ok(())
        }
    }
}

/// One-line constraint description for input overview panels.
pub fn constraint_summary(constraints: Option<&Constraint>) -> String {
    match constraints {
        None => "No constraints configured".to_string(),
        Some(Constraint::Discrete { values }) if !values.is_empty() => {
            format!("Allowed: {}", values.join(", "))
        }
        Some(Constraint::Discrete { .. }) => "No constraints configured".to_string(),
        Some(Constraint::Range { min, max }) => {
            let mut parts = Vec::new();
            if let Some(min) = min {
                parts.push(format!("Min {min}"));
            }
            if let Some(max) = max {
                parts.push(format!("Max {max}"));
            }
            if parts.is_empty() {
                "No constraints configured".to_string()
            } else {
                parts.join(" · ")
            }
        }
    }
}
