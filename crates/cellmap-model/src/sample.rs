//! Built-in example configuration.

use crate::configuration::{ConfigurationMetadata, DraftConfiguration};
use crate::constraint::Constraint;
use crate::datatype::DataType;
use crate::ids::IdFactory;
use crate::mapping::{InputMapping, OutputMapping};

/// Fixed creation timestamp of the sample. Callers that want "now" restamp
/// the metadata themselves; keeping the model side constant keeps sample
/// output reproducible.
pub const SAMPLE_CREATED_AT: &str = "2024-01-01T00:00:00.000Z";

/// The loan-calculator walkthrough configuration: three constrained inputs
/// and two derived outputs on a single sheet.
pub fn sample_configuration(ids: &dyn IdFactory) -> DraftConfiguration {
    DraftConfiguration {
        inputs: vec![
            InputMapping {
                id: ids.create_id("input"),
                sheet_name: "Loan Calculator".to_string(),
                cell_id: "B2".to_string(),
                label: "Loan Amount".to_string(),
                data_type: Some(DataType::Currency),
                constraints: Some(Constraint::range(Some(1000.0), Some(1_000_000.0))),
            },
            InputMapping {
                id: ids.create_id("input"),
                sheet_name: "Loan Calculator".to_string(),
                cell_id: "B3".to_string(),
                label: "Loan Term (years)".to_string(),
                data_type: Some(DataType::Number),
                constraints: Some(Constraint::discrete(["15", "20", "30"])),
            },
            InputMapping {
                id: ids.create_id("input"),
                sheet_name: "Loan Calculator".to_string(),
                cell_id: "B4".to_string(),
                label: "Annual Interest Rate".to_string(),
                data_type: Some(DataType::Percentage),
                constraints: Some(Constraint::range(Some(0.0), Some(20.0))),
            },
        ],
        outputs: vec![
            OutputMapping {
                id: ids.create_id("output"),
                sheet_name: "Loan Calculator".to_string(),
                cell_id: "B6".to_string(),
                label: "Monthly Payment".to_string(),
            },
            OutputMapping {
                id: ids.create_id("output"),
                sheet_name: "Loan Calculator".to_string(),
                cell_id: "B7".to_string(),
                label: "Total Interest Paid".to_string(),
            },
        ],
        metadata: ConfigurationMetadata {
            created_at: SAMPLE_CREATED_AT.to_string(),
            version: "v1".to_string(),
            updated_at: None,
            schema_version: None,
            source: None,
        },
    }
}
