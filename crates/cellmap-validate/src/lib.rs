//! Configuration validation.
//!
//! Three layers of checking around the configuration model:
//!
//! - **draft**: full multi-error validation of an editable draft
//! - **import**: defensive validation of untrusted imported JSON
//! - **values**: checks of user-entered values against a single mapping

pub mod draft;
pub mod import;
pub mod values;

pub use draft::{EXCEL_CELL_REGEX, ValidationResult, validate_configuration};
pub use import::{ImportValidationResult, SUPPORTED_SCHEMA_VERSIONS, validate_imported_json};
pub use values::{
    FieldValue, FieldValueError, check_field_value, constraint_summary, normalize_field_value,
};
