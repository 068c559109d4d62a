use std::fmt;

use serde::{Deserialize, Serialize};

/// Data type of an input mapping's cell value.
///
/// Outputs carry no data type; they are read-only derived values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Number,
    /// Fallback type; legacy persisted mappings without a type migrate to it.
    #[default]
    Text,
    Percentage,
    Currency,
    Date,
}

impl DataType {
    /// All data types, in the order they are listed to users.
    pub const ALL: [DataType; 5] = [
        DataType::Number,
        DataType::Text,
        DataType::Percentage,
        DataType::Currency,
        DataType::Date,
    ];

    /// Parse a wire-form data type, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "number" => Some(DataType::Number),
            "text" => Some(DataType::Text),
            "percentage" => Some(DataType::Percentage),
            "currency" => Some(DataType::Currency),
            "date" => Some(DataType::Date),
            _ => None,
        }
    }

    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Number => "number",
            DataType::Text => "text",
            DataType::Percentage => "percentage",
            DataType::Currency => "currency",
            DataType::Date => "date",
        }
    }

    /// Whether a range constraint may be attached to an input of this type.
    pub fn is_range_capable(&self) -> bool {
        matches!(
            self,
            DataType::Number | DataType::Percentage | DataType::Currency | DataType::Date
        )
    }

    /// Whether values of this type are entered and compared numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Number | DataType::Percentage | DataType::Currency
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
