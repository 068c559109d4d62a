use serde::{Deserialize, Serialize};

/// Constraint attached to an input mapping.
///
/// Discrete constraints keep their values in authoring order. Range bounds
/// are individually optional; both keys are always written on the wire,
/// `null` standing for an open bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Constraint {
    Discrete { values: Vec<String> },
    Range { min: Option<f64>, max: Option<f64> },
}

impl Constraint {
    pub fn discrete<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constraint::Discrete {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Constraint::Range { min, max }
    }
}
