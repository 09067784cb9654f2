//! Criterion direction value object (maximize or minimize).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether larger or smaller raw values are preferred on a criterion.
///
/// Serialized as `"max"` / `"min"`. The integer convention `1` / `-1` is
/// accepted through [`CriterionDirection::try_from_i8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionDirection {
    #[serde(rename = "max", alias = "maximize", alias = "MAXIMIZE")]
    Maximize,
    #[serde(rename = "min", alias = "minimize", alias = "MINIMIZE")]
    Minimize,
}

impl CriterionDirection {
    /// Creates a direction from the `1` (maximize) / `-1` (minimize) convention.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(CriterionDirection::Maximize),
            -1 => Ok(CriterionDirection::Minimize),
            _ => Err(ValidationError::out_of_range(
                "direction",
                -1,
                1,
                value as i32,
            )),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionDirection::Maximize => "maximized",
            CriterionDirection::Minimize => "minimized",
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CriterionDirection::Maximize => "max",
            CriterionDirection::Minimize => "min",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CriterionDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximize" | "1" => Ok(CriterionDirection::Maximize),
            "min" | "minimize" | "-1" => Ok(CriterionDirection::Minimize),
            other => Err(ValidationError::invalid_format(
                "direction",
                format!("expected 'max' or 'min', got '{}'", other),
            )),
        }
    }
}
