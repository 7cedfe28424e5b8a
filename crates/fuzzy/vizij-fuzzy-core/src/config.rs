//! Core configuration for vizij-fuzzy-core.

use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;
use crate::shape::Shape;

/// Configuration shared by values and sets built through the `FuzzyLogic` facade.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record a rule report every time a value is defuzzified.
    pub trace_rules: bool,

    /// Decimals kept when rendering report lines.
    pub report_decimals: u32,

    /// Shoulder shape used by `FuzzyLogic::new_set`.
    pub default_shape: Shape,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_rules: false,
            report_decimals: 3,
            default_shape: Shape::Linear,
        }
    }
}

impl Config {
    /// Parse a config from JSON. Missing fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self, FuzzyError> {
        Ok(serde_json::from_str(text)?)
    }
}
