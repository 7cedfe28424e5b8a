//! Rule trace produced while defuzzifying a `FuzzyValue`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::RuleId;

/// Default rounding applied to report lines.
pub const DEFAULT_REPORT_DECIMALS: u32 = 3;

/// One fired rule and what it contributed to the crisp result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: RuleId,
    pub set_name: String,
    pub quantifier_name: String,
    /// Crisp candidates returned by the set for this rule.
    pub contributing_values: Vec<f64>,
    /// Mean of `contributing_values`.
    pub value: f64,
    pub weight: f64,
}

impl RuleReport {
    /// Human-readable lines, numbers rounded to `decimals`.
    pub fn lines(&self, decimals: u32) -> Vec<String> {
        let values: Vec<String> = self
            .contributing_values
            .iter()
            .map(|v| round_to(*v, decimals).to_string())
            .collect();
        vec![
            format!("Rule {}: Set {} ({})", self.rule, self.set_name, self.quantifier_name),
            format!(
                "Gives val: {} from these values: [ {} ]",
                round_to(self.value, decimals),
                values.join(", ")
            ),
            format!("With a veracity of: {}", round_to(self.weight, decimals)),
        ]
    }
}

impl fmt::Display for RuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines(DEFAULT_REPORT_DECIMALS).join("\n"))
    }
}

/// Past this many decimals `f64` has nothing left to round.
const MAX_REPORT_DECIMALS: u32 = 15;

#[inline]
fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_REPORT_DECIMALS) as i32);
    let rounded = (x * scale).round() / scale;
    // Fold -0 into 0 so tiny negatives print as "0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleReport {
        RuleReport {
            rule: RuleId(2),
            set_name: "warm".into(),
            quantifier_name: "very".into(),
            contributing_values: vec![7.07106, 12.92893],
            value: 10.0,
            weight: 0.33333,
        }
    }

    #[test]
    fn lines_are_rounded() {
        let lines = sample().lines(3);
        assert_eq!(lines[0], "Rule #2: Set warm (very)");
        assert_eq!(lines[1], "Gives val: 10 from these values: [ 7.071, 12.929 ]");
        assert_eq!(lines[2], "With a veracity of: 0.333");
    }

    #[test]
    fn tiny_negatives_render_as_zero() {
        let report = RuleReport {
            contributing_values: vec![-0.0001],
            value: -0.0001,
            ..sample()
        };
        assert_eq!(report.lines(3)[1], "Gives val: 0 from these values: [ 0 ]");
    }

    #[test]
    fn oversized_decimals_stay_finite() {
        let lines = sample().lines(400);
        assert!(!lines.iter().any(|line| line.contains("NaN") || line.contains("inf")));
        assert!(lines[1].starts_with("Gives val: 10 from these values: [ 7.071"));
        assert_eq!(lines[2], "With a veracity of: 0.33333");
    }

    #[test]
    fn display_joins_lines() {
        assert_eq!(sample().to_string().lines().count(), 3);
    }

    #[test]
    fn serializes_machine_readable_fields() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["rule"], 2);
        assert_eq!(json["set_name"], "warm");
        assert_eq!(json["contributing_values"].as_array().map(Vec::len), Some(2));
    }
}
