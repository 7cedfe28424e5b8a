//! Accumulation of registered rules and their weighted reduction to a crisp value.

use indexmap::IndexMap;

use crate::ids::RuleId;
use crate::interp::functions::mean;
use crate::quantifier::Quantifier;
use crate::report::RuleReport;
use crate::set::FuzzySet;
use crate::veracity::FuzzyVeracity;

/// A rule waiting to be defuzzified: "the value IS `set` (quantified) with this veracity".
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRule {
    pub id: RuleId,
    pub quantifier: Quantifier,
    pub veracity: FuzzyVeracity,
}

/// Every rule that targets one set, in registration order.
#[derive(Clone, Debug)]
pub struct RuleSlot {
    pub set: FuzzySet,
    pub rules: Vec<PendingRule>,
}

/// Weighted running sum, finalized into an average.
#[derive(Clone, Copy, Debug, Default)]
struct WeightedSum {
    sum: f64,
    w: f64,
}

impl WeightedSum {
    #[inline]
    fn add(&mut self, value: f64, w: f64) {
        self.sum += value * w;
        self.w += w;
    }

    #[inline]
    fn finalize(self) -> Option<f64> {
        (self.w != 0.0).then(|| self.sum / self.w)
    }
}

/// Result of reducing all pending rules.
#[derive(Clone, Debug, Default)]
pub struct Defuzzified {
    /// Weighted average of every rule's contribution; `None` when no rule
    /// carried any weight.
    pub crisp: Option<f64>,
    /// Per-rule trace, sorted by rule number. Empty unless requested.
    pub reports: Vec<RuleReport>,
}

/// Rules grouped by target set name. Sets sharing a name share a slot; the
/// first registered set defines the membership function for the slot.
#[derive(Clone, Debug, Default)]
pub struct RuleAccumulator {
    slots: IndexMap<String, RuleSlot>,
}

impl RuleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` against `set`. Returns true when it joined an existing slot.
    pub fn push(&mut self, set: &FuzzySet, rule: PendingRule) -> bool {
        if let Some(slot) = self.slots.get_mut(set.name()) {
            slot.rules.push(rule);
            return true;
        }
        self.slots.insert(
            set.name().to_string(),
            RuleSlot {
                set: set.clone(),
                rules: vec![rule],
            },
        );
        false
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn rule_count(&self) -> usize {
        self.slots.values().map(|slot| slot.rules.len()).sum()
    }

    pub fn slots(&self) -> impl Iterator<Item = &RuleSlot> {
        self.slots.values()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Defuzzify every pending rule: each rule contributes the mean of its
    /// set's crisp candidates, weighted by its veracity.
    pub fn defuzzify(&self, with_reports: bool) -> Defuzzified {
        let mut acc = WeightedSum::default();
        let mut reports = Vec::new();

        for slot in self.slots.values() {
            for rule in &slot.rules {
                let values = slot.set.crispify(&rule.quantifier, Some(rule.veracity));
                let Some(value) = mean(&values) else {
                    log::trace!(
                        "rule {} on '{}' has no crisp candidate; skipped",
                        rule.id,
                        slot.set.name()
                    );
                    continue;
                };
                let weight = rule.veracity.value();
                acc.add(value, weight);
                log::trace!(
                    "rule {} on '{}' ({}): {value} x {weight}",
                    rule.id,
                    slot.set.name(),
                    rule.quantifier
                );

                if with_reports {
                    reports.push(RuleReport {
                        rule: rule.id,
                        set_name: slot.set.name().to_string(),
                        quantifier_name: rule.quantifier.name().to_string(),
                        contributing_values: values,
                        value,
                        weight,
                    });
                }
            }
        }

        reports.sort_by_key(|r| r.rule);
        Defuzzified {
            crisp: acc.finalize(),
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: u32, veracity: f64) -> PendingRule {
        PendingRule {
            id: RuleId(id),
            quantifier: Quantifier::MODERATELY,
            veracity: FuzzyVeracity::new(veracity),
        }
    }

    #[test]
    fn same_name_shares_a_slot() {
        let mut acc = RuleAccumulator::new();
        let a = FuzzySet::new("warm", 0.0, 10.0);
        let b = FuzzySet::new("warm", 5.0, 50.0);
        assert!(!acc.push(&a, rule(1, 1.0)));
        assert!(acc.push(&b, rule(2, 1.0)));
        assert_eq!(acc.slot_count(), 1);
        assert_eq!(acc.rule_count(), 2);
        // first registration wins
        let slot = acc.slots().next().expect("slot");
        assert_eq!(slot.set.max(), 20.0);
    }

    #[test]
    fn zero_weight_has_no_average() {
        let mut acc = RuleAccumulator::new();
        acc.push(&FuzzySet::new("warm", 0.0, 10.0), rule(1, 0.0));
        assert_eq!(acc.defuzzify(false).crisp, None);
    }

    #[test]
    fn reports_sorted_by_rule_number() {
        let mut acc = RuleAccumulator::new();
        let warm = FuzzySet::new("warm", 0.0, 10.0);
        let cold = FuzzySet::new("cold", 10.0, 0.0);
        acc.push(&warm, rule(1, 1.0));
        acc.push(&cold, rule(2, 1.0));
        acc.push(&warm, rule(3, 1.0));
        let out = acc.defuzzify(true);
        let order: Vec<u32> = out.reports.iter().map(|r| r.rule.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert!(acc.defuzzify(false).reports.is_empty());
    }
}
