//! Fuzzy values: a crisp number plus the rules that want to change it.
//!
//! Rules are registered with [`FuzzyValue::set`] ("this value IS that set,
//! with this veracity") and reduced with [`FuzzyValue::crispify`] into the
//! veracity-weighted average of each rule's crisp candidates.

use crate::accumulate::{PendingRule, RuleAccumulator};
use crate::config::Config;
use crate::ids::{RuleId, RuleIdAllocator};
use crate::quantifier::Quantifier;
use crate::report::{RuleReport, DEFAULT_REPORT_DECIMALS};
use crate::set::FuzzySet;
use crate::veracity::FuzzyVeracity;

#[derive(Clone, Debug)]
pub struct FuzzyValue {
    val: f64,
    rules: RuleAccumulator,
    ids: RuleIdAllocator,
    report: Vec<RuleReport>,
    trace: bool,
    report_decimals: u32,
}

impl FuzzyValue {
    pub fn new(val: f64) -> Self {
        Self {
            val,
            rules: RuleAccumulator::new(),
            ids: RuleIdAllocator::new(),
            report: Vec::new(),
            trace: false,
            report_decimals: DEFAULT_REPORT_DECIMALS,
        }
    }

    pub fn with_config(val: f64, config: &Config) -> Self {
        let mut value = Self::new(val);
        value.trace = config.trace_rules;
        value.report_decimals = config.report_decimals;
        value
    }

    /// Enable or disable the rule report for subsequent defuzzifications.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// The committed crisp value.
    pub fn value(&self) -> f64 {
        self.val
    }

    /// How much this value (including pending rules) belongs to `set`.
    pub fn is(&self, set: &FuzzySet, quantifier: &Quantifier) -> FuzzyVeracity {
        set.contains_value(self, quantifier)
    }

    /// Negated membership of the committed value in `set`.
    pub fn is_not(&self, set: &FuzzySet, quantifier: &Quantifier) -> FuzzyVeracity {
        set.contains(self.val, quantifier).negate()
    }

    /// Register a rule: this value IS `set`, reshaped by `quantifier`, with
    /// `veracity` (fully true when omitted).
    pub fn set(
        &mut self,
        set: &FuzzySet,
        quantifier: &Quantifier,
        veracity: impl Into<Option<FuzzyVeracity>>,
    ) -> RuleId {
        let veracity = veracity.into().unwrap_or(FuzzyVeracity::TRUE);
        let id = self.ids.alloc();
        let merged = self.rules.push(
            set,
            PendingRule {
                id,
                quantifier: quantifier.clone(),
                veracity,
            },
        );
        log::debug!(
            "rule {id}: IS '{}' ({quantifier}) with veracity {veracity}{}",
            set.name(),
            if merged { " [merged]" } else { "" }
        );
        id
    }

    /// Number of distinct sets with pending rules.
    pub fn slot_count(&self) -> usize {
        self.rules.slot_count()
    }

    /// Number of pending rules.
    pub fn rule_count(&self) -> usize {
        self.rules.rule_count()
    }

    /// Crisp result of the pending rules without committing anything.
    pub fn peek(&self) -> f64 {
        if self.rules.is_empty() {
            return self.val;
        }
        self.rules.defuzzify(false).crisp.unwrap_or(self.val)
    }

    /// Reduce every pending rule to a single crisp number.
    ///
    /// With `clear_sets`, the result becomes the committed value and the
    /// rules are dropped, so calling again without new rules returns the
    /// same number. When no rule carries any weight the committed value is
    /// kept.
    pub fn crispify(&mut self, clear_sets: bool) -> f64 {
        if self.rules.is_empty() {
            return self.val;
        }

        let out = self.rules.defuzzify(self.trace);
        if self.trace {
            self.report = out.reports;
        }
        let crisp = match out.crisp {
            Some(crisp) => crisp,
            None => {
                log::debug!("no rule carried any weight; keeping {}", self.val);
                self.val
            }
        };
        log::debug!(
            "defuzzified {} rule(s) over {} set(s) -> {crisp}",
            self.rules.rule_count(),
            self.rules.slot_count()
        );

        if clear_sets {
            self.val = crisp;
            self.rules.clear();
        }
        crisp
    }

    pub fn defuzzify(&mut self) -> f64 {
        self.crispify(true)
    }

    pub fn to_number(&mut self) -> f64 {
        self.crispify(true)
    }

    pub fn to_float(&mut self) -> f64 {
        self.crispify(true)
    }

    /// Trace of the last traced defuzzification, sorted by rule number.
    pub fn report(&self) -> &[RuleReport] {
        &self.report
    }

    pub fn report_lines(&self) -> Vec<Vec<String>> {
        self.report
            .iter()
            .map(|entry| entry.lines(self.report_decimals))
            .collect()
    }
}

impl Default for FuzzyValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for FuzzyValue {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}
