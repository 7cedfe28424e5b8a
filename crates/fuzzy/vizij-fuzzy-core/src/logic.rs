//! Rule-writing facade.
//!
//! `FuzzyLogic` builds values, veracities and sets from a shared [`Config`],
//! and turns a condition into a [`Rule`] that can be applied to one or more
//! values:
//!
//! ```
//! use vizij_fuzzy_core::{FuzzyLogic, Quantifier};
//!
//! let logic = FuzzyLogic::default();
//! let fast = logic.new_set("fast", 0.0, 10.0);
//! let far = logic.new_set("far", 0.0, 100.0);
//! let speed = logic.new_value(7.5);
//! let mut distance = logic.new_value(0.0);
//!
//! logic
//!     .when(speed.is(&fast, &Quantifier::MODERATELY))
//!     .then(&mut distance, &far, &Quantifier::VERY);
//! assert_eq!(distance.rule_count(), 1);
//! ```

use crate::config::Config;
use crate::error::FuzzyError;
use crate::quantifier::Quantifier;
use crate::set::FuzzySet;
use crate::value::FuzzyValue;
use crate::veracity::FuzzyVeracity;

#[derive(Clone, Debug, Default)]
pub struct FuzzyLogic {
    config: Config,
}

impl FuzzyLogic {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn new_value(&self, val: f64) -> FuzzyValue {
        FuzzyValue::with_config(val, &self.config)
    }

    pub fn new_veracity(&self, veracity: f64) -> FuzzyVeracity {
        FuzzyVeracity::new(veracity)
    }

    /// A set between `value_not` and `value_is`, using the configured shape
    /// on both shoulders.
    pub fn new_set(&self, name: impl Into<String>, value_not: f64, value_is: f64) -> FuzzySet {
        FuzzySet::new(name, value_not, value_is).with_shape(self.config.default_shape)
    }

    pub fn quantifier(&self, name: &str) -> Result<Quantifier, FuzzyError> {
        name.parse()
    }

    /// IF: capture `condition` as the veracity of the consequences that follow.
    pub fn when(&self, condition: FuzzyVeracity) -> Rule {
        Rule {
            veracity: condition,
        }
    }
}

/// A fired condition, ready to apply consequences with [`Rule::then`].
///
/// Rules are plain values: independent chains never share state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rule {
    veracity: FuzzyVeracity,
}

impl Rule {
    pub fn new(condition: FuzzyVeracity) -> Self {
        Self {
            veracity: condition,
        }
    }

    pub fn veracity(&self) -> FuzzyVeracity {
        self.veracity
    }

    /// THEN: `value` IS `set` (quantified) with this rule's veracity.
    pub fn then(self, value: &mut FuzzyValue, set: &FuzzySet, quantifier: &Quantifier) -> Rule {
        value.set(set, quantifier, self.veracity);
        self
    }
}
