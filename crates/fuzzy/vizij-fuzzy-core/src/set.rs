//! Fuzzy sets: a plateau of full membership flanked by two shaped shoulders.
//!
//! Sets are described the way an animator thinks about them: a value the
//! property definitely is NOT, and a value it definitely IS. The domain is
//! laid out symmetrically around the IS value so that the NOT value sits on
//! a domain bound and the IS value at the centre:
//!
//! ```text
//!  membership
//!   1 |            ______
//!     |          /        \
//!   0 |________/            \________
//!        min   plateau_min  plateau_max   max
//! ```

use std::fmt;

use crate::quantifier::Quantifier;
use crate::shape::{Shape, Shoulder};
use crate::value::FuzzyValue;
use crate::veracity::FuzzyVeracity;

/// Target veracity used by [`FuzzySet::get_values_default`].
pub const DEFAULT_TARGET_VERACITY: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet {
    name: String,
    min: f64,
    max: f64,
    plateau_min: f64,
    plateau_max: f64,
    shape_in: Shape,
    shape_out: Shape,
}

impl FuzzySet {
    /// Build a set from the value it is NOT (membership ~0) and the value it
    /// IS (membership 1). Both shoulders are linear and the plateau is the
    /// single IS point until configured otherwise.
    pub fn new(name: impl Into<String>, value_not: f64, value_is: f64) -> Self {
        let (min, max) = if value_not > value_is {
            (value_not - (value_not - value_is) * 2.0, value_not)
        } else {
            (value_not, value_not + (value_is - value_not) * 2.0)
        };
        let mid = 0.5 * (min + max);
        Self {
            name: name.into(),
            min,
            max,
            plateau_min: mid,
            plateau_max: mid,
            shape_in: Shape::Linear,
            shape_out: Shape::Linear,
        }
    }

    /// Use `shape` for both shoulders.
    pub fn with_shape(self, shape: Shape) -> Self {
        self.with_shapes(shape, shape)
    }

    pub fn with_shapes(mut self, shape_in: Shape, shape_out: Shape) -> Self {
        self.shape_in = shape_in;
        self.shape_out = shape_out;
        self
    }

    /// Widen the plateau. A plateau outside `[min, max]` is kept as given
    /// (with a warning) and leaves the shoulders undefined.
    pub fn with_plateau(mut self, plateau_min: f64, plateau_max: f64) -> Self {
        if plateau_min < self.min || plateau_max > self.max || plateau_min > plateau_max {
            log::warn!(
                "fuzzy set '{}': plateau [{plateau_min}, {plateau_max}] does not fit domain [{}, {}]",
                self.name,
                self.min,
                self.max
            );
        }
        self.plateau_min = plateau_min;
        self.plateau_max = plateau_max;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn plateau_min(&self) -> f64 {
        self.plateau_min
    }

    pub fn plateau_max(&self) -> f64 {
        self.plateau_max
    }

    pub fn shape_in(&self) -> Shape {
        self.shape_in
    }

    pub fn shape_out(&self) -> Shape {
        self.shape_out
    }

    #[inline]
    fn left(&self) -> Shoulder {
        Shoulder::new(self.min, self.plateau_min)
    }

    #[inline]
    fn right(&self) -> Shoulder {
        Shoulder::new(self.max, self.plateau_max)
    }

    #[inline]
    fn plateau_mid(&self) -> f64 {
        0.5 * (self.plateau_min + self.plateau_max)
    }

    /// Membership degree of `value`, reshaped by `quantifier`.
    pub fn contains(&self, value: f64, quantifier: &Quantifier) -> FuzzyVeracity {
        let degree = if value >= self.plateau_min && value <= self.plateau_max {
            1.0
        } else if value < self.plateau_min {
            self.shape_in.membership(value, self.left())
        } else {
            self.shape_out.membership(value, self.right())
        };
        quantifier.apply(degree)
    }

    /// Membership degree of a fuzzy value's pending crisp result.
    pub fn contains_value(&self, value: &FuzzyValue, quantifier: &Quantifier) -> FuzzyVeracity {
        self.contains(value.peek(), quantifier)
    }

    /// Crisp values whose membership is `veracity`, ascending.
    ///
    /// One candidate per shoulder, plus the plateau bounds and centre once
    /// `veracity` reaches 1. A set with two constant shoulders has no
    /// informative inverse and yields its five characteristic points.
    pub fn get_values(&self, veracity: f64) -> Vec<f64> {
        let mid = self.plateau_mid();
        if self.shape_in == Shape::Constant && self.shape_out == Shape::Constant {
            return vec![self.min, self.plateau_min, mid, self.plateau_max, self.max];
        }

        let mut crisp = Vec::with_capacity(5);
        if veracity >= 1.0 {
            crisp.extend([self.plateau_min, mid, self.plateau_max]);
        }
        crisp.extend(self.shape_in.inverse(veracity, self.left()));
        crisp.extend(self.shape_out.inverse(veracity, self.right()));

        for x in crisp.iter_mut() {
            *x = x.clamp(self.min, self.max);
        }
        crisp.sort_by(f64::total_cmp);
        crisp
    }

    pub fn get_values_default(&self) -> Vec<f64> {
        self.get_values(DEFAULT_TARGET_VERACITY)
    }

    /// Defuzzify a single rule: undo `quantifier` on `veracity` (its neutral
    /// point when absent) and return the matching crisp candidates.
    pub fn crispify(&self, quantifier: &Quantifier, veracity: Option<FuzzyVeracity>) -> Vec<f64> {
        let raw = veracity.map_or_else(|| quantifier.neutral(), FuzzyVeracity::value);
        let target = quantifier.apply_inverse(raw);
        self.get_values(target.value())
    }
}

impl fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
