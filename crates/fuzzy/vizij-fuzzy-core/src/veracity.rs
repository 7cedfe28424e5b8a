//! Truth degrees and their combinators.
//!
//! `FuzzyVeracity` is an immutable degree in `[0, 1]`. Construction clamps
//! (and maps NaN to 0), and every combinator below is closed over `[0, 1]`,
//! so chains of operations never leave the unit interval.
//!
//! The named aliases (`is`, `with`, `none`, ...) read better inside rules;
//! each delegates to its canonical operation.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct FuzzyVeracity {
    veracity: f64,
}

impl FuzzyVeracity {
    pub const FALSE: FuzzyVeracity = FuzzyVeracity { veracity: 0.0 };
    pub const TRUE: FuzzyVeracity = FuzzyVeracity { veracity: 1.0 };

    pub fn new(veracity: f64) -> Self {
        let veracity = if veracity.is_nan() {
            0.0
        } else {
            veracity.clamp(0.0, 1.0)
        };
        Self { veracity }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.veracity
    }

    pub fn negate(self) -> Self {
        Self::new(1.0 - self.veracity)
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(self.veracity.min(other.veracity))
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(self.veracity.max(other.veracity))
    }

    pub fn xor(self, other: Self) -> Self {
        let (x, y) = (self.veracity, other.veracity);
        Self::new(x + y - 2.0 * x.min(y))
    }

    pub fn is_not(self, other: Self) -> Self {
        self.xor(other)
    }

    pub fn different(self, other: Self) -> Self {
        self.xor(other)
    }

    /// Fuzzy equivalence.
    pub fn nxr(self, other: Self) -> Self {
        let (x, y) = (self.veracity, other.veracity);
        Self::new(1.0 - x - y + 2.0 * x.min(y))
    }

    pub fn is(self, other: Self) -> Self {
        self.nxr(other)
    }

    pub fn equals(self, other: Self) -> Self {
        self.nxr(other)
    }

    pub fn implies(self, other: Self) -> Self {
        let (x, y) = (self.veracity, other.veracity);
        Self::new(1.0 - x.min(1.0 - y))
    }

    pub fn with(self, other: Self) -> Self {
        self.implies(other)
    }

    pub fn has(self, other: Self) -> Self {
        self.implies(other)
    }

    pub fn does_not_imply(self, other: Self) -> Self {
        let (x, y) = (self.veracity, other.veracity);
        Self::new(x.min(1.0 - y))
    }

    pub fn without(self, other: Self) -> Self {
        self.does_not_imply(other)
    }

    pub fn does_not_have(self, other: Self) -> Self {
        self.does_not_imply(other)
    }

    pub fn nand(self, other: Self) -> Self {
        Self::new(1.0 - self.veracity.min(other.veracity))
    }

    pub fn not_both(self, other: Self) -> Self {
        self.nand(other)
    }

    pub fn nor(self, other: Self) -> Self {
        Self::new(1.0 - self.veracity.max(other.veracity))
    }

    pub fn none(self, other: Self) -> Self {
        self.nor(other)
    }

    /// Linear blend: `weight = 0` keeps `self`, `weight = 1` gives `other`.
    pub fn weighted(self, other: Self, weight: f64) -> Self {
        Self::new((1.0 - weight) * self.veracity + weight * other.veracity)
    }
}

impl From<f64> for FuzzyVeracity {
    fn from(veracity: f64) -> Self {
        Self::new(veracity)
    }
}

impl From<bool> for FuzzyVeracity {
    fn from(b: bool) -> Self {
        if b {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}

impl fmt::Display for FuzzyVeracity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.veracity)
    }
}

impl Not for FuzzyVeracity {
    type Output = FuzzyVeracity;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl BitAnd for FuzzyVeracity {
    type Output = FuzzyVeracity;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for FuzzyVeracity {
    type Output = FuzzyVeracity;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for FuzzyVeracity {
    type Output = FuzzyVeracity;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64) -> FuzzyVeracity {
        FuzzyVeracity::new(x)
    }

    #[test]
    fn construction_clamps() {
        assert_eq!(v(1.5).value(), 1.0);
        assert_eq!(v(-0.2).value(), 0.0);
        assert_eq!(v(f64::NAN).value(), 0.0);
    }

    #[test]
    fn xor_is_absolute_difference() {
        assert_relative_eq!(v(0.2).xor(v(0.7)).value(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(v(0.7).nxr(v(0.2)).value(), 0.5, epsilon = 1e-12);
        assert_eq!(v(0.4).xor(v(0.4)).value(), 0.0);
        assert_relative_eq!(v(0.4).nxr(v(0.4)).value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn implication_table() {
        assert_eq!(v(1.0).implies(v(0.0)).value(), 0.0);
        assert_eq!(v(0.0).implies(v(0.0)).value(), 1.0);
        assert_eq!(v(1.0).does_not_imply(v(0.0)).value(), 1.0);
        assert_relative_eq!(v(0.8).implies(v(0.3)).value(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn nand_nor() {
        assert_relative_eq!(v(0.3).nand(v(0.6)).value(), 0.7, epsilon = 1e-12);
        assert_relative_eq!(v(0.3).nor(v(0.6)).value(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn weighted_blends_linearly() {
        assert_relative_eq!(v(0.2).weighted(v(0.6), 0.25).value(), 0.3, epsilon = 1e-12);
        assert_eq!(v(0.2).weighted(v(0.6), 0.0).value(), 0.2);
        assert_eq!(v(0.2).weighted(v(0.6), 1.0).value(), 0.6);
    }

    #[test]
    fn operators_match_methods() {
        let (a, b) = (v(0.25), v(0.5));
        assert_eq!(!a, a.negate());
        assert_eq!(a & b, a.and(b));
        assert_eq!(a | b, a.or(b));
        assert_eq!(a ^ b, a.xor(b));
    }
}
