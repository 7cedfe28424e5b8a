//! Linguistic quantifiers ("very", "slightly", ...).
//!
//! A quantifier reshapes a membership degree by raising it to a fixed
//! exponent; its inverse undoes that when turning a veracity back into a
//! membership level. The boolean quantifiers (`not`, `less`) ignore their
//! input entirely.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::FuzzyError;
use crate::veracity::FuzzyVeracity;

#[derive(Clone, Debug, PartialEq)]
pub struct Quantifier {
    name: Cow<'static, str>,
    exponent: f64,
    boolean: bool,
}

impl Quantifier {
    pub const SLIGHTLY: Quantifier = Quantifier::named("slightly", 1.0 / 3.0);
    pub const SOMEWHAT: Quantifier = Quantifier::named("somewhat", 0.5);
    pub const MODERATELY: Quantifier = Quantifier::named("moderately", 1.0);
    pub const VERY: Quantifier = Quantifier::named("very", 2.0);
    pub const EXTREMELY: Quantifier = Quantifier::named("extremely", 3.0);
    pub const NOT: Quantifier = Quantifier::boolean_named("not");
    pub const LESS: Quantifier = Quantifier::boolean_named("less");

    /// Every built-in quantifier, in increasing strength.
    pub const ALL: [Quantifier; 7] = [
        Quantifier::NOT,
        Quantifier::LESS,
        Quantifier::SLIGHTLY,
        Quantifier::SOMEWHAT,
        Quantifier::MODERATELY,
        Quantifier::VERY,
        Quantifier::EXTREMELY,
    ];

    const fn named(name: &'static str, exponent: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            exponent,
            boolean: false,
        }
    }

    const fn boolean_named(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            exponent: 1.0,
            boolean: true,
        }
    }

    /// A power quantifier with a caller-chosen exponent.
    pub fn custom(name: impl Into<String>, exponent: f64) -> Result<Self, FuzzyError> {
        if !(exponent.is_finite() && exponent > 0.0) {
            return Err(FuzzyError::InvalidExponent(exponent));
        }
        Ok(Self {
            name: Cow::Owned(name.into()),
            exponent,
            boolean: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    /// Representative veracity used when a rule carries none: `0.5^(1/q)`,
    /// or 0 for boolean quantifiers.
    pub fn neutral(&self) -> f64 {
        if self.boolean {
            0.0
        } else {
            0.5f64.powf(1.0 / self.exponent)
        }
    }

    /// `x^q`. Boolean quantifiers always yield 0.
    pub fn apply(&self, x: f64) -> FuzzyVeracity {
        if self.boolean {
            return FuzzyVeracity::FALSE;
        }
        FuzzyVeracity::new(x.powf(self.exponent))
    }

    /// `x^(1/q)`. Boolean quantifiers always yield 1.
    pub fn apply_inverse(&self, x: f64) -> FuzzyVeracity {
        if self.boolean {
            return FuzzyVeracity::TRUE;
        }
        FuzzyVeracity::new(x.powf(1.0 / self.exponent))
    }
}

impl Default for Quantifier {
    fn default() -> Self {
        Quantifier::MODERATELY
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Quantifier {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Quantifier::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FuzzyError::UnknownQuantifier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_points() {
        assert_relative_eq!(Quantifier::MODERATELY.neutral(), 0.5);
        assert_relative_eq!(Quantifier::VERY.neutral(), 0.5f64.sqrt());
        assert_relative_eq!(Quantifier::SLIGHTLY.neutral(), 0.125, epsilon = 1e-12);
        assert_eq!(Quantifier::NOT.neutral(), 0.0);
    }

    #[test]
    fn boolean_quantifiers_ignore_input() {
        for x in [0.0, 0.3, 1.0] {
            assert_eq!(Quantifier::NOT.apply(x).value(), 0.0);
            assert_eq!(Quantifier::LESS.apply_inverse(x).value(), 1.0);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        let q: Quantifier = "Very".parse().expect("known quantifier");
        assert_eq!(q, Quantifier::VERY);
        assert!(matches!(
            "hugely".parse::<Quantifier>(),
            Err(FuzzyError::UnknownQuantifier(name)) if name == "hugely"
        ));
    }

    #[test]
    fn custom_rejects_bad_exponents() {
        assert!(Quantifier::custom("flat", 0.0).is_err());
        assert!(Quantifier::custom("wild", f64::NAN).is_err());
        let q = Quantifier::custom("cubed-root", 1.0 / 3.0).expect("valid exponent");
        assert_eq!(q.name(), "cubed-root");
        assert_eq!(q.to_string(), "cubed-root");
    }
}
