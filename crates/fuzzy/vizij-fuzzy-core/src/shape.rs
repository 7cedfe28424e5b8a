//! Shoulder shapes of a fuzzy set.
//!
//! A shoulder runs from a domain edge (membership ~0) to a plateau edge
//! (membership 1). The same evaluation serves both sides: a left shoulder
//! has `edge < inner`, a right shoulder `edge > inner`, and every formula
//! below is written against the signed width `inner - edge`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;
use crate::interp::functions::{gaussian, inverse_gaussian, inverse_logistic, logistic};

/// Logistic rate numerator: the sigmoid covers ~99% of its range across one shoulder.
const SIGMOID_SPAN: f64 = 6.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Full membership all the way out.
    Constant,
    /// Hard step halfway across the shoulder.
    Square,
    #[default]
    Linear,
    Sigmoid,
    /// Bell decaying from the plateau edge, with the shoulder width as FWHM.
    Gaussian,
    /// No shoulder at all: membership drops to 0 outside the plateau.
    Cutoff,
}

/// One side of a membership function, from `edge` (domain bound) to `inner`
/// (plateau bound).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shoulder {
    pub edge: f64,
    pub inner: f64,
}

impl Shoulder {
    pub fn new(edge: f64, inner: f64) -> Self {
        Self { edge, inner }
    }

    /// Signed width: positive for a rising (left) shoulder.
    #[inline]
    pub fn width(&self) -> f64 {
        self.inner - self.edge
    }

    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.edge + self.inner)
    }

    #[inline]
    fn contain(&self, x: f64) -> f64 {
        x.clamp(self.edge.min(self.inner), self.edge.max(self.inner))
    }
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Constant,
        Shape::Square,
        Shape::Linear,
        Shape::Sigmoid,
        Shape::Gaussian,
        Shape::Cutoff,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Constant => "constant",
            Shape::Square => "square",
            Shape::Linear => "linear",
            Shape::Sigmoid => "sigmoid",
            Shape::Gaussian => "gaussian",
            Shape::Cutoff => "cutoff",
        }
    }

    /// Parse a shape name, falling back to [`Shape::Cutoff`] for unknown names.
    pub fn from_name_lenient(name: &str) -> Shape {
        match name.parse() {
            Ok(shape) => shape,
            Err(_) => {
                log::warn!("unknown membership shape '{name}', treating it as cutoff");
                Shape::Cutoff
            }
        }
    }

    /// Raw membership degree (before any quantifier) of `value` on `shoulder`.
    pub fn membership(self, value: f64, shoulder: Shoulder) -> f64 {
        let width = shoulder.width();
        match self {
            Shape::Constant => 1.0,
            Shape::Cutoff => 0.0,
            // Degenerate shoulder: anything outside the plateau is past the edge.
            _ if width == 0.0 => 0.0,
            Shape::Square => {
                if (value - shoulder.mid()) * width.signum() >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Shape::Linear => ((value - shoulder.edge) / width).clamp(0.0, 1.0),
            Shape::Sigmoid => logistic(value, shoulder.mid(), 0.0, 1.0, SIGMOID_SPAN / width),
            Shape::Gaussian => gaussian(value, 0.0, 1.0, shoulder.inner, width.abs()),
        }
    }

    /// Crisp value on `shoulder` whose membership is `degree`, if the shape
    /// has one. Results never leave the shoulder.
    pub fn inverse(self, degree: f64, shoulder: Shoulder) -> Option<f64> {
        let width = shoulder.width();
        match self {
            Shape::Cutoff => None,
            Shape::Constant => (degree >= 1.0).then_some(shoulder.edge),
            _ if width == 0.0 => Some(shoulder.edge),
            Shape::Square => Some(if degree >= 0.5 {
                shoulder.inner
            } else {
                shoulder.edge
            }),
            Shape::Linear => Some(shoulder.edge + width * degree.clamp(0.0, 1.0)),
            Shape::Sigmoid => Some(if degree <= 0.0 {
                shoulder.edge
            } else if degree >= 1.0 {
                shoulder.inner
            } else {
                let x = inverse_logistic(degree, shoulder.mid(), 0.0, 1.0, SIGMOID_SPAN / width);
                shoulder.contain(x)
            }),
            Shape::Gaussian => {
                let [above, below] = inverse_gaussian(degree, 0.0, 1.0, shoulder.inner, width.abs());
                let x = if width > 0.0 { below } else { above };
                Some(shoulder.contain(x))
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FuzzyError::UnknownShape(s.to_string()))
    }
}
