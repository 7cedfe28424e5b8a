//! Numeric curves and easing helpers.
//!
//! `functions` holds the logistic/gaussian curves (and their inverses) that
//! shape fuzzy set shoulders; `easing` holds the animation interpolators
//! built on the same curves.

pub mod easing;
pub mod functions;

pub use easing::{bezier_interpolation, gaussian_interpolation, linear_remap};
pub use functions::{gaussian, inverse_gaussian, inverse_logistic, logistic, mean};
