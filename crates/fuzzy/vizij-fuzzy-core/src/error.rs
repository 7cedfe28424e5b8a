//! Errors raised at the symbolic boundaries of the fuzzy engine.
//!
//! The numeric core never fails; these only surface when names or
//! configuration text are parsed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzyError {
    #[error("unknown quantifier '{0}'")]
    UnknownQuantifier(String),
    #[error("unknown membership shape '{0}'")]
    UnknownShape(String),
    #[error("quantifier exponent must be positive and finite, got {0}")]
    InvalidExponent(f64),
    #[error("fuzzy config json: {0}")]
    Config(#[from] serde_json::Error),
}
