//! Vizij Fuzzy Core (engine-agnostic)
//!
//! A small fuzzy-logic evaluator for per-frame animation expressions:
//! fuzzy sets with shaped shoulders, truth degrees with their combinators,
//! linguistic quantifiers, and fuzzy values that defuzzify weighted rules
//! into a crisp number.
//!
//! ```
//! use vizij_fuzzy_core::{FuzzyLogic, Quantifier};
//!
//! let logic = FuzzyLogic::default();
//! let cold = logic.new_set("cold", 20.0, 0.0);
//! let hot = logic.new_set("hot", 0.0, 20.0);
//!
//! let temperature = logic.new_value(4.0);
//! let mut heater = logic.new_value(0.0);
//! let heating = logic.new_set("heating", 0.0, 100.0);
//!
//! logic
//!     .when(temperature.is(&cold, &Quantifier::MODERATELY))
//!     .then(&mut heater, &heating, &Quantifier::VERY);
//! logic
//!     .when(temperature.is(&hot, &Quantifier::MODERATELY))
//!     .then(&mut heater, &heating, &Quantifier::NOT);
//!
//! let power = heater.defuzzify();
//! assert!(power > 0.0);
//! ```

pub mod accumulate;
pub mod config;
pub mod error;
pub mod ids;
pub mod interp;
pub mod logic;
pub mod quantifier;
pub mod report;
pub mod set;
pub mod shape;
pub mod value;
pub mod veracity;

// Re-exports for consumers
pub use config::Config;
pub use error::FuzzyError;
pub use ids::RuleId;
pub use logic::{FuzzyLogic, Rule};
pub use quantifier::Quantifier;
pub use report::RuleReport;
pub use set::FuzzySet;
pub use shape::Shape;
pub use value::FuzzyValue;
pub use veracity::FuzzyVeracity;
