//! Mamdani-style fuzzy inference: fuzzify crisp measurements against
//! sampled membership curves, activate a rule base with max-min
//! implication, aggregate the activations, and defuzzify the result back
//! into a crisp value via the centroid or bisector-of-area method.
//!
//! Parsing knowledge bases, building curves from analytic shapes, and
//! plotting all live outside this crate; it consumes pre-sampled ranges
//! and curves and hands results back through [`Outputs`].
//!
//! ```rust,ignore
//! use fuzzy_mamdani::{
//!     DefuzzMethod, DomainRange, FuzzyVariable, MamdaniInference, Measurements,
//!     Proposition, Rule, Rules, Variables,
//! };
//!
//! let mut vars = Variables::new();
//! let service = vars.add(FuzzyVariable::from_points(
//!     "service",
//!     DomainRange::sampled(0., 10., 5.)?,
//!     [("poor", [(0., 1.), (5., 0.)].as_slice())],
//! )?)?;
//! let tip = vars.add(FuzzyVariable::from_points(
//!     "tip",
//!     DomainRange::sampled(0., 20., 5.)?,
//!     [("low", [(0., 0.), (5., 1.), (10., 0.)].as_slice())],
//! )?)?;
//!
//! let mut rules = Rules::new();
//! rules.add(Rule::simple(
//!     Proposition::new(service, "poor"),
//!     Proposition::new(tip, "low"),
//! ));
//!
//! let mut measurements = Measurements::new();
//! measurements.add(service, 2.5);
//!
//! let model = MamdaniInference::new(DefuzzMethod::Centroid);
//! let outputs = model.eval(&vars, &rules, &measurements)?;
//!
//! println!("crisp tip: {}", outputs.value());
//! ```

mod activation;
mod aggregate;
mod classify;
mod defuzz;
mod error;
mod fuzzify;
mod inference;
mod inputs;
mod linspace;
mod math;
mod outputs;
mod rules;
mod variable;

pub use activation::{activate, Activations};
pub use aggregate::aggregate;
pub use classify::{classify, Classification, ClassifiedVariable};
pub use defuzz::DefuzzMethod;
pub use error::FuzzyError;
pub use fuzzify::{fuzzify, FuzzifiedDegrees};
pub use inference::MamdaniInference;
pub use inputs::Measurements;
pub use outputs::Outputs;
pub use rules::{Connector, Proposition, Rule, Rules};
pub use variable::{DomainRange, FuzzyVariable, Role, VariableKey, Variables};
