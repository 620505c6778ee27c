use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::error::FuzzyError;
use crate::linspace::linspace;
use crate::math::interp;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Whether a variable is measured (a rule condition) or inferred (a rule
/// output). Derived from the measurement set, never declared up front.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Antecedent,
    Consequent,
}

/// The sampled universe of discourse of one variable: ascending, unique
/// sample points. A single point denotes a singleton fuzzy set.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainRange(Vec<f64>);

impl DomainRange {
    pub fn new(points: Vec<f64>) -> Result<Self, FuzzyError> {
        if points.is_empty() {
            return Err(FuzzyError::Configuration(
                "domain range has no sample points".into(),
            ));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyError::Configuration(
                "domain range contains a non-finite sample point".into(),
            ));
        }
        if !points.windows(2).all(|w| w[0] < w[1]) {
            return Err(FuzzyError::Configuration(
                "domain range sample points must be ascending and unique".into(),
            ));
        }

        Ok(Self(points))
    }

    /// Evenly sampled range over `min..=max`. The sample count follows the
    /// usual universe construction: `floor((max - min) / step) + 1`.
    pub fn sampled(min: f64, max: f64, step: f64) -> Result<Self, FuzzyError> {
        if step <= 0. {
            return Err(FuzzyError::Configuration(format!(
                "domain range step must be positive, got {step}"
            )));
        }
        if max < min {
            return Err(FuzzyError::Configuration(format!(
                "domain range bounds are reversed: {min} > {max}"
            )));
        }

        let num = ((max - min) / step).floor() as usize + 1;

        Self::new(linspace(min, max, num).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// A named fuzzy variable: its sampled range and one membership curve per
/// label, index-aligned with the range.
#[derive(Clone, Debug)]
pub struct FuzzyVariable {
    name: String,
    range: DomainRange,
    terms: HashMap<String, Vec<f64>>,
}

impl FuzzyVariable {
    /// Build a variable from pre-sampled membership curves, one per label.
    /// Every curve must match the range length and stay within [0, 1].
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        range: DomainRange,
        terms: impl IntoIterator<Item = (S, Vec<f64>)>,
    ) -> Result<Self, FuzzyError> {
        let name = name.into();
        let mut term_map = HashMap::new();

        for (label, curve) in terms {
            let label = label.into();

            if curve.len() != range.len() {
                return Err(FuzzyError::Configuration(format!(
                    "curve '{label}' of variable '{name}' has {} samples, range has {}",
                    curve.len(),
                    range.len()
                )));
            }
            if curve.iter().any(|y| !(0.0..=1.0).contains(y)) {
                return Err(FuzzyError::Configuration(format!(
                    "curve '{label}' of variable '{name}' has a degree outside [0, 1]"
                )));
            }

            term_map.insert(label, curve);
        }

        if term_map.is_empty() {
            return Err(FuzzyError::Configuration(format!(
                "variable '{name}' declares no membership curves"
            )));
        }

        Ok(Self {
            name,
            range,
            terms: term_map,
        })
    }

    /// Build a variable by sampling piecewise-linear `(x, membership)` term
    /// definitions onto the range. Coordinates must be sorted by x.
    pub fn from_points<'t, S: Into<String>>(
        name: impl Into<String>,
        range: DomainRange,
        terms: impl IntoIterator<Item = (S, &'t [(f64, f64)])>,
    ) -> Result<Self, FuzzyError> {
        let sampled = terms.into_iter().map(|(label, coords)| {
            let curve = interp(range.as_slice().iter().copied(), coords.iter().copied());

            (label, curve)
        });
        // collect first: `sampled` borrows `range`
        let sampled: Vec<_> = sampled.collect();

        Self::new(name, range, sampled)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> &DomainRange {
        &self.range
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Label → curve pairs, in no particular order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.terms.iter().map(|(label, curve)| (label.as_str(), curve.as_slice()))
    }

    pub fn curve(&self, label: &str) -> Option<&[f64]> {
        self.terms.get(label).map(Vec::as_slice)
    }
}

/// Registry of all declared variables, keyed for cheap reference from
/// rules and measurements.
#[derive(Default)]
pub struct Variables {
    pub(crate) slots: SlotMap<VariableKey, FuzzyVariable>,
    by_name: HashMap<String, VariableKey>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, variable: FuzzyVariable) -> Result<VariableKey, FuzzyError> {
        if self.by_name.contains_key(variable.name()) {
            return Err(FuzzyError::Configuration(format!(
                "variable '{}' is declared twice",
                variable.name()
            )));
        }

        let name = variable.name().to_owned();
        let key = self.slots.insert(variable);

        self.by_name.insert(name, key);

        Ok(key)
    }

    /// Lookup for external sources that reference variables by name
    pub fn key_of(&self, name: &str) -> Option<VariableKey> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, key: VariableKey) -> Option<&FuzzyVariable> {
        self.slots.get(key)
    }

    /// Declaration-ordered iteration
    pub fn iter(&self) -> impl Iterator<Item = (VariableKey, &FuzzyVariable)> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
