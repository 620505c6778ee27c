use std::collections::HashMap;

use crate::variable::VariableKey;

/// Crisp measurements for one inference run, one value per antecedent
/// variable. Variables absent from this set are consequents.
#[derive(Clone, Debug, Default)]
pub struct Measurements(HashMap<VariableKey, f64>);

impl Measurements {
    pub fn new() -> Self {
        Measurements(HashMap::new())
    }

    pub fn add(&mut self, variable: VariableKey, value: f64) {
        self.0.insert(variable, value);
    }

    pub fn get(&self, variable: VariableKey) -> Option<f64> {
        self.0.get(&variable).copied()
    }

    pub fn contains(&self, variable: VariableKey) -> bool {
        self.0.contains_key(&variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableKey, f64)> + '_ {
        self.0.iter().map(|(key, value)| (*key, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
