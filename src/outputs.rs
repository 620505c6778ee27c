use crate::activation::Activations;
use crate::variable::{DomainRange, VariableKey};

/// Result of one inference run: the crisp value together with everything
/// a result sink needs to render it. Range and aggregated curve are
/// always the same length.
#[derive(Clone, Debug)]
pub struct Outputs {
    value: f64,
    consequent: VariableKey,
    range: DomainRange,
    aggregated: Vec<f64>,
    activations: Activations,
}

impl Outputs {
    pub(crate) fn new(
        value: f64,
        consequent: VariableKey,
        range: DomainRange,
        aggregated: Vec<f64>,
        activations: Activations,
    ) -> Self {
        Self {
            value,
            consequent,
            range,
            aggregated,
            activations,
        }
    }

    /// The defuzzified crisp value, rounded to two decimal places
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn consequent(&self) -> VariableKey {
        self.consequent
    }

    pub fn range(&self) -> &DomainRange {
        &self.range
    }

    /// Pointwise maximum over all rule activations
    pub fn aggregated(&self) -> &[f64] {
        &self.aggregated
    }

    /// Per-rule implication results, in rule declaration order
    pub fn activations(&self) -> &Activations {
        &self.activations
    }
}
