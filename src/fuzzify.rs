use std::collections::HashMap;

use tracing::debug;

use crate::classify::Classification;
use crate::error::FuzzyError;
use crate::inputs::Measurements;
use crate::math::membership_at;
use crate::variable::{Role, VariableKey, Variables};

/// Fuzzified degrees for one inference run: (antecedent, label) → scalar
/// degree in [0, 1]. A fresh structure per run; the variables' sampled
/// curves are never touched.
#[derive(Clone, Debug, Default)]
pub struct FuzzifiedDegrees(HashMap<VariableKey, HashMap<String, f64>>);

impl FuzzifiedDegrees {
    pub fn degree(&self, variable: VariableKey, label: &str) -> Option<f64> {
        self.0
            .get(&variable)
            .and_then(|labels| labels.get(label))
            .copied()
    }

    /// Number of fuzzified antecedent variables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Convert each antecedent's crisp measurement into one membership degree
/// per label, by linear interpolation against that variable's sampled
/// curves. Values outside the range fuzzify to degree zero.
pub fn fuzzify(
    variables: &Variables,
    classification: &Classification,
    measurements: &Measurements,
) -> Result<FuzzifiedDegrees, FuzzyError> {
    let mut degrees = HashMap::new();

    for classified in classification.roles() {
        if classified.role != Role::Antecedent {
            continue;
        }

        let variable = &variables.slots[classified.key];
        let value = measurements.get(classified.key).ok_or_else(|| {
            FuzzyError::Configuration(format!(
                "antecedent '{}' has no measurement",
                variable.name()
            ))
        })?;

        let labels: HashMap<String, f64> = variable
            .terms()
            .map(|(label, curve)| {
                let degree = membership_at(variable.range().as_slice(), curve, value);

                (label.to_owned(), degree)
            })
            .collect();

        debug!(variable = %variable.name(), value, "fuzzified measurement");
        degrees.insert(classified.key, labels);
    }

    Ok(FuzzifiedDegrees(degrees))
}
