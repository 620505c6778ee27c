use tracing::debug;

use crate::error::FuzzyError;
use crate::inputs::Measurements;
use crate::variable::{DomainRange, Role, VariableKey, Variables};

/// A declared variable with its inferred role and sampled range.
#[derive(Clone, Debug)]
pub struct ClassifiedVariable {
    pub key: VariableKey,
    pub name: String,
    pub role: Role,
    pub range: DomainRange,
}

/// Outcome of partitioning the declared variables by the measurement set.
#[derive(Clone, Debug)]
pub struct Classification {
    roles: Vec<ClassifiedVariable>,
    consequent: VariableKey,
}

impl Classification {
    /// All declared variables, in declaration order
    pub fn roles(&self) -> &[ClassifiedVariable] {
        &self.roles
    }

    /// The single inferred variable
    pub fn consequent(&self) -> VariableKey {
        self.consequent
    }

    pub fn antecedents(&self) -> impl Iterator<Item = VariableKey> + '_ {
        self.roles
            .iter()
            .filter(|v| v.role == Role::Antecedent)
            .map(|v| v.key)
    }
}

/// Partition declared variables into antecedents and consequents: a
/// variable is an antecedent iff it is measured. Exactly one consequent
/// must remain.
pub fn classify(
    variables: &Variables,
    measurements: &Measurements,
) -> Result<Classification, FuzzyError> {
    for (key, _) in measurements.iter() {
        if variables.get(key).is_none() {
            return Err(FuzzyError::Configuration(
                "measurement references an unregistered variable".into(),
            ));
        }
    }

    let mut roles = Vec::with_capacity(variables.len());
    let mut consequents = Vec::new();

    for (key, variable) in variables.iter() {
        let role = if measurements.contains(key) {
            Role::Antecedent
        } else {
            Role::Consequent
        };

        if role == Role::Consequent {
            consequents.push(key);
        }

        roles.push(ClassifiedVariable {
            key,
            name: variable.name().to_owned(),
            role,
            range: variable.range().clone(),
        });
    }

    let consequent = match consequents.as_slice() {
        [] => {
            return Err(FuzzyError::Configuration(
                "no consequent variable: every declared variable is measured".into(),
            ))
        }
        [key] => *key,
        _ => {
            let names: Vec<_> = consequents
                .iter()
                .map(|key| variables.slots[*key].name())
                .collect();

            return Err(FuzzyError::Configuration(format!(
                "expected exactly one consequent variable, found {}: {}",
                names.len(),
                names.join(", ")
            )));
        }
    };

    debug!(
        consequent = %variables.slots[consequent].name(),
        antecedents = roles.len() - 1,
        "classified variables"
    );

    Ok(Classification { roles, consequent })
}
