use tracing::debug;

use crate::classify::Classification;
use crate::error::FuzzyError;
use crate::fuzzify::FuzzifiedDegrees;
use crate::rules::{Connector, Proposition, Rules};
use crate::variable::Variables;

/// Implication results, one per rule, in rule declaration order. Each
/// entry is aligned to the consequent's domain range.
#[derive(Clone, Debug, Default)]
pub struct Activations(Vec<(String, Vec<f64>)>);

impl Activations {
    pub(crate) fn push(&mut self, id: String, curve: Vec<f64>) {
        self.0.push((id, curve));
    }

    pub fn get(&self, id: &str) -> Option<&[f64]> {
        self.0
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, curve)| curve.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.0
            .iter()
            .map(|(id, curve)| (id.as_str(), curve.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluate every rule against the fuzzified degrees: compose the
/// precedents per connector, then clip the consequent's membership curve
/// at the composed degree (max-min implication). A rule whose precedent
/// count does not match its connector aborts the whole run.
pub fn activate(
    rules: &Rules,
    degrees: &FuzzifiedDegrees,
    variables: &Variables,
    classification: &Classification,
) -> Result<Activations, FuzzyError> {
    let consequent = classification.consequent();
    let consequent_var = &variables.slots[consequent];
    let mut activations = Activations::default();

    for (position, rule) in rules.iter().enumerate() {
        let id = format!("R{}", position + 1);
        let expected = rule.connector.arity();
        let found = rule.precedents.len();

        if found != expected {
            return Err(FuzzyError::InvalidRule {
                id,
                connector: rule.connector,
                expected,
                found,
            });
        }

        if rule.result.variable != consequent {
            return Err(FuzzyError::Configuration(format!(
                "rule {id}: result must target the consequent variable '{}'",
                consequent_var.name()
            )));
        }

        let result_curve = consequent_var.curve(&rule.result.label).ok_or_else(|| {
            FuzzyError::Configuration(format!(
                "rule {id}: consequent '{}' has no label '{}'",
                consequent_var.name(),
                rule.result.label
            ))
        })?;

        let strength = match rule.connector {
            Connector::Simple => precedent_degree(&rule.precedents[0], degrees, variables, &id)?,
            Connector::And => {
                let first = precedent_degree(&rule.precedents[0], degrees, variables, &id)?;
                let second = precedent_degree(&rule.precedents[1], degrees, variables, &id)?;

                first.min(second)
            }
            Connector::Or => {
                let first = precedent_degree(&rule.precedents[0], degrees, variables, &id)?;
                let second = precedent_degree(&rule.precedents[1], degrees, variables, &id)?;

                first.max(second)
            }
        };

        // Mamdani implication: clip the consequent shape at the rule strength
        let activation = result_curve.iter().map(|&y| y.min(strength)).collect();

        debug!(rule = %id, strength, "rule activated");
        activations.push(id, activation);
    }

    Ok(activations)
}

fn precedent_degree(
    proposition: &Proposition,
    degrees: &FuzzifiedDegrees,
    variables: &Variables,
    rule_id: &str,
) -> Result<f64, FuzzyError> {
    degrees
        .degree(proposition.variable, &proposition.label)
        .ok_or_else(|| {
            let name = variables
                .get(proposition.variable)
                .map(|v| v.name())
                .unwrap_or("<unknown>");

            FuzzyError::Configuration(format!(
                "rule {rule_id}: precedent '{name} is {}' matches no fuzzified antecedent label",
                proposition.label
            ))
        })
}
