use tracing::debug;

use crate::activation::activate;
use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::defuzz::DefuzzMethod;
use crate::error::FuzzyError;
use crate::fuzzify::fuzzify;
use crate::inputs::Measurements;
use crate::outputs::Outputs;
use crate::rules::Rules;
use crate::variable::Variables;

/// Mamdani max-min inference pipeline: classify variables, fuzzify the
/// measurements, activate every rule, aggregate the activations, and
/// defuzzify the aggregated curve with the configured method.
pub struct MamdaniInference {
    defuzz_op: DefuzzMethod,
}

impl MamdaniInference {
    pub fn new(defuzz_op: DefuzzMethod) -> Self {
        Self { defuzz_op }
    }

    /// Run one inference over read-only snapshots of the configuration and
    /// measurements. Repeated runs with identical inputs return identical
    /// results; nothing is cached or mutated across runs.
    pub fn eval(
        &self,
        variables: &Variables,
        rules: &Rules,
        measurements: &Measurements,
    ) -> Result<Outputs, FuzzyError> {
        let classification = classify(variables, measurements)?;
        let degrees = fuzzify(variables, &classification, measurements)?;
        let activations = activate(rules, &degrees, variables, &classification)?;

        let consequent = &variables.slots[classification.consequent()];
        let aggregated = aggregate(&activations, consequent.range().len());
        let value = self
            .defuzz_op
            .call(consequent.range().as_slice(), &aggregated)?;

        debug!(
            variable = %consequent.name(),
            method = ?self.defuzz_op,
            value,
            "defuzzified"
        );

        Ok(Outputs::new(
            value,
            classification.consequent(),
            consequent.range().clone(),
            aggregated,
            activations,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Connector, Proposition, Rule};
    use crate::variable::{DomainRange, FuzzyVariable, VariableKey};

    struct Tipping {
        vars: Variables,
        service: VariableKey,
        food: VariableKey,
        tip: VariableKey,
    }

    fn tipping() -> Tipping {
        let mut vars = Variables::new();
        let in_range = DomainRange::new(vec![0., 5., 10.]).unwrap();
        let service = vars
            .add(
                FuzzyVariable::from_points(
                    "service",
                    in_range.clone(),
                    [
                        ("poor", [(0., 1.), (5., 0.)].as_slice()),
                        ("good", [(5., 0.), (10., 1.)].as_slice()),
                    ],
                )
                .unwrap(),
            )
            .unwrap();
        let food = vars
            .add(
                FuzzyVariable::from_points(
                    "food",
                    in_range,
                    [
                        ("bad", [(0., 1.), (5., 0.)].as_slice()),
                        ("tasty", [(5., 0.), (10., 1.)].as_slice()),
                    ],
                )
                .unwrap(),
            )
            .unwrap();
        let tip = vars
            .add(
                FuzzyVariable::from_points(
                    "tip",
                    DomainRange::sampled(0., 20., 5.).unwrap(),
                    [
                        ("low", [(0., 0.), (5., 1.), (10., 0.)].as_slice()),
                        ("high", [(10., 0.), (15., 1.), (20., 0.)].as_slice()),
                    ],
                )
                .unwrap(),
            )
            .unwrap();

        Tipping {
            vars,
            service,
            food,
            tip,
        }
    }

    fn tipping_rules(t: &Tipping) -> Rules {
        let mut rules = Rules::with_capacity(3);

        rules.add(Rule::simple(
            Proposition::new(t.service, "poor"),
            Proposition::new(t.tip, "low"),
        ));
        rules.add(Rule::simple(
            Proposition::new(t.food, "tasty"),
            Proposition::new(t.tip, "high"),
        ));
        rules.add(Rule::or(
            Proposition::new(t.service, "poor"),
            Proposition::new(t.food, "bad"),
            Proposition::new(t.tip, "low"),
        ));

        rules
    }

    #[test]
    fn test_tipping_symmetric_activation() {
        let t = tipping();
        let rules = tipping_rules(&t);

        // poor(2.5) = 0.5; food sits at 5 where both of its flanks are zero
        let mut measurements = Measurements::new();
        measurements.add(t.service, 2.5);
        measurements.add(t.food, 5.);

        let centroid = MamdaniInference::new(DefuzzMethod::Centroid)
            .eval(&t.vars, &rules, &measurements)
            .unwrap();
        let bisector = MamdaniInference::new(DefuzzMethod::Bisector)
            .eval(&t.vars, &rules, &measurements)
            .unwrap();

        // only "low" is active at 0.5: a symmetric triangle peaking at 5
        assert_eq!(centroid.value(), 5.);
        assert_eq!(bisector.value(), 5.);
        assert_eq!(centroid.aggregated(), &[0., 0.5, 0., 0., 0.]);
        assert_eq!(centroid.range().as_slice(), &[0., 5., 10., 15., 20.]);
        assert_eq!(centroid.consequent(), t.tip);

        let ids: Vec<_> = centroid.activations().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_tipping_asymmetric_activation() {
        let t = tipping();
        let rules = tipping_rules(&t);

        // poor(2.5) = 0.5 drives "low"; tasty(6) = 0.2 drives "high"
        let mut measurements = Measurements::new();
        measurements.add(t.service, 2.5);
        measurements.add(t.food, 6.);

        let centroid = MamdaniInference::new(DefuzzMethod::Centroid)
            .eval(&t.vars, &rules, &measurements)
            .unwrap();
        let bisector = MamdaniInference::new(DefuzzMethod::Bisector)
            .eval(&t.vars, &rules, &measurements)
            .unwrap();

        assert_eq!(centroid.aggregated(), &[0., 0.5, 0., 0.2, 0.]);
        assert_eq!(centroid.value(), 7.86);
        assert_eq!(bisector.value(), 6.13);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let t = tipping();
        let rules = tipping_rules(&t);
        let model = MamdaniInference::new(DefuzzMethod::Centroid);

        let mut measurements = Measurements::new();
        measurements.add(t.service, 2.5);
        measurements.add(t.food, 6.);

        let first = model.eval(&t.vars, &rules, &measurements).unwrap();
        let second = model.eval(&t.vars, &rules, &measurements).unwrap();

        assert_eq!(first.value(), second.value());
        assert_eq!(first.aggregated(), second.aggregated());
    }

    #[test]
    fn no_rule_firing_is_no_activation() {
        let t = tipping();
        let rules = tipping_rules(&t);

        // poor(10) = 0, tasty(5) = 0, bad(5) = 0: every rule is dead
        let mut measurements = Measurements::new();
        measurements.add(t.service, 10.);
        measurements.add(t.food, 5.);

        for method in [DefuzzMethod::Centroid, DefuzzMethod::Bisector] {
            let result = MamdaniInference::new(method).eval(&t.vars, &rules, &measurements);

            assert!(matches!(result, Err(FuzzyError::NoActivation)));
        }
    }

    #[test]
    fn invalid_rule_halts_the_whole_run() {
        let t = tipping();
        let mut rules = Rules::new();

        rules.add(Rule {
            connector: Connector::Or,
            precedents: vec![Proposition::new(t.service, "poor")],
            result: Proposition::new(t.tip, "low"),
        });

        let mut measurements = Measurements::new();
        measurements.add(t.service, 2.5);
        measurements.add(t.food, 5.);

        let result = MamdaniInference::new(DefuzzMethod::Centroid).eval(&t.vars, &rules, &measurements);

        assert!(matches!(
            result,
            Err(FuzzyError::InvalidRule {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn singleton_consequent_returns_its_sample_point() {
        let mut vars = Variables::new();
        let service = vars
            .add(
                FuzzyVariable::new(
                    "service",
                    DomainRange::new(vec![0., 5., 10.]).unwrap(),
                    [("poor", vec![1., 0., 0.])],
                )
                .unwrap(),
            )
            .unwrap();
        let alarm = vars
            .add(
                FuzzyVariable::new(
                    "alarm",
                    DomainRange::new(vec![7.]).unwrap(),
                    [("on", vec![1.])],
                )
                .unwrap(),
            )
            .unwrap();

        let mut rules = Rules::new();
        rules.add(Rule::simple(
            Proposition::new(service, "poor"),
            Proposition::new(alarm, "on"),
        ));

        let mut measurements = Measurements::new();
        measurements.add(service, 2.5);

        let outputs = MamdaniInference::new(DefuzzMethod::Centroid)
            .eval(&vars, &rules, &measurements)
            .unwrap();

        assert_eq!(outputs.value(), 7.);
        assert_eq!(outputs.aggregated(), &[0.5]);
    }
}
