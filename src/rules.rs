use crate::variable::VariableKey;

/// How a rule composes its precedent degrees.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connector {
    /// One precedent, passed through unchanged
    Simple,
    /// Two precedents, combined with min
    And,
    /// Two precedents, combined with max
    Or,
}

impl Connector {
    /// Number of precedents the connector expects
    pub fn arity(self) -> usize {
        match self {
            Self::Simple => 1,
            Self::And | Self::Or => 2,
        }
    }
}

/// One (variable, label) reference inside a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposition {
    pub variable: VariableKey,
    pub label: String,
}

impl Proposition {
    pub fn new(variable: VariableKey, label: impl Into<String>) -> Self {
        Self {
            variable,
            label: label.into(),
        }
    }
}

/// A fuzzy rule as delivered by the rule-base source. The precedent list
/// is kept free-length on purpose: rules come from external data, and the
/// activation engine rejects an arity that does not match the connector.
#[derive(Clone, Debug)]
pub struct Rule {
    pub connector: Connector,
    pub precedents: Vec<Proposition>,
    pub result: Proposition,
}

impl Rule {
    pub fn simple(precedent: Proposition, result: Proposition) -> Self {
        Self {
            connector: Connector::Simple,
            precedents: vec![precedent],
            result,
        }
    }

    pub fn and(first: Proposition, second: Proposition, result: Proposition) -> Self {
        Self {
            connector: Connector::And,
            precedents: vec![first, second],
            result,
        }
    }

    pub fn or(first: Proposition, second: Proposition, result: Proposition) -> Self {
        Self {
            connector: Connector::Or,
            precedents: vec![first, second],
            result,
        }
    }
}

/// The rule base, in declaration order. Rule identifiers ("R1", "R2", …)
/// are assigned from this order at activation time.
#[derive(Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
