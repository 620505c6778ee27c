use thiserror::Error;

use crate::rules::Connector;

/// Errors reported by the inference pipeline
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Inconsistent variable, range, or label configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A rule whose precedent count does not match its connector
    #[error("invalid rule {id}: {connector:?} connector takes {expected} precedent(s), found {found}")]
    InvalidRule {
        id: String,
        connector: Connector,
        expected: usize,
        found: usize,
    },

    /// The aggregated membership has zero area: no rule fired
    #[error("no activation: aggregated membership has zero area")]
    NoActivation,
}
