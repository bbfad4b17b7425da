//! Formatting-signal classifier: rule catalog, scorer, decision policy, and
//! diagnostics.
//!
//! Text is measured once into a [`TextProfile`], every rule reads that
//! profile to build a [`FeatureVector`], and the policy turns the vector's
//! [`Score`] into a [`Verdict`]. Diagnostics are assembled from the same
//! profile and vector, so an explanation can never disagree with the
//! decision it explains.

mod config;
mod diagnostics;
mod policy;
mod rules;
mod score;
mod text;

#[cfg(test)]
mod tests;

pub use config::{Category, PolicyConfig, PolicyError, DEFAULT_THRESHOLD};
pub use diagnostics::{Action, Diagnostics, Measurements, RuleReport};
pub use policy::{Basis, ReasonCode, Verdict};
pub use rules::{rule, Rule, RuleId, MAX_SCORE, RULES};
pub use score::{compute_score, FeatureEntry, FeatureVector, Score};
pub use text::TextProfile;

use crate::host::ContentSource;

/// Decide whether a content item should be suppressed.
pub fn evaluate<S>(source: &S, config: &PolicyConfig) -> Verdict
where
    S: ContentSource + ?Sized,
{
    policy::decide(source, config)
}

/// Evaluate a content item and return the full audit breakdown.
pub fn explain<S>(source: &S, config: &PolicyConfig) -> Diagnostics
where
    S: ContentSource + ?Sized,
{
    Diagnostics::from_assessment(policy::assess(source, config), config.threshold())
}

/// Stateless evaluator bound to one policy.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: PolicyConfig,
}

impl Classifier {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn evaluate<S>(&self, source: &S) -> Verdict
    where
        S: ContentSource + ?Sized,
    {
        evaluate(source, &self.config)
    }

    pub fn explain<S>(&self, source: &S) -> Diagnostics
    where
        S: ContentSource + ?Sized,
    {
        explain(source, &self.config)
    }
}
