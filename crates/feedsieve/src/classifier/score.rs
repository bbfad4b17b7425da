use std::fmt;

use serde::Serialize;

use super::rules::{RuleId, MAX_SCORE, RULES};
use super::text::TextProfile;

/// Outcome of one rule for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub rule: RuleId,
    pub weight: u32,
    pub fired: bool,
}

impl FeatureEntry {
    pub fn points(&self) -> u32 {
        if self.fired {
            self.weight
        } else {
            0
        }
    }
}

/// Per-rule results for a document, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    entries: Vec<FeatureEntry>,
}

impl FeatureVector {
    pub fn extract(profile: &TextProfile) -> Self {
        let entries = RULES
            .iter()
            .map(|rule| FeatureEntry {
                rule: rule.id(),
                weight: rule.weight(),
                fired: rule.fires(profile),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    pub fn get(&self, rule: RuleId) -> Option<&FeatureEntry> {
        self.entries.iter().find(|entry| entry.rule == rule)
    }

    pub fn fired(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.fired)
            .map(|entry| entry.rule)
    }

    pub fn points(&self) -> u32 {
        self.entries.iter().map(FeatureEntry::points).sum()
    }

    pub fn score(&self) -> Score {
        Score::from_points(self.points())
    }
}

/// Normalized confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);

    pub fn from_points(points: u32) -> Self {
        Self(f64::from(points.min(MAX_SCORE)) / f64::from(MAX_SCORE))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Inclusive comparison against a policy threshold.
    pub fn meets(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Score raw text against the full rule catalog.
pub fn compute_score(text: &str) -> Score {
    FeatureVector::extract(&TextProfile::measure(text)).score()
}
