use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Independently toggled suppression checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Formatting-signal scoring of the text.
    StyleSpam,
    /// Host-reported structural pattern (e.g. a poll), independent of text.
    StructuralExclusion,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::StyleSpam, Category::StructuralExclusion];

    pub fn key(&self) -> &'static str {
        match self {
            Category::StyleSpam => "style_spam",
            Category::StructuralExclusion => "structural_exclusion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "style_spam" | "spam" => Ok(Category::StyleSpam),
            "structural_exclusion" | "poll" | "polls" => Ok(Category::StructuralExclusion),
            _ => Err(PolicyError::UnknownCategory(value.to_string())),
        }
    }
}

/// Rejections raised while building a [`PolicyConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("threshold must be a number within [0, 1], found {0}")]
    ThresholdOutOfRange(f64),
    #[error("unknown policy category '{0}' (expected style_spam or structural_exclusion)")]
    UnknownCategory(String),
}

/// Caller-supplied decision policy. Only constructible in a valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolicyConfigInput")]
pub struct PolicyConfig {
    threshold: f64,
    categories: BTreeSet<Category>,
}

impl PolicyConfig {
    pub fn new(
        threshold: f64,
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
            categories: categories.into_iter().collect(),
        })
    }

    /// Builds a policy from category keys, rejecting any key it does not know.
    pub fn from_keys<I, K>(threshold: f64, keys: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let categories = keys
            .into_iter()
            .map(|key| key.as_ref().parse::<Category>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        Self::new(threshold, categories)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Result<Self, PolicyError> {
        self.threshold = validate_threshold(threshold)?;
        Ok(self)
    }

    pub fn enable(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn disable(mut self, category: Category) -> Self {
        self.categories.remove(&category);
        self
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            categories: Category::ALL.into_iter().collect(),
        }
    }
}

fn validate_threshold(threshold: f64) -> Result<f64, PolicyError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(PolicyError::ThresholdOutOfRange(threshold))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyConfigInput {
    #[serde(default = "default_threshold")]
    threshold: f64,
    #[serde(default = "default_category_keys")]
    categories: Vec<String>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_category_keys() -> Vec<String> {
    Category::ALL.iter().map(|c| c.key().to_string()).collect()
}

impl TryFrom<PolicyConfigInput> for PolicyConfig {
    type Error = PolicyError;

    fn try_from(input: PolicyConfigInput) -> Result<Self, Self::Error> {
        PolicyConfig::from_keys(input.threshold, input.categories)
    }
}
