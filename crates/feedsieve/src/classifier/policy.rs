use serde::Serialize;
use tracing::debug;

use super::config::{Category, PolicyConfig};
use super::score::{FeatureVector, Score};
use super::text::{preview, TextProfile};
use crate::host::ContentSource;

/// Why an item was (or was not) suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    None,
    StyleSpam,
    StructuralExclusion,
}

/// Final decision for one content item.
///
/// `score` and `explanation` are present only when stylistic scoring ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub should_suppress: bool,
    pub reason: ReasonCode,
    pub score: Option<Score>,
    pub explanation: Option<FeatureVector>,
}

impl Verdict {
    fn visible() -> Self {
        Self {
            should_suppress: false,
            reason: ReasonCode::None,
            score: None,
            explanation: None,
        }
    }

    fn structural() -> Self {
        Self {
            should_suppress: true,
            reason: ReasonCode::StructuralExclusion,
            score: None,
            explanation: None,
        }
    }

    pub fn summary(&self) -> String {
        match (self.reason, self.score) {
            (ReasonCode::StructuralExclusion, _) => {
                "hidden: structural exclusion pattern matched".to_string()
            }
            (ReasonCode::StyleSpam, Some(score)) => format!("hidden: style spam (score {score})"),
            (ReasonCode::StyleSpam, None) => "hidden: style spam".to_string(),
            (ReasonCode::None, Some(score)) => format!("visible (score {score})"),
            (ReasonCode::None, None) => "visible (not scored)".to_string(),
        }
    }
}

/// Which branch of the policy produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    StructuralExclusion,
    StyleScoring,
    StyleSpamDisabled,
    NoExtractableText,
}

/// A verdict together with the measurements behind it.
pub(crate) struct Assessment {
    pub verdict: Verdict,
    pub basis: Basis,
    pub profile: Option<TextProfile>,
    pub preview: Option<String>,
}

pub(crate) fn assess<S>(source: &S, config: &PolicyConfig) -> Assessment
where
    S: ContentSource + ?Sized,
{
    if config.is_enabled(Category::StructuralExclusion) && source.matches_structural_exclusion() {
        debug!(reason = "structural_exclusion", action = "HIDDEN", "content analysed");
        return Assessment {
            verdict: Verdict::structural(),
            basis: Basis::StructuralExclusion,
            profile: None,
            preview: None,
        };
    }

    if !config.is_enabled(Category::StyleSpam) {
        return Assessment {
            verdict: Verdict::visible(),
            basis: Basis::StyleSpamDisabled,
            profile: None,
            preview: None,
        };
    }

    // Absence of text is never evidence of spam.
    let Some(text) = source.text().filter(|text| !text.trim().is_empty()) else {
        debug!("no extractable text; leaving content visible");
        return Assessment {
            verdict: Verdict::visible(),
            basis: Basis::NoExtractableText,
            profile: None,
            preview: None,
        };
    };

    let profile = TextProfile::measure(text);
    let features = FeatureVector::extract(&profile);
    let score = features.score();
    let should_suppress = score.meets(config.threshold());
    let preview = preview(text);

    debug!(
        score = %score,
        threshold = config.threshold(),
        action = if should_suppress { "HIDDEN" } else { "VISIBLE" },
        line_breaks = profile.line_breaks,
        length = profile.length,
        has_emoji = profile.has_emoji,
        preview = %preview,
        "content analysed"
    );

    Assessment {
        verdict: Verdict {
            should_suppress,
            reason: if should_suppress {
                ReasonCode::StyleSpam
            } else {
                ReasonCode::None
            },
            score: Some(score),
            explanation: Some(features),
        },
        basis: Basis::StyleScoring,
        profile: Some(profile),
        preview: Some(preview),
    }
}

pub(crate) fn decide<S>(source: &S, config: &PolicyConfig) -> Verdict
where
    S: ContentSource + ?Sized,
{
    assess(source, config).verdict
}
