use std::fmt;

use serde::Serialize;

use super::policy::{Assessment, Basis, ReasonCode, Verdict};
use super::rules::{RuleId, MAX_SCORE};
use super::text::TextProfile;

/// Suppression action as shown to auditors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Hidden,
    Visible,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Hidden => "HIDDEN",
            Action::Visible => "VISIBLE",
        }
    }
}

/// Contribution of one rule to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    pub rule: RuleId,
    pub name: &'static str,
    pub weight: u32,
    pub fired: bool,
    pub points: u32,
}

/// Layout measurements the rules relied on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurements {
    pub line_breaks: usize,
    pub length: usize,
    pub visible_chars: usize,
    pub short_lines: usize,
    pub non_empty_lines: usize,
    pub very_short_lines: usize,
    pub blocks: usize,
    pub single_line_blocks: usize,
    pub single_line_ratio: f64,
    pub has_emoji: bool,
    pub decorative_glyphs: usize,
    pub hype_run: bool,
    pub bait_opener: Option<String>,
}

impl From<&TextProfile> for Measurements {
    fn from(profile: &TextProfile) -> Self {
        Self {
            line_breaks: profile.line_breaks,
            length: profile.length,
            visible_chars: profile.visible_chars,
            short_lines: profile.short_lines,
            non_empty_lines: profile.non_empty_lines,
            very_short_lines: profile.very_short_lines,
            blocks: profile.blocks,
            single_line_blocks: profile.single_line_blocks,
            single_line_ratio: profile.single_line_ratio(),
            has_emoji: profile.has_emoji,
            decorative_glyphs: profile.decorative_glyphs,
            hype_run: profile.hype_run,
            bait_opener: profile.bait_opener.clone(),
        }
    }
}

/// Audit breakdown for a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub verdict: Verdict,
    pub basis: Basis,
    pub action: Action,
    pub threshold: f64,
    pub max_score: u32,
    pub rules: Vec<RuleReport>,
    pub measurements: Option<Measurements>,
    pub preview: Option<String>,
}

impl Diagnostics {
    pub(crate) fn from_assessment(assessment: Assessment, threshold: f64) -> Self {
        let Assessment {
            verdict,
            basis,
            profile,
            preview,
        } = assessment;

        let rules = verdict
            .explanation
            .iter()
            .flat_map(|features| features.entries())
            .map(|entry| RuleReport {
                rule: entry.rule,
                name: entry.rule.label(),
                weight: entry.weight,
                fired: entry.fired,
                points: entry.points(),
            })
            .collect();

        let action = if verdict.should_suppress {
            Action::Hidden
        } else {
            Action::Visible
        };

        Self {
            verdict,
            basis,
            action,
            threshold,
            max_score: MAX_SCORE,
            rules,
            measurements: profile.as_ref().map(Measurements::from),
            preview,
        }
    }

    pub fn fired_rules(&self) -> impl Iterator<Item = &RuleReport> {
        self.rules.iter().filter(|report| report.fired)
    }

    pub fn points(&self) -> u32 {
        self.rules.iter().map(|report| report.points).sum()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict.score {
            Some(score) => writeln!(
                f,
                "Score: {score} ({}/{}, threshold: {:.2})",
                self.points(),
                self.max_score,
                self.threshold
            )?,
            None => writeln!(f, "Score: n/a (threshold: {:.2})", self.threshold)?,
        }

        match self.verdict.reason {
            ReasonCode::None => writeln!(f, "Action: {}", self.action.label())?,
            reason => writeln!(f, "Action: {} ({reason:?})", self.action.label())?,
        }

        match self.basis {
            Basis::StyleScoring => {}
            Basis::StructuralExclusion => writeln!(f, "Basis: structural exclusion matched")?,
            Basis::StyleSpamDisabled => writeln!(f, "Basis: style spam check disabled")?,
            Basis::NoExtractableText => writeln!(f, "Basis: no extractable text")?,
        }

        if let Some(m) = &self.measurements {
            writeln!(f, "Line breaks: {}", m.line_breaks)?;
            writeln!(f, "Length: {}", m.length)?;
            writeln!(f, "Short lines (<60): {}", m.short_lines)?;
            writeln!(
                f,
                "Paragraphs: {} total, {} single-line ({:.0}%)",
                m.blocks,
                m.single_line_blocks,
                m.single_line_ratio * 100.0
            )?;
            writeln!(f, "Has emojis: {}", m.has_emoji)?;
            writeln!(f, "Decorative glyphs: {}", m.decorative_glyphs)?;
            if let Some(opener) = &m.bait_opener {
                writeln!(f, "Opener: {opener:?}")?;
            }
        }

        if !self.rules.is_empty() {
            writeln!(f, "Rules:")?;
            for report in &self.rules {
                let mark = if report.fired { 'x' } else { ' ' };
                writeln!(
                    f,
                    "  [{mark}] {} (+{}/{})",
                    report.name, report.points, report.weight
                )?;
            }
        }

        if let Some(preview) = &self.preview {
            write!(f, "Preview: {preview}")?;
        }
        Ok(())
    }
}
