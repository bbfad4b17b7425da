use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::TextProfile;

const LINE_BREAK_MIN: usize = 4;
const BREVITY_MAX_CHARS: usize = 300;
const SHORT_LINE_MIN_COUNT: usize = 5;
const PUNCHLINE_MIN_LINES: usize = 10;
const DECORATIVE_GLYPH_MIN: usize = 3;
const FRAGMENTED_MIN_BLOCKS: usize = 6;

/// Stable identifier for each formatting detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    LineBreakDensity,
    DeceptiveBrevity,
    EmojiPresence,
    ShortLinePrevalence,
    RepeatedHypeEmoji,
    BaitOpener,
    PunchlinePacing,
    DecorativeGlyphs,
    ParagraphFragmentation,
}

impl RuleId {
    pub fn label(&self) -> &'static str {
        match self {
            RuleId::LineBreakDensity => "many line breaks",
            RuleId::DeceptiveBrevity => "deceptively short",
            RuleId::EmojiPresence => "contains emoji",
            RuleId::ShortLinePrevalence => "many short lines",
            RuleId::RepeatedHypeEmoji => "repeated hype emoji",
            RuleId::BaitOpener => "bait opener",
            RuleId::PunchlinePacing => "punchline pacing",
            RuleId::DecorativeGlyphs => "decorative bullets/arrows",
            RuleId::ParagraphFragmentation => "paragraph fragmentation",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detector paired with the points it grants when it fires.
#[derive(Clone, Copy)]
pub struct Rule {
    id: RuleId,
    weight: u32,
    detect: fn(&TextProfile) -> bool,
}

impl Rule {
    const fn new(id: RuleId, weight: u32, detect: fn(&TextProfile) -> bool) -> Self {
        Self { id, weight, detect }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn fires(&self, profile: &TextProfile) -> bool {
        (self.detect)(profile)
    }

    #[cfg(test)]
    pub(crate) fn check(&self, text: &str) -> bool {
        self.fires(&TextProfile::measure(text))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish()
    }
}

/// The canonical rule catalog. Order only affects how reports are listed.
pub const RULES: [Rule; 9] = [
    Rule::new(RuleId::LineBreakDensity, 1, line_break_density),
    Rule::new(RuleId::DeceptiveBrevity, 1, deceptive_brevity),
    Rule::new(RuleId::EmojiPresence, 1, emoji_presence),
    Rule::new(RuleId::ShortLinePrevalence, 1, short_line_prevalence),
    Rule::new(RuleId::RepeatedHypeEmoji, 1, repeated_hype_emoji),
    Rule::new(RuleId::BaitOpener, 1, bait_opener),
    Rule::new(RuleId::PunchlinePacing, 1, punchline_pacing),
    Rule::new(RuleId::DecorativeGlyphs, 1, decorative_glyphs),
    Rule::new(RuleId::ParagraphFragmentation, 2, paragraph_fragmentation),
];

/// Normalization denominator: the sum of every weight in [`RULES`].
pub const MAX_SCORE: u32 = total_weight(&RULES);

const _: () = assert!(MAX_SCORE > 0);

const fn total_weight(rules: &[Rule]) -> u32 {
    let mut total = 0;
    let mut index = 0;
    while index < rules.len() {
        total += rules[index].weight;
        index += 1;
    }
    total
}

pub fn rule(id: RuleId) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.id == id)
        .unwrap_or_else(|| unreachable!("every RuleId has a catalog entry"))
}

fn line_break_density(profile: &TextProfile) -> bool {
    profile.line_breaks >= LINE_BREAK_MIN
}

// Blank text is not "short content"; it is no content.
fn deceptive_brevity(profile: &TextProfile) -> bool {
    profile.visible_chars > 0 && profile.length < BREVITY_MAX_CHARS
}

fn emoji_presence(profile: &TextProfile) -> bool {
    profile.has_emoji
}

fn short_line_prevalence(profile: &TextProfile) -> bool {
    profile.short_lines >= SHORT_LINE_MIN_COUNT
}

fn repeated_hype_emoji(profile: &TextProfile) -> bool {
    profile.hype_run
}

fn bait_opener(profile: &TextProfile) -> bool {
    profile.bait_opener.is_some()
}

// More than half of over ten non-empty lines are punchline-short.
fn punchline_pacing(profile: &TextProfile) -> bool {
    profile.non_empty_lines > PUNCHLINE_MIN_LINES
        && profile.very_short_lines * 2 > profile.non_empty_lines
}

fn decorative_glyphs(profile: &TextProfile) -> bool {
    profile.decorative_glyphs >= DECORATIVE_GLYPH_MIN
}

// More than 70% single-line blocks, compared without floats.
fn paragraph_fragmentation(profile: &TextProfile) -> bool {
    profile.blocks >= FRAGMENTED_MIN_BLOCKS && profile.single_line_blocks * 10 > profile.blocks * 7
}
