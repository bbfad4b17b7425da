use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Trimmed lines narrower than this count toward short-line prevalence.
pub(crate) const SHORT_LINE_CHARS: usize = 60;
/// Trimmed lines narrower than this read as one-beat "punchlines".
pub(crate) const PUNCHLINE_LINE_CHARS: usize = 30;
const PREVIEW_CHARS: usize = 100;

static EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Extended_Pictographic}").expect("emoji pattern compiles"));

static HYPE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[\x{1F525}\x{1F680}\x{1F4AF}]\x{FE0F}?){2,}").expect("hype pattern compiles")
});

static BAIT_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:wild|hot take|unpopular opinion|controversial|real talk|let that sink in|mind[.\s]*blown|unsettling|shocking|game[- ]changer|this changes everything)",
    )
    .expect("opener pattern compiles")
});

fn is_decorative_glyph(ch: char) -> bool {
    matches!(
        ch,
        '\u{2192}' | '\u{21B3}' | '\u{2022}' | '\u{2713}' | '\u{2714}' | '\u{2705}' | '\u{274C}'
    )
}

/// Raw layout measurements for one document.
///
/// Every rule reads from a profile instead of re-scanning the text, so the
/// numbers reported by diagnostics are exactly the numbers the rules saw.
/// Widths are counted in Unicode scalar values after trimming whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextProfile {
    pub line_breaks: usize,
    pub length: usize,
    pub visible_chars: usize,
    pub has_emoji: bool,
    pub short_lines: usize,
    pub non_empty_lines: usize,
    pub very_short_lines: usize,
    pub decorative_glyphs: usize,
    pub hype_run: bool,
    pub bait_opener: Option<String>,
    pub blocks: usize,
    pub single_line_blocks: usize,
}

impl TextProfile {
    pub fn measure(text: &str) -> Self {
        let mut profile = Self {
            has_emoji: EMOJI.is_match(text),
            hype_run: HYPE_RUN.is_match(text),
            bait_opener: BAIT_OPENER
                .find(text.trim())
                .map(|found| found.as_str().to_string()),
            ..Self::default()
        };

        for ch in text.chars() {
            profile.length += 1;
            if !ch.is_whitespace() {
                profile.visible_chars += 1;
            }
            if ch == '\n' {
                profile.line_breaks += 1;
            }
            if is_decorative_glyph(ch) {
                profile.decorative_glyphs += 1;
            }
        }

        let mut open_block = 0;
        for line in text.split('\n') {
            let trimmed = line.trim();
            let width = trimmed.chars().count();
            if width < SHORT_LINE_CHARS {
                profile.short_lines += 1;
            }

            if trimmed.is_empty() {
                profile.close_block(open_block);
                open_block = 0;
                continue;
            }

            profile.non_empty_lines += 1;
            if width < PUNCHLINE_LINE_CHARS {
                profile.very_short_lines += 1;
            }
            open_block += 1;
        }
        profile.close_block(open_block);

        profile
    }

    fn close_block(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }
        self.blocks += 1;
        if lines == 1 {
            self.single_line_blocks += 1;
        }
    }

    /// Share of paragraph blocks made of exactly one line (0 when there are none).
    pub fn single_line_ratio(&self) -> f64 {
        if self.blocks == 0 {
            0.0
        } else {
            self.single_line_blocks as f64 / self.blocks as f64
        }
    }
}

/// Leading slice of the text used in logs and reports.
pub(crate) fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
