use crate::classifier::{Category, FeatureVector, PolicyConfig, RuleId, TextProfile};

pub(super) const SIX_PARAGRAPHS: &str = "Short opener here.\n\nSecond thought.\n\nThird thought.\n\nFourth thought.\n\nFifth thought.\n\nA closing block\nthat runs two lines.";

pub(super) const UNPOPULAR_WITH_ARROWS: &str = "Unpopular opinion: standups should be async.\n\u{2192} less context switching\n\u{2192} written record\n\u{2192} time zones stop mattering\nThoughts?";

pub(super) fn prose_500() -> String {
    let prose = "Careful writing takes time and patience, and that is fine. ".repeat(9);
    prose[..500].to_string()
}

pub(super) fn policy(threshold: f64) -> PolicyConfig {
    PolicyConfig::new(threshold, Category::ALL).expect("valid policy")
}

pub(super) fn fired(text: &str) -> Vec<RuleId> {
    FeatureVector::extract(&TextProfile::measure(text))
        .fired()
        .collect()
}

pub(super) fn lines(count: usize, line: &str, separator: &str) -> String {
    vec![line; count].join(separator)
}
