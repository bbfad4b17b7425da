use super::common::*;
use crate::classifier::{compute_score, rule, RuleId, Score, MAX_SCORE, RULES};

#[test]
fn max_score_is_the_sum_of_catalog_weights() {
    let total: u32 = RULES.iter().map(|rule| rule.weight()).sum();
    assert_eq!(MAX_SCORE, total);
    assert_eq!(MAX_SCORE, 10);
    assert_eq!(rule(RuleId::ParagraphFragmentation).weight(), 2);
    assert!(RULES
        .iter()
        .filter(|rule| rule.id() != RuleId::ParagraphFragmentation)
        .all(|rule| rule.weight() == 1));
}

#[test]
fn catalog_lookup_returns_matching_rule() {
    for entry in RULES.iter() {
        assert_eq!(rule(entry.id()).id(), entry.id());
    }
}

#[test]
fn line_break_density_needs_four_newlines() {
    let detector = rule(RuleId::LineBreakDensity);
    assert!(!detector.check("a\nb\nc\nd"));
    assert!(detector.check("a\nb\nc\nd\ne"));
    assert!(detector.check("\n\n\n\n"));
}

#[test]
fn brevity_counts_characters() {
    let detector = rule(RuleId::DeceptiveBrevity);
    assert!(detector.check(&"x".repeat(299)));
    assert!(!detector.check(&"x".repeat(300)));
    assert!(detector.check(&"\u{00E9}".repeat(299)));
    assert!(!detector.check(""));
    assert!(!detector.check(" \n\t "));
}

#[test]
fn emoji_presence_uses_pictographic_property() {
    let detector = rule(RuleId::EmojiPresence);
    assert!(detector.check("good morning \u{1F642}"));
    assert!(detector.check("\u{2615}"));
    assert!(!detector.check("\u{00BF}Qu\u{00E9} tal? \u{4F60}\u{597D}"));
}

#[test]
fn short_line_prevalence_needs_five_short_lines() {
    let detector = rule(RuleId::ShortLinePrevalence);
    assert!(!detector.check(&lines(4, "short", "\n")));
    assert!(detector.check(&lines(5, "short", "\n")));

    let wide = "w".repeat(60);
    assert!(!detector.check(&lines(8, &wide, "\n")));
    let narrow = "w".repeat(59);
    assert!(detector.check(&lines(5, &narrow, "\n")));
}

#[test]
fn hype_run_requires_repetition() {
    let detector = rule(RuleId::RepeatedHypeEmoji);
    assert!(detector.check("ship it \u{1F680}\u{1F4AF}"));
    assert!(!detector.check("ship it \u{1F680}"));
    assert!(!detector.check("\u{1F525} and \u{1F525}"));
}

#[test]
fn bait_opener_matches_known_openers_at_start() {
    let detector = rule(RuleId::BaitOpener);
    for text in [
        "Wild: the office is back",
        "hot take - tabs win",
        "Unpopular opinion: no",
        "  Real talk.",
        "Mind...blown",
        "Game-changer alert",
        "game changer alert",
        "THIS CHANGES EVERYTHING",
    ] {
        assert!(detector.check(text), "expected opener in {text:?}");
    }
    assert!(!detector.check("Gamechanger"));
    assert!(!detector.check("Honestly, hot take incoming"));
    assert!(!detector.check(""));
}

#[test]
fn punchline_pacing_needs_many_mostly_short_lines() {
    let detector = rule(RuleId::PunchlinePacing);
    assert!(!detector.check(&lines(10, "tiny", "\n")));
    assert!(detector.check(&lines(11, "tiny", "\n")));

    let medium = "m".repeat(40);
    let five_short = format!("{}\n{}", lines(5, "tiny", "\n"), lines(6, &medium, "\n"));
    assert!(!detector.check(&five_short));
    let six_short = format!("{}\n{}", lines(6, "tiny", "\n"), lines(5, &medium, "\n"));
    assert!(detector.check(&six_short));
}

#[test]
fn decorative_glyphs_need_three_occurrences() {
    let detector = rule(RuleId::DecorativeGlyphs);
    assert!(!detector.check("\u{2022} a \u{2022} b"));
    assert!(detector.check("\u{2022} a \u{2713} b \u{274C} c"));
    assert!(detector.check("\u{21B3}\u{21B3}\u{21B3}"));
}

#[test]
fn fragmentation_needs_six_blocks_over_seventy_percent_single() {
    let detector = rule(RuleId::ParagraphFragmentation);
    assert!(detector.check(SIX_PARAGRAPHS));
    assert!(!detector.check(&lines(5, "solo", "\n\n")));

    let seven_of_ten = format!(
        "{}\n\n{}",
        lines(7, "solo", "\n\n"),
        lines(3, "pair\npair", "\n\n")
    );
    assert!(!detector.check(&seven_of_ten));

    let eight_of_ten = format!(
        "{}\n\n{}",
        lines(8, "solo", "\n\n"),
        lines(2, "pair\npair", "\n\n")
    );
    assert!(detector.check(&eight_of_ten));
}

#[test]
fn empty_text_scores_zero() {
    assert_eq!(compute_score(""), Score::ZERO);
    assert!(fired("").is_empty());
}

#[test]
fn two_short_lines_only_trip_brevity() {
    assert_eq!(fired("Hi\nBye"), vec![RuleId::DeceptiveBrevity]);
    assert_eq!(compute_score("Hi\nBye").value(), 0.1);
}

#[test]
fn continuous_prose_scores_zero() {
    let prose = prose_500();
    assert_eq!(prose.chars().count(), 500);
    assert!(fired(&prose).is_empty());
    assert_eq!(compute_score(&prose), Score::ZERO);
}

#[test]
fn six_paragraph_post_collects_structural_signals() {
    assert_eq!(
        fired(SIX_PARAGRAPHS),
        vec![
            RuleId::LineBreakDensity,
            RuleId::DeceptiveBrevity,
            RuleId::ShortLinePrevalence,
            RuleId::ParagraphFragmentation,
        ]
    );
    assert_eq!(compute_score(SIX_PARAGRAPHS).value(), 0.5);
}

#[test]
fn bait_opener_with_arrows_reaches_thirty_percent() {
    let signals = fired(UNPOPULAR_WITH_ARROWS);
    for expected in [
        RuleId::BaitOpener,
        RuleId::LineBreakDensity,
        RuleId::DecorativeGlyphs,
    ] {
        assert!(signals.contains(&expected), "missing {expected:?}");
    }
    assert!(compute_score(UNPOPULAR_WITH_ARROWS).value() >= 0.3);
    assert_eq!(compute_score(UNPOPULAR_WITH_ARROWS).value(), 0.5);
}

#[test]
fn degenerate_inputs_are_defined() {
    assert_eq!(compute_score("\u{1F525}\u{1F525}\u{1F525}").value(), 0.3);
    assert!(fired("   \t  ").is_empty());
    assert_eq!(
        fired(&"\n".repeat(12)),
        vec![RuleId::LineBreakDensity, RuleId::ShortLinePrevalence]
    );
}
