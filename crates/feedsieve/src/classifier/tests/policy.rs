use super::common::*;
use crate::classifier::{evaluate, Category, Classifier, PolicyConfig, ReasonCode, Score};
use crate::host::ContentItem;
use crate::samples::FRAGMENTED;

#[test]
fn missing_or_blank_text_stays_visible_without_a_score() {
    let config = PolicyConfig::default();
    for item in [
        ContentItem::unreadable(),
        ContentItem::from_text(""),
        ContentItem::from_text(" \n\t\n "),
    ] {
        let verdict = evaluate(&item, &config);
        assert!(!verdict.should_suppress);
        assert_eq!(verdict.reason, ReasonCode::None);
        assert!(verdict.score.is_none());
        assert!(verdict.explanation.is_none());
    }
}

#[test]
fn low_scoring_text_stays_visible() {
    let verdict = evaluate("Hi\nBye", &policy(0.4));
    assert!(!verdict.should_suppress);
    assert_eq!(verdict.reason, ReasonCode::None);
    assert_eq!(verdict.score.map(Score::value), Some(0.1));
}

#[test]
fn fragmented_post_is_style_spam() {
    let verdict = evaluate(SIX_PARAGRAPHS, &policy(0.4));
    assert!(verdict.should_suppress);
    assert_eq!(verdict.reason, ReasonCode::StyleSpam);
    assert_eq!(verdict.score.map(Score::value), Some(0.5));
    let explanation = verdict.explanation.expect("scored verdicts carry features");
    assert_eq!(explanation.points(), 5);
    assert_eq!(explanation.entries().len(), 9);
}

#[test]
fn threshold_comparison_is_inclusive() {
    let verdict = evaluate(FRAGMENTED, &policy(0.4));
    assert_eq!(verdict.score.map(Score::value), Some(0.4));
    assert!(verdict.should_suppress);

    let verdict = evaluate(FRAGMENTED, &policy(0.41));
    assert!(!verdict.should_suppress);
    assert_eq!(verdict.reason, ReasonCode::None);
}

#[test]
fn zero_threshold_suppresses_even_clean_prose() {
    let prose = prose_500();
    let relaxed = evaluate(prose.as_str(), &policy(0.4));
    assert!(!relaxed.should_suppress);
    assert_eq!(relaxed.score, Some(Score::ZERO));

    let strict = evaluate(prose.as_str(), &policy(0.0));
    assert!(strict.should_suppress);
    assert_eq!(strict.reason, ReasonCode::StyleSpam);
}

#[test]
fn structural_match_wins_before_text_is_read() {
    let item = ContentItem::unreadable().with_structural_match(true);
    let verdict = evaluate(&item, &PolicyConfig::default());
    assert!(verdict.should_suppress);
    assert_eq!(verdict.reason, ReasonCode::StructuralExclusion);
    assert!(verdict.score.is_none());

    let item = ContentItem::from_text(SIX_PARAGRAPHS).with_structural_match(true);
    assert_eq!(
        evaluate(&item, &PolicyConfig::default()).reason,
        ReasonCode::StructuralExclusion
    );
}

#[test]
fn disabled_structural_check_falls_through_to_scoring() {
    let config = PolicyConfig::default().disable(Category::StructuralExclusion);

    let spam = ContentItem::from_text(SIX_PARAGRAPHS).with_structural_match(true);
    assert_eq!(evaluate(&spam, &config).reason, ReasonCode::StyleSpam);

    let clean = ContentItem::from_text(prose_500()).with_structural_match(true);
    let verdict = evaluate(&clean, &config);
    assert!(!verdict.should_suppress);
    assert_eq!(verdict.score, Some(Score::ZERO));
}

#[test]
fn disabled_style_check_never_reports_style_spam() {
    let config = PolicyConfig::default().disable(Category::StyleSpam);
    let verdict = evaluate(SIX_PARAGRAPHS, &config);
    assert!(!verdict.should_suppress);
    assert_eq!(verdict.reason, ReasonCode::None);
    assert!(verdict.score.is_none());

    let poll = ContentItem::from_text(SIX_PARAGRAPHS).with_structural_match(true);
    assert_eq!(
        evaluate(&poll, &config).reason,
        ReasonCode::StructuralExclusion
    );
}

#[test]
fn nothing_is_suppressed_with_every_category_disabled() {
    let config = PolicyConfig::new(0.0, std::iter::empty()).expect("valid policy");
    let item = ContentItem::from_text(SIX_PARAGRAPHS).with_structural_match(true);
    let verdict = evaluate(&item, &config);
    assert!(!verdict.should_suppress);
    assert_eq!(verdict.reason, ReasonCode::None);
}

#[test]
fn classifier_matches_free_function() {
    let config = policy(0.3);
    let classifier = Classifier::new(config.clone());
    for text in [SIX_PARAGRAPHS, UNPOPULAR_WITH_ARROWS, "Hi\nBye", ""] {
        assert_eq!(classifier.evaluate(text), evaluate(text, &config));
    }
    assert_eq!(classifier.config(), &config);
}

#[test]
fn summary_names_the_reason() {
    let hidden = evaluate(SIX_PARAGRAPHS, &PolicyConfig::default());
    assert_eq!(hidden.summary(), "hidden: style spam (score 0.50)");

    let visible = evaluate("Hi\nBye", &PolicyConfig::default());
    assert_eq!(visible.summary(), "visible (score 0.10)");

    let unread = evaluate(&ContentItem::unreadable(), &PolicyConfig::default());
    assert_eq!(unread.summary(), "visible (not scored)");
}
