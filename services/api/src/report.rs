use crate::error::AppError;
use clap::Args;
use feedsieve::config::AppConfig;
use feedsieve::samples::{corpus, Sample};
use feedsieve::telemetry;
use feedsieve::{Category, Classifier, ContentItem, PolicyConfig, PolicyError};
use std::fmt::{self, Write as _};
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// Read the post from this file instead of stdin
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Suppression threshold in [0, 1] (defaults to SIEVE_THRESHOLD or 0.4)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Turn off a check: style_spam or structural_exclusion (repeatable)
    #[arg(long)]
    pub(crate) disable: Vec<Category>,
    /// Treat the post as matching a structural exclusion such as a poll
    #[arg(long)]
    pub(crate) structural_match: bool,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SamplesArgs {
    /// Suppression threshold in [0, 1] (defaults to SIEVE_THRESHOLD or 0.4)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    Verdict,
    Diagnostics,
}

pub(crate) fn run_classify(args: ClassifyArgs, output: Output) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let policy = resolve_policy(config.policy, args.threshold, &args.disable)?;
    let text = read_input(args.file.as_ref())?;
    let item = ContentItem::from_text(text).with_structural_match(args.structural_match);

    println!("{}", render_item(&item, &policy, output, args.json)?);
    Ok(())
}

pub(crate) fn run_samples(args: SamplesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let policy = resolve_policy(config.policy, args.threshold, &[])?;
    print!("{}", render_samples(&policy, &corpus())?);
    Ok(())
}

/// Applies command-line overrides on top of the environment policy.
pub(crate) fn resolve_policy(
    base: PolicyConfig,
    threshold: Option<f64>,
    disable: &[Category],
) -> Result<PolicyConfig, PolicyError> {
    let mut policy = match threshold {
        Some(threshold) => base.with_threshold(threshold)?,
        None => base,
    };
    for category in disable {
        policy = policy.disable(*category);
    }
    Ok(policy)
}

fn read_input(path: Option<&PathBuf>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

pub(crate) fn render_item(
    item: &ContentItem,
    policy: &PolicyConfig,
    output: Output,
    json: bool,
) -> Result<String, AppError> {
    let classifier = Classifier::new(policy.clone());
    let rendered = match (output, json) {
        (Output::Verdict, true) => serde_json::to_string_pretty(&classifier.evaluate(item))?,
        (Output::Verdict, false) => classifier.evaluate(item).summary(),
        (Output::Diagnostics, true) => serde_json::to_string_pretty(&classifier.explain(item))?,
        (Output::Diagnostics, false) => classifier.explain(item).to_string(),
    };
    Ok(rendered)
}

pub(crate) fn render_samples(
    policy: &PolicyConfig,
    samples: &[Sample],
) -> Result<String, fmt::Error> {
    let classifier = Classifier::new(policy.clone());
    let mut out = String::new();
    let mut matched = 0;

    for sample in samples {
        let report = classifier.explain(&sample.item());
        let expected = if sample.expect_hidden { "HIDDEN" } else { "VISIBLE" };
        let agrees = report.verdict.should_suppress == sample.expect_hidden;
        if agrees {
            matched += 1;
        }

        writeln!(out, "== {} ({})", sample.name, sample.description)?;
        writeln!(out, "{report}")?;
        writeln!(
            out,
            "Expected at default threshold: {expected}{}\n",
            if agrees { "" } else { "  << differs" }
        )?;
    }

    writeln!(
        out,
        "{matched}/{} samples matched expectations at threshold {:.2}",
        samples.len(),
        policy.threshold()
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_base_policy() {
        let policy = resolve_policy(
            PolicyConfig::default(),
            Some(0.7),
            &[Category::StructuralExclusion],
        )
        .expect("valid overrides");
        assert_eq!(policy.threshold(), 0.7);
        assert!(policy.is_enabled(Category::StyleSpam));
        assert!(!policy.is_enabled(Category::StructuralExclusion));
    }

    #[test]
    fn out_of_range_override_is_an_error() {
        let err = resolve_policy(PolicyConfig::default(), Some(1.2), &[])
            .expect_err("threshold rejected");
        assert_eq!(err, PolicyError::ThresholdOutOfRange(1.2));
    }

    #[test]
    fn verdict_output_is_a_one_line_summary() {
        let item = ContentItem::from_text("Hi\nBye");
        let text = render_item(&item, &PolicyConfig::default(), Output::Verdict, false)
            .expect("renders");
        assert_eq!(text, "visible (score 0.10)");
    }

    #[test]
    fn json_diagnostics_carry_reason_code() {
        let item = ContentItem::from_text("Vote now").with_structural_match(true);
        let text = render_item(&item, &PolicyConfig::default(), Output::Diagnostics, true)
            .expect("renders");
        let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(json["verdict"]["reason"], "STRUCTURAL_EXCLUSION");
        assert_eq!(json["basis"], "structural_exclusion");
    }

    #[test]
    fn sample_run_reports_every_sample() {
        let samples = corpus();
        let out = render_samples(&PolicyConfig::default(), &samples).expect("renders");
        for sample in &samples {
            assert!(out.contains(&format!("== {}", sample.name)));
        }
        assert!(out.contains("6/6 samples matched expectations at threshold 0.40"));
        assert!(!out.contains("<< differs"));
    }

    #[test]
    fn raised_threshold_flags_disagreements() {
        let policy = PolicyConfig::default()
            .with_threshold(0.8)
            .expect("valid threshold");
        let out = render_samples(&policy, &corpus()).expect("renders");
        assert!(out.contains("<< differs"));
        assert!(out.contains("3/6 samples matched"));
    }
}
