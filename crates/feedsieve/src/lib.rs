//! Formatting-signal classifier for low-substance feed posts.
//!
//! Scores raw text on layout alone (line breaks, fragmentation, emoji,
//! decorative glyphs, bait openers) and never on topic. Everything in
//! [`classifier`] is pure and deterministic; [`config`] and [`telemetry`]
//! support the hosts that embed it.

pub mod classifier;
pub mod config;
pub mod host;
pub mod samples;
pub mod telemetry;

pub use classifier::{
    compute_score, evaluate, explain, Category, Classifier, Diagnostics, PolicyConfig,
    PolicyError, ReasonCode, Score, Verdict,
};
pub use host::{ContentItem, ContentSource};
