//! Contract between the classifier and whatever finds and reads content items.
//!
//! Hosts own item discovery, markup extraction, and deduplication. The
//! classifier only asks an item for its text (which may be unavailable) and
//! whether it carries a structural-exclusion signature such as a poll.

use serde::{Deserialize, Serialize};

pub trait ContentSource {
    /// Extracted plain text, or `None` when the host could not read any.
    fn text(&self) -> Option<&str>;

    /// Whether the item matches a non-textual exclusion pattern.
    fn matches_structural_exclusion(&self) -> bool {
        false
    }
}

impl ContentSource for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl ContentSource for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Owned content item as delivered by a host over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub structural_match: bool,
}

impl ContentItem {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            structural_match: false,
        }
    }

    pub fn unreadable() -> Self {
        Self::default()
    }

    pub fn with_structural_match(mut self, matched: bool) -> Self {
        self.structural_match = matched;
        self
    }
}

impl ContentSource for ContentItem {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn matches_structural_exclusion(&self) -> bool {
        self.structural_match
    }
}
