use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Session-local exclusion overlay for generated keywords.
///
/// Exclusions are tracked by literal keyword text, not index, so they
/// survive regeneration after the term lists change: any regenerated keyword
/// whose exact text was excluded stays excluded. This state belongs to the
/// caller's session, not to the pure combination functions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSelection {
    excluded: AHashSet<String>,
}

/// A filtered keyword list plus the counts needed for statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredKeywords {
    pub keywords: Vec<String>,
    /// Generated keywords before exclusions.
    pub raw_count: usize,
    /// Generated keywords removed by the overlay.
    pub excluded_count: usize,
}

impl KeywordSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a keyword as excluded.
    pub fn exclude(&mut self, keyword: &str) {
        self.excluded.insert(keyword.to_string());
    }

    /// Removes a single exclusion.
    pub fn restore(&mut self, keyword: &str) {
        self.excluded.remove(keyword);
    }

    /// Clears the exclusion set ("restore all").
    pub fn restore_all(&mut self) {
        self.excluded.clear();
    }

    pub fn is_excluded(&self, keyword: &str) -> bool {
        self.excluded.contains(keyword)
    }

    /// Applies the overlay to a generated keyword list.
    pub fn apply(&self, generated: &[String]) -> FilteredKeywords {
        let raw_count = generated.len();
        let keywords: Vec<String> = generated
            .iter()
            .filter(|keyword| !self.excluded.contains(keyword.as_str()))
            .cloned()
            .collect();
        let excluded_count = raw_count - keywords.len();
        FilteredKeywords {
            keywords,
            raw_count,
            excluded_count,
        }
    }
}
