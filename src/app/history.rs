//! Bounded recency list of prior search terms.
//!
//! Terms are kept most-recent-first. Recording a term that is already present
//! leaves the order unchanged (no move-to-front); a new term is prepended and
//! the oldest entry beyond capacity is evicted.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Number of terms kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    /// Creates an empty history. A zero capacity is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.iter().any(|entry| entry == term)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a submitted term; returns `true` if it was newly inserted.
    ///
    /// ```
    /// use pixgrid::app::SearchHistory;
    ///
    /// let mut history = SearchHistory::with_capacity(2);
    /// history.record("a");
    /// history.record("b");
    /// assert!(!history.record("a"));
    /// history.record("c");
    /// assert_eq!(history.entries(), ["c", "b"]);
    /// ```
    pub fn record(&mut self, term: &str) -> bool {
        if self.contains(term) {
            return false;
        }
        self.entries.insert(0, term.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    /// Entries that fuzzily match `input`, best match first.
    ///
    /// Empty input returns every entry in recency order.
    #[must_use]
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let input = input.trim();
        if input.is_empty() {
            return self.entries.iter().map(String::as_str).collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize, &str)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                matcher
                    .fuzzy_match(&entry.to_lowercase(), &input.to_lowercase())
                    .map(|score| (score, position, entry.as_str()))
            })
            .collect();

        // higher score first, recency breaks ties
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, _, entry)| entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exceeds_capacity_or_duplicates() {
        let mut history = SearchHistory::default();
        for term in ["a", "b", "a", "c", "d", "e", "f", "b", "g"] {
            history.record(term);
            assert!(history.len() <= DEFAULT_HISTORY_CAPACITY);
            let mut sorted = history.entries().to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), history.len());
        }
        assert_eq!(history.entries(), ["g", "f", "e", "d", "c"]);
    }

    #[test]
    fn existing_term_keeps_its_position() {
        let mut history = SearchHistory::default();
        history.record("first");
        history.record("second");
        assert!(!history.record("first"));
        assert_eq!(history.entries(), ["second", "first"]);
    }

    #[test]
    fn zero_capacity_is_raised() {
        let mut history = SearchHistory::with_capacity(0);
        history.record("x");
        history.record("y");
        assert_eq!(history.entries(), ["y"]);
    }

    #[test]
    fn suggestions_rank_fuzzy_matches() {
        let mut history = SearchHistory::default();
        for term in ["mountains", "ocean", "mount fuji"] {
            history.record(term);
        }
        let hits = history.suggestions("mnt");
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&"mountains"));
        assert!(hits.contains(&"mount fuji"));
        assert_eq!(history.suggestions("").len(), 3);
        assert!(history.suggestions("zzz").is_empty());
    }
}
