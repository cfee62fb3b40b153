//! Bounded evaluation history
//!
//! Entries are kept newest first. Once the limit is reached, recording a
//! new entry evicts the oldest one.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// One completed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Expression with display glyphs, e.g. `6 × 7`
    pub expression: String,
    /// Result text as shown on the display
    pub result: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Newest-first history with a fixed maximum length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history length
    pub const DEFAULT_LIMIT: usize = 10;

    /// Creates an empty history with the default limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Creates an empty history keeping at most `limit` entries
    ///
    /// A limit of zero is raised to one.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Records an entry as the newest, returning the evicted entry if any
    pub fn record(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.limit {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Returns an iterator over the entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the oldest retained entry
    #[must_use]
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `"<expression> = <result>"` lines, newest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Exports the history as newline-separated text
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{n} + 0"), n.to_string())
    }

    // ===== HistoryEntry tests =====

    #[test]
    fn test_entry_display() {
        let e = HistoryEntry::new("6 × 7", "42");
        assert_eq!(e.to_string(), "6 × 7 = 42");
    }

    // ===== History tests =====

    #[test]
    fn test_history_new_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.limit(), History::DEFAULT_LIMIT);
        assert!(history.latest().is_none());
        assert!(history.oldest().is_none());
    }

    #[test]
    fn test_history_default_matches_new() {
        assert_eq!(History::default(), History::new());
    }

    #[test]
    fn test_history_record_newest_first() {
        let mut history = History::new();
        history.record(entry(1));
        history.record(entry(2));
        history.record(entry(3));

        assert_eq!(history.latest(), Some(&entry(3)));
        assert_eq!(history.oldest(), Some(&entry(1)));
        let results: Vec<_> = history.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = History::new();
        for n in 1..=10 {
            assert!(history.record(entry(n)).is_none());
        }
        let evicted = history.record(entry(11));

        assert_eq!(evicted, Some(entry(1)));
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest(), Some(&entry(11)));
        assert_eq!(history.oldest(), Some(&entry(2)));
    }

    #[test]
    fn test_history_with_limit() {
        let mut history = History::with_limit(2);
        history.record(entry(1));
        history.record(entry(2));
        history.record(entry(3));
        assert_eq!(history.len(), 2);
        assert_eq!(history.oldest(), Some(&entry(2)));
    }

    #[test]
    fn test_history_zero_limit_is_raised() {
        let mut history = History::with_limit(0);
        assert_eq!(history.limit(), 1);
        history.record(entry(1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new();
        history.record(entry(1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.limit(), History::DEFAULT_LIMIT);
    }

    #[test]
    fn test_history_lines_and_export() {
        let mut history = History::new();
        history.record(HistoryEntry::new("2 + 3", "5"));
        history.record(HistoryEntry::new("5 ÷ 2", "2.5"));

        assert_eq!(history.lines(), vec!["5 ÷ 2 = 2.5", "2 + 3 = 5"]);
        assert_eq!(history.export_formatted(), "5 ÷ 2 = 2.5\n2 + 3 = 5");
    }

    #[test]
    fn test_history_export_empty() {
        assert_eq!(History::new().export_formatted(), "");
    }
}
