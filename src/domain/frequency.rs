//! Deterministic value counting.
//!
//! Counts keep the order in which values were first seen, so "most frequent"
//! resolves ties in favour of the value that appeared first.

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

/// Value counts with a first-seen tie-break; polars `value_counts` gives no
/// such order guarantee.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Most frequent value; the earliest seen wins a tie.
    pub fn mode(&self) -> Option<&K> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key)
    }

    /// All values with their counts, highest count first, ties in first-seen order.
    pub fn into_counts(self) -> Vec<(K, usize)> {
        self.entries
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_values_when_taking_mode_then_none() {
        let counter: FrequencyCounter<&str> = FrequencyCounter::new();
        assert!(counter.mode().is_none());
        assert!(counter.is_empty());
    }

    #[test]
    fn given_tie_when_taking_mode_then_first_seen_wins() {
        let counter: FrequencyCounter<_> = ["b", "a", "a", "b", "c"].into_iter().collect();
        assert_eq!(counter.mode(), Some(&"b"));
    }

    #[test]
    fn given_clear_winner_when_taking_mode_then_returns_it() {
        let counter: FrequencyCounter<_> = [3, 1, 1, 2, 1].into_iter().collect();
        assert_eq!(counter.mode(), Some(&1));
        assert_eq!(counter.count(&1), 3);
        assert_eq!(counter.count(&9), 0);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn given_counts_when_listing_then_descending_with_stable_ties() {
        let counter: FrequencyCounter<_> =
            ["x", "y", "z", "z", "y", "w"].into_iter().collect();
        assert_eq!(
            counter.into_counts(),
            vec![("y", 2), ("z", 2), ("x", 1), ("w", 1)]
        );
    }
}
