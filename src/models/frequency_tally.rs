use crate::types::{FirstSeenIndex, Percentage, WordFrequency, WordRef};
use crate::utils::{calc_truncated_percentage, sort_by_frequency};
use std::collections::HashMap;

/// Occurrence counts of each distinct word, kept in the order the words were first seen.
///
/// The sum of all counts always equals the number of words the tally was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTally<'a> {
    entries: Vec<(&'a WordRef, WordFrequency)>,
    index: HashMap<&'a WordRef, FirstSeenIndex>,
}

impl<'a> FrequencyTally<'a> {
    /// Builds a tally by walking the words in order, inserting each new word with a count of 1
    /// and incrementing the count of words already seen.
    pub fn from_words(words: &[&'a WordRef]) -> Self {
        let mut tally = Self::default();

        for word in words {
            match tally.index.get(word).copied() {
                Some(first_seen_index) => tally.entries[first_seen_index].1 += 1,
                None => {
                    tally.index.insert(*word, tally.entries.len());
                    tally.entries.push((*word, 1));
                }
            }
        }

        tally
    }

    pub fn get(&self, word: &WordRef) -> Option<WordFrequency> {
        self.index
            .get(word)
            .map(|&first_seen_index| self.entries[first_seen_index].1)
    }

    /// Distinct words, in first-seen order, paired with their counts.
    pub fn entries(&self) -> &[(&'a WordRef, WordFrequency)] {
        &self.entries
    }

    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to `n` words by decreasing count. Equal counts keep first-seen order.
    pub fn most_frequent(&self, n: usize) -> Vec<&'a WordRef> {
        if n == 0 {
            return Vec::new();
        }

        sort_by_frequency(&self.entries)
            .into_iter()
            .take(n)
            .map(|(word, _)| word)
            .collect()
    }

    /// Number of distinct words which occur exactly `k` times.
    pub fn count_with_frequency(&self, k: WordFrequency) -> usize {
        self.entries
            .iter()
            .filter(|(_, frequency)| *frequency == k)
            .count()
    }

    /// Percentage of distinct words which occur exactly `k` times, truncated toward zero.
    ///
    /// An empty tally yields `0`.
    pub fn frequency_percentage(&self, k: WordFrequency) -> Percentage {
        calc_truncated_percentage(self.count_with_frequency(k), self.distinct_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_preserve_first_seen_order() {
        let tally = FrequencyTally::from_words(&["b", "a", "a", "b", "c", "a"]);

        assert_eq!(tally.entries(), &[("b", 2), ("a", 3), ("c", 1)]);
        assert_eq!(tally.get("a"), Some(3));
        assert_eq!(tally.get("d"), None);
        assert_eq!(tally.distinct_count(), 3);
        assert_eq!(tally.total_count(), 6);
    }

    #[test]
    fn test_words_are_case_sensitive() {
        let tally = FrequencyTally::from_words(&["Quid", "quid", "quid"]);

        assert_eq!(tally.get("Quid"), Some(1));
        assert_eq!(tally.get("quid"), Some(2));
    }

    #[test]
    fn test_most_frequent_breaks_ties_by_first_seen() {
        let tally = FrequencyTally::from_words(&["b", "a", "a", "b", "c"]);

        assert_eq!(tally.most_frequent(2), vec!["b", "a"]);
        assert_eq!(tally.most_frequent(0), Vec::<&str>::new());
        assert_eq!(tally.most_frequent(10), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_tally() {
        let tally = FrequencyTally::from_words(&[]);

        assert!(tally.is_empty());
        assert_eq!(tally.total_count(), 0);
        assert_eq!(tally.most_frequent(3), Vec::<&str>::new());
        assert_eq!(tally.frequency_percentage(1), 0);
    }

    #[test]
    fn test_frequency_percentage_truncates() {
        // 1 of 3 distinct words occurs twice: 33.33...%
        let tally = FrequencyTally::from_words(&["x", "x", "y", "z"]);

        assert_eq!(tally.count_with_frequency(2), 1);
        assert_eq!(tally.frequency_percentage(2), 33);
        assert_eq!(tally.frequency_percentage(1), 66);
        assert_eq!(tally.frequency_percentage(0), 0);
    }
}
