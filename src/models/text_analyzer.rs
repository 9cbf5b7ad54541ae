use crate::config::DEFAULT_TEXT_ANALYZER_CONFIG;
use crate::models::{Error, FrequencyTally, Tokenizer};
use crate::types::{Percentage, WordFrequency, WordRef};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnalyzerConfig<'a> {
    /// Characters which separate words. Must not be empty.
    pub word_delimiters: &'a [char],
    /// Whether empty text counts as a single empty word (`true`) or as no words at all.
    pub count_empty_text_as_word: bool,
}

impl<'a> TextAnalyzerConfig<'a> {
    pub fn validate(&self) -> Result<(), Error> {
        if self.word_delimiters.is_empty() {
            return Err(Error::ConfigError(
                "word delimiter set must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Answers word statistics queries about a text.
///
/// Nothing is cached between calls; every query tokenizes and tallies the text anew.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    tokenizer: Tokenizer<'a>,
}

impl Default for TextAnalyzer<'static> {
    fn default() -> Self {
        Self::from_valid_config(DEFAULT_TEXT_ANALYZER_CONFIG)
    }
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(config: &TextAnalyzerConfig<'a>) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &TextAnalyzerConfig<'a>) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.word_delimiters, config.count_empty_text_as_word),
        }
    }

    pub fn tokenize<'t>(&self, text: &'t WordRef) -> Vec<&'t WordRef> {
        self.tokenizer.tokenize(text)
    }

    pub fn frequency_tally<'t>(&self, text: &'t WordRef) -> FrequencyTally<'t> {
        let words = self.tokenize(text);
        let frequency_tally = FrequencyTally::from_words(&words);

        debug!(
            "Tallied {} words ({} distinct)",
            words.len(),
            frequency_tally.distinct_count()
        );

        frequency_tally
    }

    /// Number of words in the text, duplicates included.
    pub fn word_count(&self, text: &WordRef) -> usize {
        let word_count = self.tokenize(text).len();

        debug!("Counted {} words", word_count);

        word_count
    }

    /// Up to `n` words of the text, most frequent first.
    ///
    /// Words with equal counts are ordered by their first appearance in the text.
    pub fn most_frequent_words<'t>(&self, n: usize, text: &'t WordRef) -> Vec<&'t WordRef> {
        let most_frequent_words = self.frequency_tally(text).most_frequent(n);

        debug!(
            "Selected {} of {} requested most frequent words",
            most_frequent_words.len(),
            n
        );

        most_frequent_words
    }

    /// Percentage of distinct words which occur exactly `k` times, truncated toward zero.
    pub fn frequency_percentage(&self, k: WordFrequency, text: &WordRef) -> Percentage {
        self.frequency_tally(text).frequency_percentage(k)
    }
}
