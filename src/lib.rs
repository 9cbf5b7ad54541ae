#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_TEXT_ANALYZER_CONFIG;
mod constants;
pub use constants::DEFAULT_WORD_DELIMITERS;
pub mod models;
pub use models::{Error, FrequencyTally, TextAnalyzer, TextAnalyzerConfig, Tokenizer};
pub mod types;
mod utils;
pub use types::{FirstSeenIndex, Percentage, Word, WordFrequency, WordRef};

/// Returns the number of words in the text, duplicates included.
///
/// Words are separated by runs of spaces and full stops. Empty text counts as one (empty) word.
pub fn word_count(text: &WordRef) -> usize {
    TextAnalyzer::default().word_count(text)
}

/// Returns up to `n` words of the text ordered by decreasing number of occurrences.
///
/// Words with equal counts are ordered by their first appearance in the text.
pub fn most_frequent_words(n: usize, text: &WordRef) -> Vec<&WordRef> {
    TextAnalyzer::default().most_frequent_words(n, text)
}

/// Returns the percentage (`0..=100`, truncated) of distinct words occurring exactly `k` times.
pub fn frequency_percentage(k: WordFrequency, text: &WordRef) -> Percentage {
    TextAnalyzer::default().frequency_percentage(k, text)
}

pub fn word_count_with_custom_config(
    text_analyzer_config: &TextAnalyzerConfig,
    text: &WordRef,
) -> Result<usize, Error> {
    let text_analyzer = TextAnalyzer::new(text_analyzer_config)?;

    Ok(text_analyzer.word_count(text))
}

pub fn most_frequent_words_with_custom_config<'t>(
    text_analyzer_config: &TextAnalyzerConfig,
    n: usize,
    text: &'t WordRef,
) -> Result<Vec<&'t WordRef>, Error> {
    let text_analyzer = TextAnalyzer::new(text_analyzer_config)?;

    Ok(text_analyzer.most_frequent_words(n, text))
}

pub fn frequency_percentage_with_custom_config(
    text_analyzer_config: &TextAnalyzerConfig,
    k: WordFrequency,
    text: &WordRef,
) -> Result<Percentage, Error> {
    let text_analyzer = TextAnalyzer::new(text_analyzer_config)?;

    Ok(text_analyzer.frequency_percentage(k, text))
}
