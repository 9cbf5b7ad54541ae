use crate::constants::DEFAULT_WORD_DELIMITERS;
use crate::models::TextAnalyzerConfig;

pub const DEFAULT_TEXT_ANALYZER_CONFIG: &TextAnalyzerConfig<'static> = &TextAnalyzerConfig {
    word_delimiters: DEFAULT_WORD_DELIMITERS,
    count_empty_text_as_word: true,
};
