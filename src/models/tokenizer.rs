use crate::constants::DEFAULT_WORD_DELIMITERS;
use crate::types::WordRef;

#[derive(Debug, Copy, Clone)]
pub struct Tokenizer<'a> {
    word_delimiters: &'a [char],
    count_empty_text_as_word: bool,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_DELIMITERS, true)
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new(word_delimiters: &'a [char], count_empty_text_as_word: bool) -> Self {
        Self {
            word_delimiters,
            count_empty_text_as_word,
        }
    }

    pub fn word_delimiters(&self) -> &'a [char] {
        self.word_delimiters
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.word_delimiters.contains(&c)
    }

    /// Splits the text into words, treating any run of delimiters as a single separator.
    ///
    /// Words are returned in order of appearance, duplicates included, as slices of `text`.
    ///
    /// - Empty text yields a single empty word (or none, if `count_empty_text_as_word` is off).
    /// - Leading delimiters yield an initial empty word.
    /// - Trailing delimiters are discarded, so text made only of delimiters yields no words.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize<'t>(&self, text: &'t WordRef) -> Vec<&'t WordRef> {
        if text.is_empty() {
            return if self.count_empty_text_as_word {
                vec![text]
            } else {
                Vec::new()
            };
        }

        let mut words: Vec<&WordRef> = text
            .split(|c: char| self.is_delimiter(c))
            .enumerate()
            // Interior empties come from consecutive delimiters; only a leading one survives
            .filter(|(idx, word)| *idx == 0 || !word.is_empty())
            .map(|(_, word)| word)
            .collect();

        while words.last().map_or(false, |word| word.is_empty()) {
            words.pop();
        }

        words
    }
}
