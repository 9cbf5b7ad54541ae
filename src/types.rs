// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word as an owned `String`. Words are the basic units produced by the tokenizer.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. Tokenized words are slices of the input text.
pub type WordRef = str;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// The position at which a distinct word was first encountered, counting distinct words only.
///
/// Used to break ties between words of equal frequency.
pub type FirstSeenIndex = usize;

/// An integer percentage in the range `0..=100`, truncated toward zero.
pub type Percentage = usize;
