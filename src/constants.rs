/// Characters which separate words. Any run of one or more of these acts as a single separator.
///
/// Newlines, tabs, commas and other punctuation are intentionally absent; they remain part of the
/// surrounding word.
pub const DEFAULT_WORD_DELIMITERS: &[char] = &[' ', '.'];
