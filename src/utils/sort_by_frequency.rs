use crate::types::{WordFrequency, WordRef};

/// Sorts word/frequency pairs by frequency in descending order.
///
/// The sort is stable: pairs with equal frequencies keep their relative input order. Callers
/// pass entries in first-seen order so that the word appearing earlier in the text wins a tie.
///
/// # Example
/// ```ignore
/// let entries = vec![("b", 2), ("c", 1), ("a", 2)];
///
/// let sorted = sort_by_frequency(&entries);
/// assert_eq!(sorted, vec![("b", 2), ("a", 2), ("c", 1)]);
/// ```
pub fn sort_by_frequency<'a>(
    entries: &[(&'a WordRef, WordFrequency)],
) -> Vec<(&'a WordRef, WordFrequency)> {
    let mut sorted_entries = entries.to_vec();

    // `sort_by` is stable; no secondary key is needed
    sorted_entries.sort_by(|a, b| b.1.cmp(&a.1));

    sorted_entries
}
