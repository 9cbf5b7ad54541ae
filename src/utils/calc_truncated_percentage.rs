use crate::types::Percentage;

/// Calculates `part * 100 / whole` using integer division, truncating toward zero.
///
/// Returns `0` when `whole` is `0`.
pub fn calc_truncated_percentage(part: usize, whole: usize) -> Percentage {
    if whole == 0 {
        return 0;
    }

    part.saturating_mul(100) / whole
}
