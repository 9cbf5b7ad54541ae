pub mod calc_truncated_percentage;
pub use calc_truncated_percentage::calc_truncated_percentage;

pub mod sort_by_frequency;
pub use sort_by_frequency::sort_by_frequency;
