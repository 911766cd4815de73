// webcount-core/src/lib.rs
pub mod count;
pub mod sum;

pub use count::{count_occurrences, MatchPositions};
pub use sum::parse_sum_fragment;
