// webcount-common/src/model/mod.rs
pub mod envelope;
pub mod fetch;
pub mod sum;

pub use envelope::{DataEnvelope, SignalEnvelope};
pub use fetch::{FetchRequest, FetchResult, FAILURE_SENTINEL};
pub use sum::SumOperands;
