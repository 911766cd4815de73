// webcount-common/src/lib.rs
pub mod config;
pub mod error;
pub mod model;

pub use config::Config;
pub use error::{Result, WebCountError};
pub use model::{DataEnvelope, FetchRequest, FetchResult, SignalEnvelope, SumOperands};
