// webcount-net/src/lib.rs
pub mod http;
pub mod validation;

pub use http::{build_http_client, fetch_and_count, fetch_body};
pub use validation::validate_url;
pub use webcount_common::{
    error::{Result, WebCountError},
    model::{FetchRequest, FetchResult},
    Config,
};
