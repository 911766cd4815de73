// webcount/src/logging.rs
use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "WEBCOUNT_LOG";

/// Maps the `-v` count to a default level. Results go to stdout, so the quiet
/// default keeps stderr empty unless something went wrong.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber. `WEBCOUNT_LOG` overrides the level derived
/// from `-v`.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .try_init();
}
