//! `dynamic_web_count <term>`: count the term in every URL read from stdin,
//! until a URL of `!`.
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{debug, warn};
use webcount_common::config::Config;
use webcount_common::error::Result;
use webcount_common::model::{FetchRequest, FetchResult};

use super::{client_or_log, fetch_once, Driver, Verbosity};

/// Input token that ends the session.
pub const STOP_SENTINEL: &str = "!";

#[derive(Parser, Debug)]
#[command(
    name = "dynamic_web_count",
    version,
    about = "Count a term in each URL read from stdin; enter '!' to quit"
)]
pub struct DynamicWebCount {
    /// Literal text to count in every page, taken byte for byte
    #[arg(allow_hyphen_values = true)]
    pub term: OsString,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl Driver for DynamicWebCount {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let client = client_or_log(config);
        let stdin = io::stdin();
        let processed = run_session(stdin.lock(), out, |url| {
            fetch_once(
                client.as_ref(),
                FetchRequest::new(url, self.term.as_encoded_bytes()),
            )
        })?;
        debug!("Session ended after {} URL(s)", processed);
        Ok(())
    }
}

/// Reads whitespace-separated URLs from `input` and writes one result line
/// per URL, flushed before the next URL is read. Stops at [`STOP_SENTINEL`]
/// or end of input and returns how many URLs were processed.
///
/// Input is tokenized as bytes. A token that is not UTF-8 cannot be a URL and
/// reports a failure without being fetched.
pub fn run_session<R, W, F>(mut input: R, out: &mut W, mut fetch: F) -> Result<usize>
where
    R: BufRead,
    W: Write + ?Sized,
    F: FnMut(&str) -> FetchResult,
{
    let mut processed = 0;
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for token in line
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
        {
            if token == STOP_SENTINEL.as_bytes() {
                debug!("Stop sentinel read");
                return Ok(processed);
            }
            let result = match std::str::from_utf8(token) {
                Ok(url) => fetch(url),
                Err(e) => {
                    warn!(
                        "Not fetching {:?}: {}",
                        String::from_utf8_lossy(token),
                        e
                    );
                    FetchResult::Failure
                }
            };
            writeln!(out, "{result}")?;
            out.flush()?;
            processed += 1;
        }
    }
    debug!("End of input without stop sentinel");
    Ok(processed)
}
