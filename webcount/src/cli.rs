// webcount/src/cli.rs
//! Argument handling shared by every webcount binary.
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, Parser};
use colored::Colorize;
use reqwest::blocking::Client;
use tracing::{debug, error, warn};
use webcount_common::config::Config;
use webcount_common::error::Result;
use webcount_common::model::{FetchRequest, FetchResult};
use webcount_net::{build_http_client, fetch_and_count};

use crate::logging;

pub mod dynamic;
pub mod sums;
pub mod web_count;
pub mod web_count_json;

/// Exit status for too few arguments.
pub const USAGE_EXIT_CODE: u8 = 1;

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// One binary's argument set plus what it does with them.
pub trait Driver: Parser {
    fn verbosity(&self) -> Verbosity;

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()>;
}

/// Parses arguments, sets up logging and runs the driver against stdout.
pub fn launch<D: Driver>() -> ExitCode {
    let driver = match D::try_parse() {
        Ok(driver) => driver,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", D::command().render_usage());
            return ExitCode::from(USAGE_EXIT_CODE);
        }
        Err(e) => e.exit(),
    };

    logging::init(driver.verbosity().verbose);

    let config = Config::load();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match driver.run(&config, &mut out) {
        Ok(()) => {
            debug!("Command completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Builds the client, logging instead of failing: a driver without a client
/// reports every request as failed.
pub(crate) fn client_or_log(config: &Config) -> Option<Client> {
    build_http_client(config)
        .map_err(|e| error!("{}", e))
        .ok()
}

/// A single fetch-and-count where bad input or a missing client is just
/// another failed request.
pub(crate) fn fetch_once(client: Option<&Client>, request: Result<FetchRequest>) -> FetchResult {
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            warn!("Not fetching: {}", e);
            return FetchResult::Failure;
        }
    };
    match client {
        Some(client) => fetch_and_count(client, &request),
        None => FetchResult::Failure,
    }
}
