use std::io::Write;

use clap::Parser;
use webcount_common::config::Config;
use webcount_common::error::Result;
use webcount_common::model::{SignalEnvelope, SumOperands};
use webcount_core::parse_sum_fragment;

use super::{Driver, Verbosity};

/// `sums <a> <b>`
#[derive(Parser, Debug)]
#[command(name = "sums", version, about = "Print the sum of two integers")]
pub struct Sums {
    #[arg(allow_negative_numbers = true)]
    pub a: i64,
    #[arg(allow_negative_numbers = true)]
    pub b: i64,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl Driver for Sums {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn run(&self, _config: &Config, out: &mut dyn Write) -> Result<()> {
        let sum = SumOperands::new(self.a, self.b).sum();
        tracing::debug!("{} + {} = {}", self.a, self.b, sum);
        writeln!(out, "{sum}")?;
        Ok(())
    }
}

/// `sums_json '{"data": a,b}'`
#[derive(Parser, Debug)]
#[command(
    name = "sums_json",
    version,
    about = "Sum two integers given as one JSON-shaped argument"
)]
pub struct SumsJson {
    /// `[a, b]`, `{"data": [a, b]}` or `{"data": a,b}`
    #[arg(allow_hyphen_values = true)]
    pub fragment: String,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl Driver for SumsJson {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn run(&self, _config: &Config, out: &mut dyn Write) -> Result<()> {
        let operands = parse_sum_fragment(&self.fragment)?;
        writeln!(out, "{}", SignalEnvelope(operands.sum()))?;
        Ok(())
    }
}
