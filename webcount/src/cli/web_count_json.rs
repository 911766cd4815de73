//! `web_count_json '["<url>","<term>"]'`: print `{"data": <count>}`.
use std::io::Write;

use clap::Parser;
use webcount_common::config::Config;
use webcount_common::error::Result;
use webcount_common::model::{DataEnvelope, FetchRequest};

use super::{client_or_log, fetch_once, Driver, Verbosity};

#[derive(Parser, Debug)]
#[command(
    name = "web_count_json",
    version,
    about = "Count occurrences of a term in a web page, JSON in and out"
)]
pub struct WebCountJson {
    /// Two-element JSON array: ["<url>","<term>"]
    #[arg(allow_hyphen_values = true)]
    pub request: String,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl Driver for WebCountJson {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let request = FetchRequest::from_json_arg(&self.request);
        // An argument that does not decode never reaches the network.
        let client = if request.is_ok() {
            client_or_log(config)
        } else {
            None
        };
        let result = fetch_once(client.as_ref(), request);
        write!(out, "{}", DataEnvelope(result))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(arg: &str) -> String {
        let args = WebCountJson::try_parse_from(["web_count_json", arg]).unwrap();
        let mut out = Vec::new();
        args.run(&Config::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn undecodable_argument_reports_failure() {
        assert_eq!(run_with("[\"http://a.test/\""), r#"{"data": -1}"#);
        assert_eq!(run_with("http://a.test/,word"), r#"{"data": -1}"#);
    }

    #[test]
    fn rejected_scheme_reports_failure() {
        assert_eq!(run_with(r#"["gopher://a.test/","word"]"#), r#"{"data": -1}"#);
    }
}
