//! `web_count <url> <term>`: print the count, or -1.
use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use webcount_common::config::Config;
use webcount_common::error::Result;
use webcount_common::model::FetchRequest;

use super::{client_or_log, fetch_once, Driver, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "web_count", version, about = "Count occurrences of a term in a web page")]
pub struct WebCount {
    /// URL to fetch (redirects are followed)
    pub url: String,

    /// Literal text to count, taken byte for byte; overlapping matches are
    /// included
    #[arg(allow_hyphen_values = true)]
    pub term: OsString,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl Driver for WebCount {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let client = client_or_log(config);
        let result = fetch_once(
            client.as_ref(),
            FetchRequest::new(self.url.as_str(), self.term.as_encoded_bytes()),
        );
        writeln!(out, "{result}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_term() {
        let args = WebCount::try_parse_from(["web_count", "http://a.test/", "word"]).unwrap();
        assert_eq!(args.url, "http://a.test/");
        assert_eq!(args.term, OsString::from("word"));
        assert_eq!(args.verbosity.verbose, 0);
    }

    #[test]
    fn missing_term_is_a_missing_argument() {
        let err = WebCount::try_parse_from(["web_count", "http://a.test/"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unreachable_url_prints_sentinel_line() {
        let args = WebCount::try_parse_from(["web_count", "ftp://a.test/", "x"]).unwrap();
        let mut out = Vec::new();
        args.run(&Config::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-1\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_term_is_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let term = OsString::from_vec(vec![b'a', 0xff]);
        let args =
            WebCount::try_parse_from([OsString::from("web_count"), "http://a.test/".into(), term])
                .unwrap();
        assert_eq!(args.term.as_encoded_bytes(), b"a\xff");
    }
}
