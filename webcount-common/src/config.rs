// webcount-common/src/config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_REDIRECTS: usize = 10;

pub const ENV_TIMEOUT_SECS: &str = "WEBCOUNT_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "WEBCOUNT_CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_REDIRECTS: &str = "WEBCOUNT_MAX_REDIRECTS";
pub const ENV_USER_AGENT: &str = "WEBCOUNT_USER_AGENT";

/// Settings for the HTTP side of the utilities. Everything has a default, the
/// environment only overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Config {
    /// Reads the process environment. Bad values are logged and replaced by
    /// their defaults, so loading cannot fail.
    pub fn load() -> Self {
        debug!("Loading webcount configuration");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = parse_var(&lookup, ENV_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let connect_timeout = parse_var(&lookup, ENV_CONNECT_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout);
        let max_redirects = match parse_var::<_, usize>(&lookup, ENV_MAX_REDIRECTS) {
            Some(0) => {
                warn!(
                    "Ignoring {}=0: redirects are always followed, using default",
                    ENV_MAX_REDIRECTS
                );
                defaults.max_redirects
            }
            Some(limit) => limit,
            None => defaults.max_redirects,
        };
        let user_agent = lookup(ENV_USER_AGENT)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        debug!(
            "Effective config: timeout={:?}, connect_timeout={:?}, max_redirects={}, user_agent={}",
            timeout, connect_timeout, max_redirects, user_agent
        );
        Self {
            timeout,
            connect_timeout,
            max_redirects,
            user_agent,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: format!("webcount/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key).filter(|s| !s.trim().is_empty())?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number, using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_redirects, 10);
        assert!(config.user_agent.starts_with("webcount/"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_CONNECT_TIMEOUT_SECS, " 2 "),
            (ENV_MAX_REDIRECTS, "3"),
            (ENV_USER_AGENT, "tester/1.0"),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.user_agent, "tester/1.0");
    }

    #[test]
    fn garbage_and_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_MAX_REDIRECTS, "-3"),
            (ENV_USER_AGENT, "   "),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_redirect_limit_keeps_following() {
        let config = Config::from_lookup(lookup_from(&[(ENV_MAX_REDIRECTS, "0")]));
        assert_eq!(config.max_redirects, 10);
    }
}
