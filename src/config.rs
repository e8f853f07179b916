use std::str::FromStr;

use crate::error::{Error, Result};
use crate::factorial::Mode;

pub const N_KEY: &str = "JFACTORIAL_N";
pub const MODE_KEY: &str = "JFACTORIAL_MODE";
pub const LOG_KEY: &str = "RUST_LOG";

pub const DEFAULT_N: i32 = 10;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_n: i32,
    pub mode: Mode,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_n: DEFAULT_N,
            mode: Mode::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    ///
    /// Variables already present in the environment win over `.env`.
    pub fn from_env() -> Result<Config> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Config {
            default_n: parse_var(&lookup, N_KEY)?.unwrap_or(defaults.default_n),
            mode: parse_var(&lookup, MODE_KEY)?.unwrap_or(defaults.mode),
            log_filter: lookup(LOG_KEY)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        })
    }

    /// Applies command line overrides on top of this configuration.
    pub fn with_overrides(self, n: Option<i32>, mode: Option<Mode>) -> Config {
        Config {
            default_n: n.unwrap_or(self.default_n),
            mode: mode.unwrap_or(self.mode),
            ..self
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::InvalidConfig {
                key: key.to_owned(),
                value,
            }),
    }
}
