//! # Configuration
//!
//! Settings read from the environment, with a default for each.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `FOOD_DIARY_CHANNEL_CAPACITY` | `32` | record store mailbox size |
//! | `FOOD_DIARY_STORE_CAPACITY` | unset | max food entries kept; unset is unbounded |
//! | `FOOD_DIARY_LOG` | `info` | log filter used when `RUST_LOG` is unset |
//!
//! Loading runs before the subscriber is installed, so it logs nothing itself. Call
//! [`Config::log_defaults`] once tracing is up.

use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub const CHANNEL_CAPACITY_VAR: &str = "FOOD_DIARY_CHANNEL_CAPACITY";
pub const STORE_CAPACITY_VAR: &str = "FOOD_DIARY_STORE_CAPACITY";
pub const LOG_FILTER_VAR: &str = "FOOD_DIARY_LOG";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub channel_capacity: usize,
    pub store_capacity: Option<usize>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            store_capacity: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let channel_capacity =
            parse_or(&lookup, CHANNEL_CAPACITY_VAR, defaults.channel_capacity)?;
        if channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: CHANNEL_CAPACITY_VAR,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let store_capacity = match lookup(STORE_CAPACITY_VAR) {
            Some(raw) => Some(parse(STORE_CAPACITY_VAR, &raw)?),
            None => None,
        };

        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter);

        Ok(Self {
            channel_capacity,
            store_capacity,
            log_filter,
        })
    }

    /// Variables whose setting matches the built-in default.
    pub fn defaulted(&self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut keys = Vec::new();
        if self.channel_capacity == defaults.channel_capacity {
            keys.push(CHANNEL_CAPACITY_VAR);
        }
        if self.store_capacity == defaults.store_capacity {
            keys.push(STORE_CAPACITY_VAR);
        }
        if self.log_filter == defaults.log_filter {
            keys.push(LOG_FILTER_VAR);
        }
        keys
    }

    /// Logs each setting left at its default.
    pub fn log_defaults(&self) {
        for key in self.defaulted() {
            match key {
                CHANNEL_CAPACITY_VAR => {
                    info!("{key} not set, using default: {}", self.channel_capacity)
                }
                STORE_CAPACITY_VAR => info!("{key} not set, store is unbounded"),
                _ => info!("{key} not set, using default: {}", self.log_filter),
            }
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse(key, &raw),
        None => Ok(default),
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
