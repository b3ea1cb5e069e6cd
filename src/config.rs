//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so an empty environment is a valid setup.

use crate::directory::DEFAULT_WINDOW_DAYS;
use crate::domain::parse_date;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Largest accepted look-ahead for the `birthdays` command.
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Fixed "today" for the `birthdays` command (default: the start date)
    pub today: Option<NaiveDate>,

    /// Days after today included in the birthdays report (default: 7)
    pub birthday_window_days: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_LOG_LEVEL`: one of trace, debug, info, warn, error, off
    /// - `ASSISTANT_TODAY`: date override in `DD.MM.YYYY` form
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: look-ahead in days, 0 to 365
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a broken one is not.
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(ConfigError::DotenvError(err.to_string()));
            }
        }

        let log_level = match env::var("ASSISTANT_LOG_LEVEL") {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ConfigError::InvalidValue {
                        var: "ASSISTANT_LOG_LEVEL".to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    });
                }
                level
            }
            Err(_) => "error".to_string(),
        };

        let today = match env::var("ASSISTANT_TODAY") {
            Ok(val) => Some(parse_date(val.trim()).ok_or_else(|| ConfigError::InvalidValue {
                var: "ASSISTANT_TODAY".to_string(),
                reason: format!("Must be a DD.MM.YYYY date, got: {}", val),
            })?),
            Err(_) => None,
        };

        let birthday_window_days =
            Self::parse_env_i64("ASSISTANT_BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(0..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            today,
            birthday_window_days,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            today: None,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}
