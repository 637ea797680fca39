//! Environment variable handling for configuration overrides.
//!
//! `HOTEL_*` variables override every file-based source.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Overrides `maximum_lock_wait_seconds`.
pub const LOCK_WAIT_ENV: &str = "HOTEL_MAXIMUM_LOCK_WAIT_SECONDS";

/// Overrides `disable_autoinit`.
pub const DISABLE_AUTOINIT_ENV: &str = "HOTEL_DISABLE_AUTOINIT";

/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "HOTEL_OUTPUT_FORMAT";

/// Applies `HOTEL_*` environment variables to a configuration.
///
/// # Examples
///
/// ```no_run
/// use hotel::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse
    /// (a non-numeric lock wait, an unknown format, an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "must be a non-negative integer".into(),
                })?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(val.parse::<OutputFormat>().map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            config.log_level = Some(LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }

    /// Parses a boolean environment value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `var` for any other value.
    pub fn parse_bool(var: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: var.into(),
                message: format!("invalid boolean value: {value}"),
            }),
        }
    }
}
