//! Semantic validation of a merged configuration.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Largest accepted lock wait, one hour.
pub const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Checks values that parse but make no sense.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `maximum_lock_wait_seconds` is zero or larger
    /// than [`MAX_LOCK_WAIT_SECONDS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::config::{Config, ConfigValidator};
    ///
    /// assert!(ConfigValidator::validate(&Config::default()).is_ok());
    ///
    /// let zero = Config {
    ///     maximum_lock_wait_seconds: Some(0),
    ///     ..Default::default()
    /// };
    /// assert!(ConfigValidator::validate(&zero).is_err());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(seconds) = config.maximum_lock_wait_seconds {
            Self::validate_lock_wait(seconds)?;
        }
        Ok(())
    }

    fn validate_lock_wait(seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "must be greater than 0".into(),
            });
        }
        if seconds > MAX_LOCK_WAIT_SECONDS {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: format!("must be at most {MAX_LOCK_WAIT_SECONDS}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_lock_wait(seconds: u64) -> Config {
        Config {
            maximum_lock_wait_seconds: Some(seconds),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_lock_wait_bounds() {
        assert!(ConfigValidator::validate(&with_lock_wait(1)).is_ok());
        assert!(ConfigValidator::validate(&with_lock_wait(MAX_LOCK_WAIT_SECONDS)).is_ok());

        let err = ConfigValidator::validate(&with_lock_wait(0)).unwrap_err();
        assert!(format!("{err}").contains("maximum_lock_wait_seconds"));

        assert!(ConfigValidator::validate(&with_lock_wait(MAX_LOCK_WAIT_SECONDS + 1)).is_err());
    }
}
