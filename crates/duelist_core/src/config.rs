//! Refresh configuration.
//!
//! # Responsibility
//! - Describe how often the refresh driver republishes the current time.
//! - Validate user-supplied refresh settings before a driver starts.
//!
//! # Invariants
//! - A validated config carries an interval in `1..=MAX_REFRESH_INTERVAL_SECS`.
//! - Missing fields fall back to the 60 second fixed cadence.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Default refresh cadence in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Longest accepted refresh cadence (one day).
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Scheduling strategy for refresh ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMode {
    /// Tick every `interval_secs`.
    #[default]
    Fixed,
    /// Sleep until the next local midnight, but never longer than `interval_secs`.
    Midnight,
}

/// Refresh driver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefreshConfig {
    pub interval_secs: u64,
    pub mode: RefreshMode,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            mode: RefreshMode::Fixed,
        }
    }
}

impl RefreshConfig {
    /// Creates a fixed-cadence config with the given interval.
    pub fn fixed(interval_secs: u64) -> Self {
        Self {
            interval_secs,
            mode: RefreshMode::Fixed,
        }
    }

    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - Returns [`ConfigError::Malformed`] for invalid JSON or unknown fields.
    /// - Returns [`ConfigError::ZeroInterval`] when `interval_secs` is `0`.
    /// - Returns [`ConfigError::IntervalTooLarge`] above one day.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the config can drive a timer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.interval_secs > MAX_REFRESH_INTERVAL_SECS {
            return Err(ConfigError::IntervalTooLarge(self.interval_secs));
        }
        Ok(())
    }

    /// Returns the tick interval (upper bound in midnight mode).
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ZeroInterval,
    IntervalTooLarge(u64),
    Malformed(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroInterval => write!(f, "refresh interval_secs must be greater than 0"),
            Self::IntervalTooLarge(secs) => write!(
                f,
                "refresh interval_secs {secs} exceeds the maximum of {MAX_REFRESH_INTERVAL_SECS}"
            ),
            Self::Malformed(err) => write!(f, "malformed refresh config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroInterval | Self::IntervalTooLarge(_) => None,
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}
