//! Core error types for openhours-core.
//!
//! All failure modes live at construction time: once a `WeeklySchedule`
//! and an `Instant` exist, evaluation and formatting cannot fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::schedule::Weekday;

/// Core error type for openhours-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Schedule construction errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building a weekly schedule or an instant.
///
/// These are caller bugs to be fixed at the configuration source; none of
/// them is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Same weekday listed twice
    #[error("Duplicate entry for {0}")]
    DuplicateWeekday(Weekday),

    /// A weekday has no entry
    #[error("Missing entry for {0}")]
    MissingWeekday(Weekday),

    /// Close is not after open
    #[error("Invalid interval: close ({close}) must be greater than open ({open})")]
    InvalidInterval { open: u16, close: u16 },

    /// Bound outside of a day
    #[error("Minute {0} is outside of [0, 1440)")]
    BoundOutOfRange(u16),

    /// Weekday index outside 0..=6
    #[error("Invalid weekday index {0}, expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(u8),

    /// Clock string that is not HH:MM
    #[error("Invalid clock time '{0}', expected HH:MM")]
    InvalidClock(String),

    /// Open day without one of its bounds
    #[error("{weekday} is not closed but has no '{field}' time")]
    MissingBound {
        weekday: Weekday,
        field: &'static str,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
