//! TOML-based application configuration.
//!
//! Holds:
//! - Store display settings
//! - Presenter refresh cadence and "closing soon" window
//! - The weekly opening-hours table, one entry per weekday
//!
//! Configuration is stored at `~/.config/openhours/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::availability::DEFAULT_CLOSING_SOON_MINUTES;
use crate::error::{ConfigError, CoreError, Result, ScheduleError};
use crate::format::parse_clock;
use crate::schedule::{DaySchedule, Weekday, WeeklySchedule};

/// Store display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,
}

/// How often and how eagerly a presenter refreshes status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenterConfig {
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u64,
    #[serde(default = "default_closing_soon_minutes")]
    pub closing_soon_minutes: u32,
}

/// Raw hours for one weekday as written in the config file.
///
/// `open` and `close` are 24-hour `"HH:MM"` strings and are required unless
/// `closed` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayEntry {
    #[serde(default)]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl DayEntry {
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    pub fn open(open: &str, close: &str) -> Self {
        Self {
            closed: false,
            open: Some(open.to_string()),
            close: Some(close.to_string()),
        }
    }

    /// Validate into a [`DaySchedule`].
    pub fn to_day_schedule(&self, weekday: Weekday) -> Result<DaySchedule, ScheduleError> {
        if self.closed {
            return Ok(DaySchedule::Closed);
        }
        let open = self
            .open
            .as_deref()
            .ok_or(ScheduleError::MissingBound {
                weekday,
                field: "open",
            })?;
        let close = self
            .close
            .as_deref()
            .ok_or(ScheduleError::MissingBound {
                weekday,
                field: "close",
            })?;
        DaySchedule::open(parse_clock(open)?, parse_clock(close)?)
    }
}

/// The `[hours]` table. Every weekday must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoursTable {
    pub sunday: Option<DayEntry>,
    pub monday: Option<DayEntry>,
    pub tuesday: Option<DayEntry>,
    pub wednesday: Option<DayEntry>,
    pub thursday: Option<DayEntry>,
    pub friday: Option<DayEntry>,
    pub saturday: Option<DayEntry>,
}

impl HoursTable {
    pub fn entry(&self, weekday: Weekday) -> Option<&DayEntry> {
        match weekday {
            Weekday::Sunday => self.sunday.as_ref(),
            Weekday::Monday => self.monday.as_ref(),
            Weekday::Tuesday => self.tuesday.as_ref(),
            Weekday::Wednesday => self.wednesday.as_ref(),
            Weekday::Thursday => self.thursday.as_ref(),
            Weekday::Friday => self.friday.as_ref(),
            Weekday::Saturday => self.saturday.as_ref(),
        }
    }

    /// Validate the whole table into a [`WeeklySchedule`].
    ///
    /// # Errors
    ///
    /// Returns the first weekday that is missing or whose hours are invalid.
    pub fn to_schedule(&self) -> Result<WeeklySchedule, ScheduleError> {
        let mut entries = Vec::with_capacity(7);
        for weekday in Weekday::ALL {
            if let Some(entry) = self.entry(weekday) {
                entries.push((weekday, entry.to_day_schedule(weekday)?));
            }
        }
        WeeklySchedule::from_entries(entries)
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/openhours/config.toml`. The
/// `[hours]` table has no default when absent from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub presenter: PresenterConfig,
    pub hours: HoursTable,
}

fn default_store_name() -> String {
    "My Store".into()
}
fn default_refresh_seconds() -> u64 {
    60
}
fn default_closing_soon_minutes() -> u32 {
    DEFAULT_CLOSING_SOON_MINUTES
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: default_refresh_seconds(),
            closing_soon_minutes: default_closing_soon_minutes(),
        }
    }
}

impl Default for HoursTable {
    /// Sunday closed, weekdays 08:00-22:00, Saturday 09:00-20:00.
    fn default() -> Self {
        let weekday = || Some(DayEntry::open("08:00", "22:00"));
        Self {
            sunday: Some(DayEntry::closed()),
            monday: weekday(),
            tuesday: weekday(),
            wednesday: weekday(),
            thursday: weekday(),
            friday: weekday(),
            saturday: Some(DayEntry::open("09:00", "20:00")),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Default config file location.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Parse a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, writing defaults");
            let cfg = Self::default();
            cfg.save_to(&path)?;
            return Ok(cfg);
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg = Self::parse(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| {
            CoreError::from(ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message,
            })
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Get a config value as string by dot-separated key, e.g.
    /// `presenter.refresh_seconds` or `hours.monday.open`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The validated weekly schedule from `[hours]`.
    pub fn schedule(&self) -> Result<WeeklySchedule, ScheduleError> {
        self.hours.to_schedule().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid opening hours in config");
        })
    }
}
