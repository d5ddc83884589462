//! # openhours Core Library
//!
//! Weekly operating-hours model and availability evaluator for storefronts.
//! Given a weekday and minute-of-day already localized to the store's zone,
//! it reports whether the store is open, when that changes next, and a
//! status line suitable for display.
//!
//! ## Architecture
//!
//! - **Schedule**: immutable week of open/closed days, validated on
//!   construction
//! - **Format**: 12-hour clock and `"Xh Ym"` duration strings
//! - **Availability**: pure evaluator producing a [`StatusDescriptor`]
//! - **Storage**: TOML configuration holding the hours table
//!
//! Evaluation never reads the clock; presenters sample time and call
//! [`evaluate`] on their own cadence.

pub mod availability;
pub mod error;
pub mod format;
pub mod instant;
pub mod overview;
pub mod schedule;
pub mod storage;

pub use availability::{evaluate, StatusDescriptor, StatusTone, DEFAULT_CLOSING_SOON_MINUTES};
pub use error::{ConfigError, CoreError, ScheduleError};
pub use format::{format_clock, format_duration, parse_clock};
pub use instant::Instant;
pub use overview::{week_overview, DayHours};
pub use schedule::{DaySchedule, OpenHours, Weekday, WeeklySchedule, MINUTES_PER_DAY};
pub use storage::{Config, DayEntry, HoursTable};
