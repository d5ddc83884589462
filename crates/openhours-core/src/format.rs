//! Clock and duration formatting.
//!
//! Inputs are trusted: a minute-of-day at or past 1440 is a caller bug that
//! `OpenHours` and `Instant` construction already rule out.

use crate::error::ScheduleError;
use crate::schedule::MINUTES_PER_DAY;

/// Minute-of-day as a 12-hour clock, e.g. `"8:05 AM"`, `"12:00 PM"`.
pub fn format_clock(minute: u16) -> String {
    let hour = minute / 60;
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let period = if hour < 12 { "AM" } else { "PM" };
    format!("{}:{:02} {}", display_hour, minute % 60, period)
}

/// Minute count as `"{h}h {m}m"`, or just `"{m}m"` under an hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Parse a 24-hour `"HH:MM"` string into a minute-of-day.
pub fn parse_clock(value: &str) -> Result<u16, ScheduleError> {
    let invalid = || ScheduleError::InvalidClock(value.to_string());

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if minutes.len() != 2 || hours.is_empty() || hours.len() > 2 {
        return Err(invalid());
    }
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }

    let minute_of_day = hours * 60 + minutes;
    debug_assert!(minute_of_day < MINUTES_PER_DAY);
    Ok(minute_of_day)
}
