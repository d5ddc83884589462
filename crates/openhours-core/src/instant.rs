//! A point in the weekly cycle.
//!
//! The caller localizes wall-clock time to the schedule's reference zone
//! and reduces it to a weekday plus minute-of-day. Nothing in this crate
//! reads the system clock.

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::error::ScheduleError;
use crate::schedule::{Weekday, MINUTES_PER_DAY};

/// Weekday plus minute-of-day in the schedule's reference zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Instant {
    weekday: Weekday,
    minute_of_day: u16,
}

impl Instant {
    pub fn new(weekday: Weekday, minute_of_day: u16) -> Result<Self, ScheduleError> {
        if minute_of_day >= MINUTES_PER_DAY {
            return Err(ScheduleError::BoundOutOfRange(minute_of_day));
        }
        Ok(Self {
            weekday,
            minute_of_day,
        })
    }

    /// Reduce an already-localized date-time to its weekday and minute.
    ///
    /// Works for `DateTime<Local>`, `DateTime<FixedOffset>`,
    /// `NaiveDateTime` and anything else carrying a date and a time of day.
    /// Seconds are truncated.
    pub fn from_datetime<T>(datetime: &T) -> Self
    where
        T: Datelike + Timelike,
    {
        // hour < 24 and minute < 60 always hold for chrono values
        let minute_of_day = (datetime.hour() * 60 + datetime.minute()) as u16;
        Self {
            weekday: Weekday::from(datetime.weekday()),
            minute_of_day,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }
}
