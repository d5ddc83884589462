use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Number of days in the weekly cycle.
pub const DAYS_PER_WEEK: u8 = 7;

/// Day of the week, numbered 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Build a weekday from its 0-based, Sunday-first index.
    pub fn from_index(index: u8) -> Result<Self, ScheduleError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ScheduleError::InvalidWeekday(index))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The weekday `days` after this one, wrapping around the week.
    pub fn offset(self, days: u8) -> Self {
        let index = (self.index() + days % DAYS_PER_WEEK) % DAYS_PER_WEEK;
        Self::ALL[usize::from(index)]
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        // num_days_from_sunday is always in 0..7
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ScheduleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
