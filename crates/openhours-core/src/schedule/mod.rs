//! Weekly operating-hours model.
//!
//! A [`WeeklySchedule`] holds exactly one [`DaySchedule`] per weekday. An
//! open day carries an [`OpenHours`] interval that can only be built through
//! a validating constructor, so a schedule that exists is always well formed.

mod weekday;

pub use weekday::{Weekday, DAYS_PER_WEEK};

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Minutes in one day; every minute-of-day lies in `[0, MINUTES_PER_DAY)`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Open interval of a single day, `[open, close)` in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOpenHours")]
pub struct OpenHours {
    open: u16,
    close: u16,
}

#[derive(Deserialize)]
struct RawOpenHours {
    open: u16,
    close: u16,
}

impl TryFrom<RawOpenHours> for OpenHours {
    type Error = ScheduleError;

    fn try_from(raw: RawOpenHours) -> Result<Self, Self::Error> {
        OpenHours::new(raw.open, raw.close)
    }
}

impl OpenHours {
    /// Validate and build an interval.
    ///
    /// Both bounds must lie within the day and `close` must be strictly
    /// after `open`.
    pub fn new(open: u16, close: u16) -> Result<Self, ScheduleError> {
        for bound in [open, close] {
            if bound >= MINUTES_PER_DAY {
                return Err(ScheduleError::BoundOutOfRange(bound));
            }
        }
        if close <= open {
            return Err(ScheduleError::InvalidInterval { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> u16 {
        self.open
    }

    pub fn close(&self) -> u16 {
        self.close
    }

    /// Whether `minute` falls inside `[open, close)`.
    pub fn contains(&self, minute: u16) -> bool {
        self.open <= minute && minute < self.close
    }

    pub fn duration_minutes(&self) -> u16 {
        self.close - self.open
    }
}

/// What a single weekday looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DaySchedule {
    Closed,
    Open(OpenHours),
}

impl DaySchedule {
    /// Shorthand for an open day; fails like [`OpenHours::new`].
    pub fn open(open: u16, close: u16) -> Result<Self, ScheduleError> {
        OpenHours::new(open, close).map(DaySchedule::Open)
    }

    pub fn hours(&self) -> Option<OpenHours> {
        match self {
            DaySchedule::Closed => None,
            DaySchedule::Open(hours) => Some(*hours),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DaySchedule::Closed)
    }
}

/// Immutable weekly schedule, one entry per weekday indexed Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    /// Build from a full week, `days[0]` being Sunday.
    pub fn new(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    /// Build from `(weekday, schedule)` pairs in any order.
    ///
    /// Every weekday must appear exactly once. Nothing is assumed for a
    /// missing day.
    pub fn from_entries<I>(entries: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = (Weekday, DaySchedule)>,
    {
        let mut slots: [Option<DaySchedule>; 7] = [None; 7];

        for (weekday, day) in entries {
            let slot = &mut slots[usize::from(weekday.index())];
            if slot.is_some() {
                tracing::warn!(%weekday, "rejecting schedule with duplicate weekday");
                return Err(ScheduleError::DuplicateWeekday(weekday));
            }
            *slot = Some(day);
        }

        // Typed weekday keys: with duplicates ruled out, a wrong entry count
        // always shows up as an empty slot.
        let mut days = [DaySchedule::Closed; 7];
        for ((weekday, day), slot) in Weekday::ALL.into_iter().zip(days.iter_mut()).zip(slots) {
            *day = slot.ok_or_else(|| {
                tracing::warn!(%weekday, "rejecting incomplete schedule");
                ScheduleError::MissingWeekday(weekday)
            })?;
        }
        Ok(Self { days })
    }

    pub fn schedule_for(&self, weekday: Weekday) -> DaySchedule {
        self.days[usize::from(weekday.index())]
    }

    /// Weekdays with opening hours, Sunday first.
    pub fn open_days(&self) -> impl Iterator<Item = (Weekday, OpenHours)> + '_ {
        Weekday::ALL
            .into_iter()
            .filter_map(|day| self.schedule_for(day).hours().map(|hours| (day, hours)))
    }

    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(DaySchedule::is_closed)
    }

    /// Full week in index order, Sunday first.
    pub fn days(&self) -> &[DaySchedule; 7] {
        &self.days
    }
}
