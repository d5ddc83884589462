//! Human-readable weekly hours table.

use serde::{Deserialize, Serialize};

use crate::format::format_clock;
use crate::schedule::{DaySchedule, Weekday, WeeklySchedule};

/// One row of the weekly hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub weekday: Weekday,
    pub day_name: String,
    pub is_closed: bool,
    /// `"8:00 AM - 10:00 PM"` or `"Closed"`.
    pub label: String,
}

/// The week as display rows, Sunday first.
pub fn week_overview(schedule: &WeeklySchedule) -> Vec<DayHours> {
    Weekday::ALL
        .into_iter()
        .map(|weekday| {
            let day = schedule.schedule_for(weekday);
            let label = match day {
                DaySchedule::Closed => "Closed".to_string(),
                DaySchedule::Open(hours) => format!(
                    "{} - {}",
                    format_clock(hours.open()),
                    format_clock(hours.close())
                ),
            };
            DayHours {
                weekday,
                day_name: weekday.name().to_string(),
                is_closed: day.is_closed(),
                label,
            }
        })
        .collect()
}
