//! Open/closed status for a weekly schedule.
//!
//! [`evaluate`] is a pure function of an [`Instant`] and a
//! [`WeeklySchedule`]. Presenters call it on their own cadence with a freshly
//! sampled instant; nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::format::{format_clock, format_duration};
use crate::instant::Instant;
use crate::schedule::{DaySchedule, WeeklySchedule, DAYS_PER_WEEK, MINUTES_PER_DAY};

/// Default window, in minutes before close, treated as "closing soon".
pub const DEFAULT_CLOSING_SOON_MINUTES: u32 = 30;

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDescriptor {
    pub is_open: bool,
    /// Minutes until the next open/close transition; `None` when the
    /// schedule never opens.
    pub minutes_until_transition: Option<u32>,
    pub message: String,
    pub time_until_label: String,
}

/// Badge state for presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Open,
    ClosingSoon,
    Closed,
}

impl StatusDescriptor {
    /// Badge state, with `ClosingSoon` for the last `closing_soon_minutes`
    /// of an open interval.
    pub fn tone(&self, closing_soon_minutes: u32) -> StatusTone {
        match (self.is_open, self.minutes_until_transition) {
            (true, Some(minutes)) if minutes <= closing_soon_minutes => StatusTone::ClosingSoon,
            (true, _) => StatusTone::Open,
            (false, _) => StatusTone::Closed,
        }
    }

    /// Whether the schedule has no open day at all.
    pub fn is_permanently_closed(&self) -> bool {
        !self.is_open && self.minutes_until_transition.is_none()
    }
}

/// Evaluate the schedule at `now`.
///
/// The open bound is inclusive and the close bound exclusive. When the
/// business is closed for the rest of today, the following seven days are
/// searched for the next opening. An opening tomorrow gets a full countdown
/// label; anything later is labelled in whole days.
pub fn evaluate(now: Instant, schedule: &WeeklySchedule) -> StatusDescriptor {
    let minute = now.minute_of_day();

    if let DaySchedule::Open(hours) = schedule.schedule_for(now.weekday()) {
        if hours.contains(minute) {
            let remaining = u32::from(hours.close() - minute);
            tracing::trace!(weekday = %now.weekday(), minute, remaining, "open");
            return StatusDescriptor {
                is_open: true,
                minutes_until_transition: Some(remaining),
                message: format!("Open - Closes at {}", format_clock(hours.close())),
                time_until_label: format_duration(remaining),
            };
        }
        if minute < hours.open() {
            let remaining = u32::from(hours.open() - minute);
            tracing::trace!(weekday = %now.weekday(), minute, remaining, "opens later today");
            return StatusDescriptor {
                is_open: false,
                minutes_until_transition: Some(remaining),
                message: format!("Closed - Opens at {}", format_clock(hours.open())),
                time_until_label: format_duration(remaining),
            };
        }
    }

    for days_ahead in 1..=DAYS_PER_WEEK {
        let weekday = now.weekday().offset(days_ahead);
        let Some(hours) = schedule.schedule_for(weekday).hours() else {
            continue;
        };

        let remaining = u32::from(MINUTES_PER_DAY - minute)
            + u32::from(days_ahead - 1) * u32::from(MINUTES_PER_DAY)
            + u32::from(hours.open());
        let opens_at = format_clock(hours.open());
        tracing::trace!(%weekday, days_ahead, remaining, "next opening");

        let (message, time_until_label) = if days_ahead == 1 {
            (
                format!("Closed - Opens tomorrow at {}", opens_at),
                format_duration(remaining),
            )
        } else {
            (
                format!("Closed - Opens {} at {}", weekday, opens_at),
                format!("{} days", days_ahead),
            )
        };

        return StatusDescriptor {
            is_open: false,
            minutes_until_transition: Some(remaining),
            message,
            time_until_label,
        };
    }

    StatusDescriptor {
        is_open: false,
        minutes_until_transition: None,
        message: "Permanently closed".to_string(),
        time_until_label: "N/A".to_string(),
    }
}

impl WeeklySchedule {
    /// Shorthand for [`evaluate`].
    pub fn status_at(&self, now: Instant) -> StatusDescriptor {
        evaluate(now, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Weekday;

    fn at(weekday: Weekday, hour: u16, minute: u16) -> Instant {
        Instant::new(weekday, hour * 60 + minute).unwrap()
    }

    fn hours(open_hour: u16, close_hour: u16) -> DaySchedule {
        DaySchedule::open(open_hour * 60, close_hour * 60).unwrap()
    }

    /// Sunday closed, weekdays 08-22, Saturday 09-20.
    fn pharmacy() -> WeeklySchedule {
        WeeklySchedule::new([
            DaySchedule::Closed,
            hours(8, 22),
            hours(8, 22),
            hours(8, 22),
            hours(8, 22),
            hours(8, 22),
            hours(9, 20),
        ])
    }

    #[test]
    fn open_reports_close_time() {
        let status = evaluate(at(Weekday::Wednesday, 21, 15), &pharmacy());
        assert!(status.is_open);
        assert_eq!(status.minutes_until_transition, Some(45));
        assert_eq!(status.message, "Open - Closes at 10:00 PM");
        assert_eq!(status.time_until_label, "45m");
    }

    #[test]
    fn before_open_reports_same_day_opening() {
        let status = evaluate(at(Weekday::Tuesday, 6, 30), &pharmacy());
        assert!(!status.is_open);
        assert_eq!(status.minutes_until_transition, Some(90));
        assert_eq!(status.message, "Closed - Opens at 8:00 AM");
        assert_eq!(status.time_until_label, "1h 30m");
    }

    #[test]
    fn exactly_at_open_is_open() {
        let status = evaluate(at(Weekday::Monday, 8, 0), &pharmacy());
        assert!(status.is_open);
        assert_eq!(status.minutes_until_transition, Some(14 * 60));
    }

    #[test]
    fn exactly_at_close_is_closed() {
        let status = evaluate(at(Weekday::Monday, 22, 0), &pharmacy());
        assert!(!status.is_open);
        assert_eq!(status.message, "Closed - Opens tomorrow at 8:00 AM");
        assert_eq!(status.minutes_until_transition, Some(120 + 480));
        assert_eq!(status.time_until_label, "10h 0m");
    }

    #[test]
    fn saturday_evening_skips_closed_sunday() {
        let status = evaluate(at(Weekday::Saturday, 21, 0), &pharmacy());
        assert!(!status.is_open);
        assert_eq!(status.message, "Closed - Opens Monday at 8:00 AM");
        assert_eq!(status.time_until_label, "2 days");
        assert_eq!(status.minutes_until_transition, Some(180 + 1440 + 480));
    }

    #[test]
    fn single_open_day_wraps_a_full_week() {
        let mut days = [DaySchedule::Closed; 7];
        days[Weekday::Wednesday.index() as usize] = hours(10, 12);
        let schedule = WeeklySchedule::new(days);

        let status = evaluate(at(Weekday::Wednesday, 13, 0), &schedule);
        assert_eq!(status.message, "Closed - Opens Wednesday at 10:00 AM");
        assert_eq!(status.time_until_label, "7 days");
        assert_eq!(
            status.minutes_until_transition,
            Some(660 + 6 * 1440 + 600)
        );
    }

    #[test]
    fn never_open_is_permanently_closed() {
        let schedule = WeeklySchedule::new([DaySchedule::Closed; 7]);
        let status = evaluate(at(Weekday::Friday, 12, 0), &schedule);
        assert!(status.is_permanently_closed());
        assert_eq!(status.message, "Permanently closed");
        assert_eq!(status.time_until_label, "N/A");
        assert_eq!(status.tone(30), StatusTone::Closed);
    }

    #[test]
    fn tone_flags_closing_soon() {
        let schedule = pharmacy();
        assert_eq!(
            evaluate(at(Weekday::Monday, 21, 30), &schedule).tone(30),
            StatusTone::ClosingSoon
        );
        assert_eq!(
            evaluate(at(Weekday::Monday, 21, 29), &schedule).tone(30),
            StatusTone::Open
        );
        assert_eq!(
            evaluate(at(Weekday::Monday, 7, 59), &schedule).tone(30),
            StatusTone::Closed
        );
    }

    #[test]
    fn status_at_matches_evaluate() {
        let schedule = pharmacy();
        let now = at(Weekday::Thursday, 12, 0);
        assert_eq!(schedule.status_at(now), evaluate(now, &schedule));
    }
}
