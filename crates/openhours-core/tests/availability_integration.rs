//! Integration tests for the availability evaluator.

use openhours_core::{
    evaluate, format_duration, Config, DaySchedule, Instant, Weekday, WeeklySchedule,
};
use proptest::prelude::*;

fn at(weekday: Weekday, hour: u16, minute: u16) -> Instant {
    Instant::new(weekday, hour * 60 + minute).unwrap()
}

fn week_with(entries: &[(Weekday, DaySchedule)]) -> WeeklySchedule {
    let mut days = [DaySchedule::Closed; 7];
    for (weekday, day) in entries {
        days[weekday.index() as usize] = *day;
    }
    WeeklySchedule::new(days)
}

fn eight_to_ten() -> DaySchedule {
    DaySchedule::open(8 * 60, 22 * 60).unwrap()
}

#[test]
fn scenario_open_with_same_day_close() {
    let schedule = week_with(&[(Weekday::Monday, eight_to_ten())]);
    let status = evaluate(at(Weekday::Monday, 9, 0), &schedule);

    assert!(status.is_open);
    assert_eq!(status.message, "Open - Closes at 10:00 PM");
    assert_eq!(status.time_until_label, "13h 0m");
    assert_eq!(status.minutes_until_transition, Some(13 * 60));
}

#[test]
fn scenario_closed_day_opens_tomorrow() {
    let schedule = week_with(&[(Weekday::Monday, eight_to_ten())]);
    let status = evaluate(at(Weekday::Sunday, 10, 0), &schedule);

    assert!(!status.is_open);
    assert_eq!(status.message, "Closed - Opens tomorrow at 8:00 AM");
    assert_eq!(status.time_until_label, "22h 0m");
    assert_eq!(status.minutes_until_transition, Some(22 * 60));
}

#[test]
fn scenario_past_close_opens_tomorrow() {
    let schedule = week_with(&[
        (Weekday::Monday, eight_to_ten()),
        (Weekday::Tuesday, eight_to_ten()),
    ]);
    let status = evaluate(at(Weekday::Monday, 23, 30), &schedule);

    assert!(!status.is_open);
    assert_eq!(status.message, "Closed - Opens tomorrow at 8:00 AM");
    assert_eq!(status.time_until_label, "8h 30m");
}

#[test]
fn scenario_never_open() {
    let schedule = WeeklySchedule::new([DaySchedule::Closed; 7]);
    for weekday in Weekday::ALL {
        let status = evaluate(at(weekday, 12, 0), &schedule);
        assert!(!status.is_open);
        assert_eq!(status.message, "Permanently closed");
        assert_eq!(status.time_until_label, "N/A");
        assert_eq!(status.minutes_until_transition, None);
    }
}

#[test]
fn scenario_one_minute_before_close() {
    let schedule = week_with(&[(
        Weekday::Saturday,
        DaySchedule::open(9 * 60, 20 * 60).unwrap(),
    )]);
    let status = evaluate(at(Weekday::Saturday, 19, 59), &schedule);

    assert!(status.is_open);
    assert_eq!(status.minutes_until_transition, Some(1));
    assert_eq!(status.time_until_label, "1m");
}

#[test]
fn later_opening_uses_weekday_name_and_day_count() {
    let schedule = week_with(&[(Weekday::Thursday, eight_to_ten())]);
    let status = evaluate(at(Weekday::Monday, 12, 0), &schedule);

    assert_eq!(status.message, "Closed - Opens Thursday at 8:00 AM");
    assert_eq!(status.time_until_label, "3 days");
    assert_eq!(
        status.minutes_until_transition,
        Some(12 * 60 + 2 * 1440 + 8 * 60)
    );
}

#[test]
fn default_config_drives_evaluation() {
    let schedule = Config::default().schedule().unwrap();

    let sunday = evaluate(at(Weekday::Sunday, 10, 0), &schedule);
    assert_eq!(sunday.message, "Closed - Opens tomorrow at 8:00 AM");

    let saturday = evaluate(at(Weekday::Saturday, 19, 59), &schedule);
    assert!(saturday.is_open);
    assert_eq!(saturday.time_until_label, "1m");
}

fn day_schedule() -> impl Strategy<Value = DaySchedule> {
    prop_oneof![
        Just(DaySchedule::Closed),
        (0u16..1439)
            .prop_flat_map(|open| (Just(open), open + 1..1440))
            .prop_map(|(open, close)| DaySchedule::open(open, close).unwrap()),
    ]
}

fn weekly_schedule() -> impl Strategy<Value = WeeklySchedule> {
    prop::array::uniform7(day_schedule()).prop_map(WeeklySchedule::new)
}

fn weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|i| Weekday::from_index(i).unwrap())
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        schedule in weekly_schedule(),
        day in weekday(),
        minute in 0u16..1440,
    ) {
        let now = Instant::new(day, minute).unwrap();
        prop_assert_eq!(evaluate(now, &schedule), evaluate(now, &schedule));
    }

    #[test]
    fn open_bound_inclusive_close_bound_exclusive(
        schedule in weekly_schedule(),
        day in weekday(),
    ) {
        if let Some(hours) = schedule.schedule_for(day).hours() {
            let at_open = evaluate(Instant::new(day, hours.open()).unwrap(), &schedule);
            prop_assert!(at_open.is_open);
            let at_close = evaluate(Instant::new(day, hours.close()).unwrap(), &schedule);
            prop_assert!(!at_close.is_open);
        }
    }

    #[test]
    fn open_status_counts_down_to_close(
        schedule in weekly_schedule(),
        day in weekday(),
        minute in 0u16..1440,
    ) {
        let status = evaluate(Instant::new(day, minute).unwrap(), &schedule);
        if status.is_open {
            let hours = schedule.schedule_for(day).hours().unwrap();
            prop_assert_eq!(
                status.minutes_until_transition,
                Some(u32::from(hours.close() - minute))
            );
        }
        prop_assert_eq!(
            status.minutes_until_transition.is_none(),
            schedule.is_always_closed()
        );
    }

    #[test]
    fn transition_never_exceeds_a_week(
        schedule in weekly_schedule(),
        day in weekday(),
        minute in 0u16..1440,
    ) {
        let status = evaluate(Instant::new(day, minute).unwrap(), &schedule);
        if let Some(minutes) = status.minutes_until_transition {
            prop_assert!(minutes > 0);
            prop_assert!(minutes <= 7 * 1440);
        }
    }

    #[test]
    fn duration_label_shape(hours in 0u32..200, minutes in 0u32..60) {
        let expected = if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        };
        prop_assert_eq!(format_duration(hours * 60 + minutes), expected);
    }
}
