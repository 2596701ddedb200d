//! Property-based tests for the overtime calculator.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;

use overtime_engine::calculation::compute_overtime;
use overtime_engine::models::{
    DayOfWeek, Holiday, HolidayCalendar, RegisteredInterval, ScheduleDirectory, ScheduleWindow,
};

/// Monday at the start of a plain week (2025-10-13 00:00).
fn week_anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 13)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn unscheduled_directory() -> ScheduleDirectory {
    let mut schedules = ScheduleDirectory::new();
    schedules.insert_shift("sin_horario", vec![]).unwrap();
    schedules
}

fn office_directory() -> ScheduleDirectory {
    let weekdays = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];
    let windows = weekdays
        .into_iter()
        .map(|weekday| ScheduleWindow {
            weekday,
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            active: true,
        })
        .collect();

    let mut schedules = ScheduleDirectory::new();
    schedules.insert_shift("turno_oficina", windows).unwrap();
    schedules
}

fn make_interval(shift_id: &str, start: NaiveDateTime, end: NaiveDateTime) -> RegisteredInterval {
    RegisteredInterval {
        employee_id: "emp_001".to_string(),
        shift_id: shift_id.to_string(),
        start,
        end,
    }
}

proptest! {
    /// With no scheduled windows at all, every minute of the interval is
    /// overtime: the bucket sum must equal the interval length exactly.
    #[test]
    fn prop_bucket_sum_equals_interval_minutes(
        offset in 0i64..10_080,
        duration in 1i64..4_320,
    ) {
        let start = week_anchor() + chrono::Duration::minutes(offset);
        let end = start + chrono::Duration::minutes(duration);
        let interval = make_interval("sin_horario", start, end);

        let breakdown = compute_overtime(
            &interval,
            &unscheduled_directory(),
            &HolidayCalendar::empty(),
        )
        .unwrap();

        prop_assert_eq!(breakdown.total_minutes(), duration as u64);
    }

    /// An interval fully contained in an active window produces zero
    /// overtime in every bucket.
    #[test]
    fn prop_in_window_interval_has_no_overtime(
        weekday_offset in 0i64..5,           // Monday..Friday
        start_minute in 540i64..1_020,       // 09:00..17:00
        duration in 1i64..480,
    ) {
        let duration = duration.min(1_020 - start_minute);
        let start = week_anchor()
            + chrono::Duration::days(weekday_offset)
            + chrono::Duration::minutes(start_minute);
        let end = start + chrono::Duration::minutes(duration);
        let interval = make_interval("turno_oficina", start, end);

        let breakdown = compute_overtime(
            &interval,
            &office_directory(),
            &HolidayCalendar::empty(),
        )
        .unwrap();

        prop_assert_eq!(breakdown.total_minutes(), 0);
    }

    /// The calculator is a pure function: identical inputs yield
    /// identical breakdowns.
    #[test]
    fn prop_calculation_is_idempotent(
        offset in 0i64..10_080,
        duration in 1i64..2_880,
    ) {
        let start = week_anchor() + chrono::Duration::minutes(offset);
        let end = start + chrono::Duration::minutes(duration);
        let interval = make_interval("turno_oficina", start, end);

        let schedules = office_directory();
        let holidays = HolidayCalendar::new(vec![Holiday {
            date: NaiveDate::from_ymd_opt(2025, 10, 17).unwrap(),
            name: "Festivo de prueba".to_string(),
        }]);

        let first = compute_overtime(&interval, &schedules, &holidays).unwrap();
        let second = compute_overtime(&interval, &schedules, &holidays).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Minutes on a Sunday or holiday never land in the night or day
    /// buckets, regardless of the hour.
    #[test]
    fn prop_sunday_minutes_never_split_into_other_buckets(
        start_minute in 0i64..1_440,
        duration in 1i64..240,
    ) {
        let duration = duration.min(1_440 - start_minute);
        // 2025-10-19 is the Sunday of the anchor week
        let start = week_anchor()
            + chrono::Duration::days(6)
            + chrono::Duration::minutes(start_minute);
        let end = start + chrono::Duration::minutes(duration);
        let interval = make_interval("turno_oficina", start, end);

        let breakdown = compute_overtime(
            &interval,
            &office_directory(),
            &HolidayCalendar::empty(),
        )
        .unwrap();

        prop_assert_eq!(breakdown.day_minutes, 0);
        prop_assert_eq!(breakdown.night_minutes, 0);
        prop_assert_eq!(breakdown.sunday_holiday_minutes, duration as u64);
    }
}
