//! The overtime calculator.
//!
//! Orchestrates the full computation: interval validation, midnight
//! splitting, per-minute classification against each day's own schedule,
//! and assembly of the categorized breakdown.

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{
    DayOfWeek, HolidayCalendar, OvertimeBreakdown, RegisteredInterval, ScheduleDirectory,
    ScheduleWindow,
};

use super::calendar::truncate_to_minute;
use super::classifier::{OvertimeCategory, classify_minute};
use super::segment::split_by_day;

/// Computes the categorized overtime breakdown for a registered interval.
///
/// The interval is truncated to whole minutes, split at midnight
/// boundaries, and every minute in `[start, end)` is classified against
/// the schedule windows of its own weekday. Minutes inside a scheduled
/// window are regular time; every other minute lands in exactly one
/// overtime bucket (Sunday/holiday over night over day).
///
/// Schedule windows are fetched lazily, one weekday at a time, and cached
/// for the duration of the call, so a multi-day interval revisiting a
/// weekday performs a single lookup.
///
/// # Errors
///
/// - [`EngineError::InvalidInterval`](crate::error::EngineError::InvalidInterval)
///   if the start is not strictly before the end.
/// - [`EngineError::ShiftNotFound`](crate::error::EngineError::ShiftNotFound)
///   if the interval references an unknown shift ID.
///
/// A shift with no windows for a touched day (or no windows at all) is
/// valid input: the whole day is overtime-eligible.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::compute_overtime;
/// use overtime_engine::models::{
///     DayOfWeek, HolidayCalendar, RegisteredInterval, ScheduleDirectory, ScheduleWindow,
/// };
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let mut schedules = ScheduleDirectory::new();
/// schedules
///     .insert_shift(
///         "turno_oficina",
///         vec![
///             ScheduleWindow {
///                 weekday: DayOfWeek::Tuesday,
///                 start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///                 end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///                 active: true,
///             },
///             ScheduleWindow {
///                 weekday: DayOfWeek::Wednesday,
///                 start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///                 end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///                 active: true,
///             },
///         ],
///     )
///     .unwrap();
///
/// // Tuesday 19:00 to Wednesday 05:00: ten hours, all nocturnal.
/// let interval = RegisteredInterval {
///     employee_id: "emp_001".to_string(),
///     shift_id: "turno_oficina".to_string(),
///     start: NaiveDateTime::parse_from_str("2025-10-14 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2025-10-15 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// let breakdown =
///     compute_overtime(&interval, &schedules, &HolidayCalendar::empty()).unwrap();
/// assert_eq!(breakdown.night_minutes, 600);
/// assert_eq!(breakdown.day_minutes, 0);
/// assert_eq!(breakdown.sunday_holiday_minutes, 0);
/// ```
pub fn compute_overtime(
    interval: &RegisteredInterval,
    schedules: &ScheduleDirectory,
    holidays: &HolidayCalendar,
) -> EngineResult<OvertimeBreakdown> {
    interval.validate()?;

    let start = truncate_to_minute(interval.start);
    let end = truncate_to_minute(interval.end);

    // Per-call cache: one windows_for lookup per distinct weekday touched.
    let mut windows_by_weekday: HashMap<DayOfWeek, Vec<ScheduleWindow>> = HashMap::new();
    let mut breakdown = OvertimeBreakdown::default();

    for segment in split_by_day(start, end) {
        let weekday = segment.weekday();
        if !windows_by_weekday.contains_key(&weekday) {
            let windows = schedules.windows_for(&interval.shift_id, weekday)?;
            windows_by_weekday.insert(weekday, windows);
        }
        let windows = &windows_by_weekday[&weekday];

        let mut minute = segment.start;
        while minute < segment.end {
            match classify_minute(minute, windows, holidays) {
                Some(OvertimeCategory::Day) => breakdown.day_minutes += 1,
                Some(OvertimeCategory::Night) => breakdown.night_minutes += 1,
                Some(OvertimeCategory::SundayOrHoliday) => {
                    breakdown.sunday_holiday_minutes += 1;
                }
                None => {}
            }
            minute += chrono::Duration::minutes(1);
        }
    }

    Ok(breakdown)
}
