//! Calendar utilities for overtime classification.
//!
//! Pure helpers over timestamps: weekday resolution on the local
//! calendar date, the fixed nocturnal-hour rule, and minute truncation.

use chrono::{NaiveDateTime, Timelike};

use crate::models::DayOfWeek;

/// First hour of the nocturnal band (19:00 onward is night).
pub const NIGHT_START_HOUR: u32 = 19;

/// First hour past the nocturnal band (05:59 is night, 06:00 is not).
pub const NIGHT_END_HOUR: u32 = 6;

/// Returns the weekday of the timestamp's local calendar date.
///
/// The weekday changes exactly at local midnight.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::day_of_week;
/// use overtime_engine::models::DayOfWeek;
/// use chrono::NaiveDateTime;
///
/// // 2025-10-14 is a Tuesday
/// let late = NaiveDateTime::parse_from_str("2025-10-14 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(day_of_week(late), DayOfWeek::Tuesday);
///
/// let midnight = NaiveDateTime::parse_from_str("2025-10-15 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(day_of_week(midnight), DayOfWeek::Wednesday);
/// ```
pub fn day_of_week(datetime: NaiveDateTime) -> DayOfWeek {
    DayOfWeek::of(datetime.date())
}

/// Returns true if an hour of day falls in the nocturnal band.
///
/// An hour `h` is nocturnal when `h >= 19 || h < 6` (19:00 through
/// 05:59). The threshold is a fixed business rule, not configurable.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::is_night_hour;
///
/// assert!(is_night_hour(19));
/// assert!(is_night_hour(23));
/// assert!(is_night_hour(0));
/// assert!(is_night_hour(5));
/// assert!(!is_night_hour(6));
/// assert!(!is_night_hour(18));
/// ```
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Truncates a timestamp to whole-minute precision.
///
/// Classification runs at one-minute granularity; registered timestamps
/// are truncated before iteration so that the minute count invariants
/// hold exactly.
pub fn truncate_to_minute(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime
        .date()
        .and_hms_opt(datetime.hour(), datetime.minute(), 0)
        .expect("Valid time of day")
}
