//! Per-minute overtime classification.
//!
//! The classifier is the engine's core decision point: given a minute
//! instant and the schedule windows of that minute's weekday, it decides
//! whether the minute is regular working time or overtime, and which
//! bucket the overtime belongs to.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{HolidayCalendar, ScheduleWindow};

use super::calendar::{day_of_week, is_night_hour};

/// The overtime bucket a classified minute belongs to.
///
/// Classification is mutually exclusive: each overtime minute lands in
/// exactly one bucket, with Sunday/holiday taking precedence over night,
/// and night over day.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::OvertimeCategory;
///
/// let category = OvertimeCategory::SundayOrHoliday;
/// assert_eq!(format!("{}", category), "SundayOrHoliday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeCategory {
    /// Daytime overtime (diurnas): 06:00-18:59 on a regular day.
    Day,
    /// Nighttime overtime (nocturnas): 19:00-05:59 on a regular day.
    Night,
    /// Sunday or holiday overtime (dominicales), any hour.
    SundayOrHoliday,
}

impl std::fmt::Display for OvertimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OvertimeCategory::Day => write!(f, "Day"),
            OvertimeCategory::Night => write!(f, "Night"),
            OvertimeCategory::SundayOrHoliday => write!(f, "SundayOrHoliday"),
        }
    }
}

/// Classifies a single minute instant against its day's schedule windows.
///
/// Returns `None` when the minute lies inside any window (regular working
/// time, never counted as overtime), or the overtime bucket otherwise:
///
/// 1. Sunday or holiday, if the minute's date is a Sunday or a calendar
///    holiday;
/// 2. otherwise night, if the minute's hour is nocturnal;
/// 3. otherwise day.
///
/// `windows` must be the active windows for the minute's own weekday, as
/// returned by the schedule directory; an empty slice means the whole day
/// is overtime-eligible. Window bounds are interpreted on the minute's
/// own nominal calendar day, half-open.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{classify_minute, OvertimeCategory};
/// use overtime_engine::models::HolidayCalendar;
/// use chrono::NaiveDateTime;
///
/// let holidays = HolidayCalendar::empty();
///
/// // 2025-10-19 is a Sunday: a nighttime minute still counts as Sunday.
/// let minute = NaiveDateTime::parse_from_str("2025-10-19 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     classify_minute(minute, &[], &holidays),
///     Some(OvertimeCategory::SundayOrHoliday)
/// );
/// ```
pub fn classify_minute(
    minute: NaiveDateTime,
    windows: &[ScheduleWindow],
    holidays: &HolidayCalendar,
) -> Option<OvertimeCategory> {
    let time = minute.time();
    if windows.iter().any(|w| w.contains(time)) {
        return None;
    }

    let category = if day_of_week(minute).is_sunday() || holidays.is_holiday(minute.date()) {
        OvertimeCategory::SundayOrHoliday
    } else if is_night_hour(minute.hour()) {
        OvertimeCategory::Night
    } else {
        OvertimeCategory::Day
    };

    Some(category)
}
