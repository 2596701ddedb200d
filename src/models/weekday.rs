//! Canonical weekday enumeration.
//!
//! Schedule windows are keyed by weekday, so the engine uses its own
//! fixed Monday-through-Sunday enumeration rather than leaking
//! `chrono::Weekday` into serialized data.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A day of the week in canonical Monday-to-Sunday order.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DayOfWeek;
/// use chrono::NaiveDate;
///
/// // 2025-10-19 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
/// assert_eq!(DayOfWeek::of(sunday), DayOfWeek::Sunday);
/// assert!(DayOfWeek::of(sunday).is_sunday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayOfWeek {
    /// Returns the weekday of the given local calendar date.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Returns true for [`DayOfWeek::Sunday`].
    pub fn is_sunday(self) -> bool {
        self == DayOfWeek::Sunday
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayOfWeek::Monday => write!(f, "Monday"),
            DayOfWeek::Tuesday => write!(f, "Tuesday"),
            DayOfWeek::Wednesday => write!(f, "Wednesday"),
            DayOfWeek::Thursday => write!(f, "Thursday"),
            DayOfWeek::Friday => write!(f, "Friday"),
            DayOfWeek::Saturday => write!(f, "Saturday"),
            DayOfWeek::Sunday => write!(f, "Sunday"),
        }
    }
}
