//! Holiday calendar model.
//!
//! Holidays are classified like Sundays regardless of weekday. The
//! calendar is an immutable date set injected into the engine, loaded
//! from configuration by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single calendar holiday.
///
/// # Example
///
/// ```
/// use overtime_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     name: "Navidad".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday (no time component).
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Navidad").
    pub name: String,
}

/// An immutable set of holiday dates.
///
/// Lookups are by exact date match; the weekday and any time component
/// of the queried instant are irrelevant.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
///     name: "Día del Trabajo".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Creates an empty calendar (no date is a holiday).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the given date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the holidays in the calendar.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_calendar() -> HolidayCalendar {
        HolidayCalendar::new(vec![
            Holiday {
                date: make_date("2025-01-01"),
                name: "Año Nuevo".to_string(),
            },
            Holiday {
                date: make_date("2025-05-01"),
                name: "Día del Trabajo".to_string(),
            },
            Holiday {
                date: make_date("2025-12-25"),
                name: "Navidad".to_string(),
            },
        ])
    }

    #[test]
    fn test_is_holiday_returns_true_on_exact_match() {
        let calendar = create_test_calendar();
        assert!(calendar.is_holiday(make_date("2025-01-01")));
        assert!(calendar.is_holiday(make_date("2025-05-01")));
        assert!(calendar.is_holiday(make_date("2025-12-25")));
    }

    #[test]
    fn test_is_holiday_returns_false_for_other_dates() {
        let calendar = create_test_calendar();
        assert!(!calendar.is_holiday(make_date("2025-01-02")));
        assert!(!calendar.is_holiday(make_date("2025-12-24")));
    }

    #[test]
    fn test_empty_calendar_has_no_holidays() {
        let calendar = HolidayCalendar::empty();
        assert!(!calendar.is_holiday(make_date("2025-01-01")));
        assert!(calendar.holidays().is_empty());
    }

    #[test]
    fn test_serialize_holiday() {
        let holiday = Holiday {
            date: make_date("2025-12-25"),
            name: "Navidad".to_string(),
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"date\":\"2025-12-25\""));
        assert!(json.contains("\"name\":\"Navidad\""));
    }

    #[test]
    fn test_deserialize_calendar() {
        let json = r#"{
            "holidays": [
                { "date": "2025-01-01", "name": "Año Nuevo" },
                { "date": "2025-12-25", "name": "Navidad" }
            ]
        }"#;
        let calendar: HolidayCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(calendar.holidays().len(), 2);
        assert!(calendar.is_holiday(make_date("2025-01-01")));
    }
}
