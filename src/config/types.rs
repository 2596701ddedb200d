//! Configuration file types.
//!
//! This module contains the raw structures deserialized from the YAML
//! configuration files before they are validated into domain models.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::models::{DayOfWeek, Holiday, ScheduleWindow};

/// Contents of `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The holiday calendar entries.
    pub holidays: Vec<HolidayEntry>,
}

/// One holiday entry in `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

impl From<HolidayEntry> for Holiday {
    fn from(entry: HolidayEntry) -> Self {
        Holiday {
            date: entry.date,
            name: entry.name,
        }
    }
}

/// Contents of `shifts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// Map of shift ID to its weekly schedule windows.
    pub shifts: HashMap<String, Vec<WindowEntry>>,
}

/// One schedule window entry in `shifts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowEntry {
    /// The weekday the window applies to.
    pub weekday: DayOfWeek,
    /// The start of the window (inclusive).
    pub start: NaiveTime,
    /// The end of the window (exclusive).
    pub end: NaiveTime,
    /// Whether the window is active; defaults to true.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<WindowEntry> for ScheduleWindow {
    fn from(entry: WindowEntry) -> Self {
        ScheduleWindow {
            weekday: entry.weekday,
            start: entry.start,
            end: entry.end,
            active: entry.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_holidays_file() {
        let yaml = r#"
holidays:
  - date: 2025-01-01
    name: "Año Nuevo"
  - date: 2025-12-25
    name: "Navidad"
"#;
        let file: HolidaysFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.holidays.len(), 2);
        assert_eq!(file.holidays[0].name, "Año Nuevo");
    }

    #[test]
    fn test_deserialize_shifts_file() {
        let yaml = r#"
shifts:
  turno_oficina:
    - weekday: monday
      start: "09:00:00"
      end: "17:00:00"
    - weekday: tuesday
      start: "09:00:00"
      end: "17:00:00"
      active: false
"#;
        let file: ShiftsFile = serde_yaml::from_str(yaml).unwrap();
        let windows = &file.shifts["turno_oficina"];
        assert_eq!(windows.len(), 2);
        assert!(windows[0].active); // defaulted
        assert!(!windows[1].active);
        assert_eq!(windows[0].weekday, DayOfWeek::Monday);
    }

    #[test]
    fn test_window_entry_converts_to_schedule_window() {
        let entry = WindowEntry {
            weekday: DayOfWeek::Friday,
            start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            active: true,
        };

        let window: ScheduleWindow = entry.into();
        assert_eq!(window.weekday, DayOfWeek::Friday);
        assert!(window.active);
    }
}
