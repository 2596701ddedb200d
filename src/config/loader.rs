//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! schedules and the holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, ScheduleDirectory};

use super::types::{HolidaysFile, ShiftsFile};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the validated schedule directory and holiday calendar.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── holidays.yaml   # holiday calendar: [{date, name}]
/// └── shifts.yaml     # shift ID -> list of {weekday, start, end, active}
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
/// use overtime_engine::models::DayOfWeek;
///
/// let loader = ConfigLoader::load("./config").unwrap();
///
/// let monday = loader
///     .schedules()
///     .windows_for("turno_oficina", DayOfWeek::Monday)
///     .unwrap();
/// println!("{} window(s) on Monday", monday.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedules: ScheduleDirectory,
    holidays: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing.
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML
    ///   or does not match the expected schema.
    /// - [`EngineError::InvalidSchedule`] if a shift's windows violate the
    ///   schedule invariants (end before start, overlapping windows).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let holidays_file: HolidaysFile = Self::load_yaml(&path.join("holidays.yaml"))?;
        let shifts_file: ShiftsFile = Self::load_yaml(&path.join("shifts.yaml"))?;

        let mut schedules = ScheduleDirectory::new();
        for (shift_id, windows) in shifts_file.shifts {
            schedules.insert_shift(shift_id, windows.into_iter().map(Into::into).collect())?;
        }

        let holidays =
            HolidayCalendar::new(holidays_file.holidays.into_iter().map(Into::into).collect());

        Ok(Self {
            schedules,
            holidays,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded schedule directory.
    pub fn schedules(&self) -> &ScheduleDirectory {
        &self.schedules
    }

    /// Returns the loaded holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}
