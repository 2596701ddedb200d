//! Schedule window model and the shift schedule directory.
//!
//! A shift (turno) owns a weekly set of schedule windows (horarios). The
//! [`ScheduleDirectory`] is the engine's read-only accessor over that data:
//! it validates windows on insertion and answers per-weekday lookups.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DayOfWeek;

/// One scheduled working window for one weekday of one shift.
///
/// Window bounds are times of day at minute precision; `end` is strictly
/// after `start` within the same nominal day. Containment is half-open:
/// a minute exactly at `end` is outside the window.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{DayOfWeek, ScheduleWindow};
/// use chrono::NaiveTime;
///
/// let window = ScheduleWindow {
///     weekday: DayOfWeek::Tuesday,
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     active: true,
/// };
/// assert!(window.contains(NaiveTime::from_hms_opt(16, 59, 0).unwrap()));
/// assert!(!window.contains(NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    /// The weekday this window applies to.
    pub weekday: DayOfWeek,
    /// The start of the window (inclusive).
    pub start: NaiveTime,
    /// The end of the window (exclusive).
    pub end: NaiveTime,
    /// Whether the window is active; deactivated windows are ignored.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ScheduleWindow {
    /// Returns true if the given time of day lies inside the half-open
    /// window `[start, end)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// The schedule model accessor: shift ID to weekly schedule windows.
///
/// Windows are validated on insertion: each must end after it starts, and
/// active windows of the same shift and weekday must not overlap. A shift
/// may legally have zero windows for a weekday (no scheduled work that
/// day); looking up an unknown shift ID is an error.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{DayOfWeek, ScheduleDirectory, ScheduleWindow};
/// use chrono::NaiveTime;
///
/// let mut directory = ScheduleDirectory::new();
/// directory
///     .insert_shift(
///         "turno_oficina",
///         vec![ScheduleWindow {
///             weekday: DayOfWeek::Tuesday,
///             start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///             end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///             active: true,
///         }],
///     )
///     .unwrap();
///
/// let tuesday = directory
///     .windows_for("turno_oficina", DayOfWeek::Tuesday)
///     .unwrap();
/// assert_eq!(tuesday.len(), 1);
///
/// // A day with no configured windows is valid and empty.
/// let sunday = directory
///     .windows_for("turno_oficina", DayOfWeek::Sunday)
///     .unwrap();
/// assert!(sunday.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleDirectory {
    shifts: HashMap<String, Vec<ScheduleWindow>>,
}

impl ScheduleDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a shift and its weekly schedule windows.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if any window ends at or
    /// before its start, or if two active windows of the same weekday
    /// overlap. Windows that merely touch (one ends where the next
    /// starts) are disjoint and accepted.
    pub fn insert_shift(
        &mut self,
        shift_id: impl Into<String>,
        windows: Vec<ScheduleWindow>,
    ) -> EngineResult<()> {
        let shift_id = shift_id.into();

        for window in &windows {
            if window.end <= window.start {
                return Err(EngineError::InvalidSchedule {
                    shift_id,
                    message: format!(
                        "window on {} ends at {} which is not after its start {}",
                        window.weekday, window.end, window.start
                    ),
                });
            }
        }

        // Overlap check among active windows sharing a weekday.
        let mut by_weekday: HashMap<DayOfWeek, Vec<&ScheduleWindow>> = HashMap::new();
        for window in windows.iter().filter(|w| w.active) {
            by_weekday.entry(window.weekday).or_default().push(window);
        }
        for (weekday, mut day_windows) in by_weekday {
            day_windows.sort_by_key(|w| w.start);
            for pair in day_windows.windows(2) {
                if pair[1].start < pair[0].end {
                    return Err(EngineError::InvalidSchedule {
                        shift_id,
                        message: format!(
                            "overlapping windows on {}: [{}, {}) and [{}, {})",
                            weekday, pair[0].start, pair[0].end, pair[1].start, pair[1].end
                        ),
                    });
                }
            }
        }

        self.shifts.insert(shift_id, windows);
        Ok(())
    }

    /// Returns true if the directory knows the given shift ID.
    pub fn contains_shift(&self, shift_id: &str) -> bool {
        self.shifts.contains_key(shift_id)
    }

    /// Returns the active windows of a shift for one weekday, ordered by
    /// start time ascending.
    ///
    /// An empty result is not an error: it means the shift has no
    /// scheduled work that day, so the entire day is overtime-eligible.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ShiftNotFound`] if the shift ID is unknown.
    pub fn windows_for(
        &self,
        shift_id: &str,
        weekday: DayOfWeek,
    ) -> EngineResult<Vec<ScheduleWindow>> {
        let windows = self
            .shifts
            .get(shift_id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })?;

        let mut day_windows: Vec<ScheduleWindow> = windows
            .iter()
            .filter(|w| w.active && w.weekday == weekday)
            .copied()
            .collect();
        day_windows.sort_by_key(|w| w.start);
        Ok(day_windows)
    }
}
