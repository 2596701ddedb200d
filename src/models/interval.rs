//! Registered time interval model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A raw clock-in/clock-out event pair submitted for overtime evaluation.
///
/// The interval may span one or more midnight boundaries. The engine
/// reads only the shift ID and the timestamp pair; the employee ID is
/// carried through for the record-creation service.
///
/// # Example
///
/// ```
/// use overtime_engine::models::RegisteredInterval;
/// use chrono::NaiveDateTime;
///
/// let interval = RegisteredInterval {
///     employee_id: "emp_001".to_string(),
///     shift_id: "turno_oficina".to_string(),
///     start: NaiveDateTime::parse_from_str("2025-10-14 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2025-10-15 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert!(interval.validate().is_ok());
/// assert_eq!(interval.duration_minutes(), 600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredInterval {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The shift whose schedule the interval is evaluated against.
    pub shift_id: String,
    /// The registered start timestamp.
    pub start: NaiveDateTime,
    /// The registered end timestamp.
    pub end: NaiveDateTime,
}

impl RegisteredInterval {
    /// Checks that the start timestamp is strictly before the end.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] otherwise.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start < self.end {
            Ok(())
        } else {
            Err(EngineError::InvalidInterval {
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Returns the interval length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
