//! Overtime breakdown result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The categorized result of an overtime calculation.
///
/// Minute counts are exact; the hour values derive from them by dividing
/// by 60 and rounding to two decimal places. Rounding happens only at
/// that final conversion, never mid-calculation, and the total is
/// converted from the minute sum rather than summing rounded buckets.
///
/// # Example
///
/// ```
/// use overtime_engine::models::OvertimeBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = OvertimeBreakdown {
///     day_minutes: 125,
///     night_minutes: 0,
///     sunday_holiday_minutes: 0,
/// };
/// assert_eq!(breakdown.day_hours(), Decimal::new(208, 2)); // 2.08
/// assert_eq!(breakdown.total_minutes(), 125);
/// assert_eq!(breakdown.total_hours(), Decimal::new(208, 2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Overtime minutes classified as daytime (diurnas).
    pub day_minutes: u64,
    /// Overtime minutes classified as nighttime (nocturnas).
    pub night_minutes: u64,
    /// Overtime minutes classified as Sunday or holiday (dominicales).
    pub sunday_holiday_minutes: u64,
}

impl OvertimeBreakdown {
    /// Returns the total number of overtime minutes across all buckets.
    pub fn total_minutes(&self) -> u64 {
        self.day_minutes + self.night_minutes + self.sunday_holiday_minutes
    }

    /// Returns daytime overtime in hours, rounded to 2 decimal places.
    pub fn day_hours(&self) -> Decimal {
        minutes_to_hours(self.day_minutes)
    }

    /// Returns nighttime overtime in hours, rounded to 2 decimal places.
    pub fn night_hours(&self) -> Decimal {
        minutes_to_hours(self.night_minutes)
    }

    /// Returns Sunday/holiday overtime in hours, rounded to 2 decimal places.
    pub fn sunday_holiday_hours(&self) -> Decimal {
        minutes_to_hours(self.sunday_holiday_minutes)
    }

    /// Returns total overtime in hours, rounded to 2 decimal places.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes())
    }
}

/// Converts a minute count to hours rounded to 2 decimal places.
fn minutes_to_hours(minutes: u64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}
