//! Core data models for the overtime engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod holiday;
mod interval;
mod schedule;
mod weekday;

pub use breakdown::OvertimeBreakdown;
pub use holiday::{Holiday, HolidayCalendar};
pub use interval::RegisteredInterval;
pub use schedule::{ScheduleDirectory, ScheduleWindow};
pub use weekday::DayOfWeek;
