//! Calculation logic for the overtime engine.
//!
//! This module contains the calendar utilities, midnight-boundary
//! splitting, the per-minute interval classifier, and the overtime
//! calculator that ties them together.

mod calendar;
mod classifier;
mod overtime;
mod segment;

pub use calendar::{NIGHT_END_HOUR, NIGHT_START_HOUR, day_of_week, is_night_hour, truncate_to_minute};
pub use classifier::{OvertimeCategory, classify_minute};
pub use overtime::compute_overtime;
pub use segment::{DaySegment, split_by_day};
