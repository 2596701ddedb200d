//! Midnight-boundary splitting of registered intervals.
//!
//! A registered interval may cross one or more local midnights. Each
//! resulting sub-interval is classified against its own day's schedule,
//! so the interval is first split into day-aligned segments.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::DayOfWeek;

use super::calendar::day_of_week;

/// A sub-interval of a registered interval lying within a single
/// calendar day.
///
/// `end` is exclusive and is either the interval's own end or the
/// midnight that opens the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The start of the segment (inclusive).
    pub start: NaiveDateTime,
    /// The end of the segment (exclusive).
    pub end: NaiveDateTime,
}

impl DaySegment {
    /// Returns the calendar date the segment belongs to.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the weekday the segment belongs to.
    pub fn weekday(&self) -> DayOfWeek {
        day_of_week(self.start)
    }

    /// Returns the segment length in whole minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Splits an interval at midnight boundaries into per-day segments.
///
/// Segments are ordered chronologically and cover `[start, end)` without
/// gaps or double counting: the last minute before a midnight belongs to
/// the earlier day, and the first minute of the new day starts the later
/// day's segment. Full intermediate days of a multi-day interval each
/// become their own segment. An empty or reversed interval yields no
/// segments.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::split_by_day;
/// use overtime_engine::models::DayOfWeek;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2025-10-14 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-10-15 05:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let segments = split_by_day(start, end);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].weekday(), DayOfWeek::Tuesday);
/// assert_eq!(segments[0].minutes(), 300); // 19:00 to midnight
/// assert_eq!(segments[1].weekday(), DayOfWeek::Wednesday);
/// assert_eq!(segments[1].minutes(), 300); // midnight to 05:00
/// ```
pub fn split_by_day(start: NaiveDateTime, end: NaiveDateTime) -> Vec<DaySegment> {
    let mut segments = Vec::new();
    let mut current_start = start;

    while current_start < end {
        // Midnight at the end of the current day.
        let next_midnight = (current_start.date() + chrono::Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .expect("Valid midnight time");

        // Segment ends at either midnight or the interval end, whichever
        // comes first.
        let segment_end = if next_midnight <= end {
            next_midnight
        } else {
            end
        };

        segments.push(DaySegment {
            start: current_start,
            end: segment_end,
        });

        current_start = segment_end;
    }

    segments
}
