//! Error types for the overtime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during overtime calculation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the overtime engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift's schedule windows were invalid or inconsistent.
    #[error("Invalid schedule for shift '{shift_id}': {message}")]
    InvalidSchedule {
        /// The ID of the shift with the invalid schedule.
        shift_id: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// The referenced shift does not exist in the schedule source.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The shift ID that was not found.
        shift_id: String,
    },

    /// A registered interval's start was not strictly before its end.
    #[error("Invalid interval: start {start} is not strictly before end {end}")]
    InvalidInterval {
        /// The start timestamp of the rejected interval.
        start: NaiveDateTime,
        /// The end timestamp of the rejected interval.
        end: NaiveDateTime,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
