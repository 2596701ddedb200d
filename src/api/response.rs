//! Response types for the overtime engine API.
//!
//! This module defines the calculation response and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::OvertimeBreakdown;

/// Response body for a successful `/calculate` request.
///
/// Hour values are JSON numbers rounded to 2 decimal places, using the
/// record-creation service's field names (`totalHorasExtra`, `diurnas`,
/// `nocturnas`, `dominicales`). The raw minute counts are included so
/// callers can audit the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeResponse {
    /// Total overtime hours across all buckets.
    pub total_horas_extra: f64,
    /// Daytime overtime hours.
    pub diurnas: f64,
    /// Nighttime overtime hours.
    pub nocturnas: f64,
    /// Sunday/holiday overtime hours.
    pub dominicales: f64,
    /// Daytime overtime minutes.
    pub minutos_diurnos: u64,
    /// Nighttime overtime minutes.
    pub minutos_nocturnos: u64,
    /// Sunday/holiday overtime minutes.
    pub minutos_dominicales: u64,
}

impl From<&OvertimeBreakdown> for OvertimeResponse {
    fn from(breakdown: &OvertimeBreakdown) -> Self {
        Self {
            total_horas_extra: breakdown.total_hours().to_f64().unwrap_or(0.0),
            diurnas: breakdown.day_hours().to_f64().unwrap_or(0.0),
            nocturnas: breakdown.night_hours().to_f64().unwrap_or(0.0),
            dominicales: breakdown.sunday_holiday_hours().to_f64().unwrap_or(0.0),
            minutos_diurnos: breakdown.day_minutes,
            minutos_nocturnos: breakdown.night_minutes,
            minutos_dominicales: breakdown.sunday_holiday_minutes,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { shift_id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule for shift '{}'", shift_id),
                    message,
                ),
            },
            EngineError::ShiftNotFound { shift_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SHIFT_NOT_FOUND",
                    format!("Shift not found: {}", shift_id),
                    "The referenced shift does not exist in the schedule source",
                ),
            },
            EngineError::InvalidInterval { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    format!("Start {} is not strictly before end {}", start, end),
                    "horaInicio must be strictly before horaFin",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_breakdown() {
        let breakdown = OvertimeBreakdown {
            day_minutes: 0,
            night_minutes: 600,
            sunday_holiday_minutes: 0,
        };

        let response = OvertimeResponse::from(&breakdown);
        assert_eq!(response.total_horas_extra, 10.0);
        assert_eq!(response.nocturnas, 10.0);
        assert_eq!(response.diurnas, 0.0);
        assert_eq!(response.minutos_nocturnos, 600);
    }

    #[test]
    fn test_response_rounds_to_two_decimals() {
        let breakdown = OvertimeBreakdown {
            day_minutes: 125,
            night_minutes: 0,
            sunday_holiday_minutes: 0,
        };

        let response = OvertimeResponse::from(&breakdown);
        assert_eq!(response.diurnas, 2.08);
        assert_eq!(response.total_horas_extra, 2.08);
    }

    #[test]
    fn test_response_serializes_wire_field_names() {
        let breakdown = OvertimeBreakdown {
            day_minutes: 60,
            night_minutes: 30,
            sunday_holiday_minutes: 0,
        };

        let json = serde_json::to_string(&OvertimeResponse::from(&breakdown)).unwrap();
        assert!(json.contains("\"totalHorasExtra\":1.5"));
        assert!(json.contains("\"diurnas\":1.0"));
        assert!(json.contains("\"nocturnas\":0.5"));
        assert!(json.contains("\"dominicales\":0.0"));
        assert!(json.contains("\"minutosDiurnos\":60"));
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_shift_not_found_maps_to_404() {
        let engine_error = EngineError::ShiftNotFound {
            shift_id: "desconocido".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "SHIFT_NOT_FOUND");
    }

    #[test]
    fn test_invalid_interval_maps_to_400() {
        let t = chrono::NaiveDateTime::parse_from_str("2025-10-14 09:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let engine_error = EngineError::InvalidInterval { start: t, end: t };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INTERVAL");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
