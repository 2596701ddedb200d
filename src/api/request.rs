//! Request types for the overtime engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Field names follow the record-creation service's wire
//! format (`employeeId`, `shiftId`, `horaInicio`, `horaFin`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::RegisteredInterval;

/// Request body for the `/calculate` endpoint.
///
/// Timestamps are ISO-8601 local datetimes without a timezone offset
/// (e.g. `"2025-10-14T19:00:00"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The employee the time record belongs to.
    pub employee_id: String,
    /// The shift whose schedule the interval is evaluated against.
    pub shift_id: String,
    /// The registered clock-in timestamp.
    pub hora_inicio: NaiveDateTime,
    /// The registered clock-out timestamp.
    pub hora_fin: NaiveDateTime,
}

impl From<CalculationRequest> for RegisteredInterval {
    fn from(req: CalculationRequest) -> Self {
        RegisteredInterval {
            employee_id: req.employee_id,
            shift_id: req.shift_id,
            start: req.hora_inicio,
            end: req.hora_fin,
        }
    }
}
