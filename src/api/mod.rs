//! HTTP API module for the overtime engine.
//!
//! This module provides the REST endpoint used by the overtime-record
//! creation service to obtain a categorized breakdown for a registered
//! interval.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, OvertimeResponse};
pub use state::AppState;
