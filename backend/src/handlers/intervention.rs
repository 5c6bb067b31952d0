//! HTTP handlers for care intervention forms
//!
//! The plant service owns intervention storage; these endpoints only run the
//! same checks the client runs before posting.

use axum::Json;
use serde::Serialize;
use shared::{
    validate_fertilization_log, validate_irrigation_log, FertilizationLog, InterventionKind,
    IrrigationLog,
};

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub kind: InterventionKind,
}

fn rejected(message: &str) -> AppError {
    AppError::ValidationError(message.to_string())
}

/// Validate an irrigation log
pub async fn validate_irrigation(
    Json(log): Json<IrrigationLog>,
) -> AppResult<Json<ValidationResponse>> {
    validate_irrigation_log(&log).map_err(rejected)?;
    Ok(Json(ValidationResponse {
        valid: true,
        kind: log.kind(),
    }))
}

/// Validate a fertilization log
pub async fn validate_fertilization(
    Json(log): Json<FertilizationLog>,
) -> AppResult<Json<ValidationResponse>> {
    validate_fertilization_log(&log).map_err(rejected)?;
    Ok(Json(ValidationResponse {
        valid: true,
        kind: log.kind(),
    }))
}
