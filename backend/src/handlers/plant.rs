//! HTTP handlers for plant forms

use axum::Json;
use serde::Serialize;
use shared::{validate_plant_form, PlantForm};

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct PlantFormResponse {
    pub valid: bool,
    /// Name as it will be saved, surrounding whitespace removed
    pub name: String,
}

/// Validate a plant creation or edit form
pub async fn validate_plant(Json(form): Json<PlantForm>) -> AppResult<Json<PlantFormResponse>> {
    validate_plant_form(&form).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
    Ok(Json(PlantFormResponse {
        valid: true,
        name: form.name.trim().to_string(),
    }))
}
