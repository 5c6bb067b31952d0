//! Validation utilities for Greenfield Advisor
//!
//! Client-side checks run before a plant or a care intervention is posted to
//! the plant service, plus date checks for values supplied by callers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use validator::Validate;

use crate::models::{FertilizationLog, IrrigationLog, PlantForm};

/// Formats accepted from a `datetime-local` input
const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

// ============================================================================
// Date Validations
// ============================================================================

/// Validate an ISO calendar day (`YYYY-MM-DD`, zero padded)
pub fn validate_iso_day(day: &str) -> Result<(), &'static str> {
    if day.len() != 10 || NaiveDate::parse_from_str(day, "%Y-%m-%d").is_err() {
        return Err("Date must be an ISO calendar day (YYYY-MM-DD)");
    }
    Ok(())
}

/// Parse an intervention timestamp as entered in the form, or as RFC 3339
pub fn parse_executed_at(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// Validate the date and time an intervention was carried out
pub fn validate_executed_at(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Date and time are required");
    }
    if parse_executed_at(value).is_none() {
        return Err("Invalid date and time");
    }
    Ok(())
}

// ============================================================================
// Intervention Validations
// ============================================================================

/// Validate the amount of water given
pub fn validate_liters(liters: f64) -> Result<(), &'static str> {
    if !liters.is_finite() || liters <= 0.0 {
        return Err("Liters must be a positive number");
    }
    Ok(())
}

/// Validate an irrigation form before it is submitted
pub fn validate_irrigation_log(log: &IrrigationLog) -> Result<(), &'static str> {
    validate_liters(log.liters)?;
    validate_executed_at(&log.executed_at)?;

    if let Err(errors) = log.validate() {
        if errors.field_errors().contains_key("notes") {
            return Err("Notes must be at most 500 characters");
        }
        return Err("Invalid irrigation log");
    }
    Ok(())
}

/// Validate a fertilization form before it is submitted
pub fn validate_fertilization_log(log: &FertilizationLog) -> Result<(), &'static str> {
    if log.fertilizer_type.trim().is_empty() {
        return Err("Fertilizer type is required");
    }
    if log.dose.trim().is_empty() {
        return Err("Dose is required");
    }
    validate_executed_at(&log.executed_at)?;

    if let Err(errors) = log.validate() {
        let fields = errors.field_errors();
        if fields.contains_key("fertilizer_type") {
            return Err("Fertilizer type must be at most 100 characters");
        }
        if fields.contains_key("dose") {
            return Err("Dose must be at most 50 characters");
        }
        if fields.contains_key("notes") {
            return Err("Notes must be at most 500 characters");
        }
        return Err("Invalid fertilization log");
    }
    Ok(())
}

// ============================================================================
// Plant Validations
// ============================================================================

/// Validate a plant form before it is submitted
pub fn validate_plant_form(form: &PlantForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Name is required");
    }
    if form.species.is_empty() {
        return Err("Select a species from the list");
    }
    if form.location.is_empty() {
        return Err("Location is required");
    }
    if !form.has_photo() {
        return Err("A photo of the plant is required");
    }
    Ok(())
}
