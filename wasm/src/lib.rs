//! WebAssembly module for Greenfield Advisor
//!
//! Provides client-side computation for:
//! - Vapor-pressure deficit and microclimate comfort bands
//! - Rain trend windows and rain accumulation
//! - Recommendation pills, location suitability and stage progress
//! - Plant and intervention form validation
//!
//! Structured inputs and outputs cross the boundary as JSON strings.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

use shared::agronomy;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

/// Parse a payload that must never fail; unreadable JSON becomes `null`
fn parse_lenient(json: &str, what: &str) -> Value {
    serde_json::from_str(json).unwrap_or_else(|e| {
        warn(&format!("Ignoring unreadable {} JSON: {}", what, e));
        Value::Null
    })
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

// ============================================================================
// Microclimate
// ============================================================================

/// Vapor-pressure deficit in kPa, or `undefined` when a reading is missing
#[wasm_bindgen]
pub fn calculate_vpd(temperature: Option<f64>, humidity: Option<f64>) -> Option<f64> {
    agronomy::calculate_vpd(temperature, humidity)
}

#[wasm_bindgen]
pub fn vpd_status(vpd: Option<f64>) -> String {
    agronomy::vpd_status(vpd).as_str().to_string()
}

#[wasm_bindgen]
pub fn pathogen_risk(humidity: Option<f64>) -> String {
    agronomy::pathogen_risk(humidity).as_str().to_string()
}

#[wasm_bindgen]
pub fn temperature_comfort(temperature: Option<f64>) -> String {
    agronomy::temperature_comfort(temperature).as_str().to_string()
}

#[wasm_bindgen]
pub fn humidity_comfort(humidity: Option<f64>) -> String {
    agronomy::humidity_comfort(humidity).as_str().to_string()
}

#[wasm_bindgen]
pub fn wind_comfort(wind: Option<f64>) -> String {
    agronomy::wind_comfort(wind).as_str().to_string()
}

/// Derived metrics for a weather endpoint payload
#[wasm_bindgen]
pub fn derive_metrics_json(weather_json: &str, today: &str) -> Result<String, JsValue> {
    let weather: WeatherSample = parse_json(weather_json, "weather")?;
    to_json(&agronomy::derive_sample_metrics(&weather, today))
}

// ============================================================================
// Rain trend
// ============================================================================

/// Split a rain series (`[{date, rain}]`) around `today`
#[wasm_bindgen]
pub fn split_rain_trend(series_json: &str, today: &str) -> Result<String, JsValue> {
    let series: Vec<RainDay> = parse_json(series_json, "rain trend")?;
    to_json(&agronomy::split_trend(&series, today))
}

/// Rain accumulation over past days; `"null"` when there are none
#[wasm_bindgen]
pub fn rain_accumulation_json(past_json: &str) -> Result<String, JsValue> {
    let past: Vec<RainDay> = parse_json(past_json, "rain trend")?;
    to_json(&agronomy::rain_accumulation(&past))
}

// ============================================================================
// Recommendation and suitability
// ============================================================================

/// Classify a recommendation payload into a pill; never fails
#[wasm_bindgen]
pub fn classify_recommendation_pill(payload_json: &str) -> String {
    let payload = parse_lenient(payload_json, "recommendation");
    serde_json::to_string(&agronomy::classify_pill_value(&payload)).unwrap_or_default()
}

/// Suitability label from the two site indices; missing indices count as 0
#[wasm_bindgen]
pub fn suitability_badge(climate_comfort: Option<f64>, water_stress: Option<f64>) -> String {
    agronomy::suitability_rating(climate_comfort, water_stress).to_string()
}

/// Suitability badge for a pipeline result; never fails
#[wasm_bindgen]
pub fn suitability_from_pipeline(result_json: &str) -> String {
    let result = parse_lenient(result_json, "pipeline result");
    serde_json::to_string(&agronomy::suitability_from_pipeline(&result)).unwrap_or_default()
}

#[wasm_bindgen]
pub fn stage_progress(label: &str) -> u8 {
    agronomy::stage_progress(label)
}

#[wasm_bindgen]
pub fn clean_analysis_text(text: Option<String>) -> String {
    agronomy::clean_analysis_text(text.as_deref())
}

/// Full plant card dashboard
///
/// `plant_json` and `recommendation_json` are optional; an unreadable
/// recommendation is treated as absent.
#[wasm_bindgen]
pub fn build_dashboard_json(
    weather_json: &str,
    today: &str,
    plant_json: Option<String>,
    recommendation_json: Option<String>,
) -> Result<String, JsValue> {
    let weather: WeatherSample = parse_json(weather_json, "weather")?;
    let plant: PlantContext = match plant_json.as_deref() {
        Some(json) => parse_json(json, "plant")?,
        None => PlantContext::default(),
    };
    let recommendation = recommendation_json
        .as_deref()
        .map(|json| parse_lenient(json, "recommendation"));

    to_json(&agronomy::build_dashboard(
        &weather,
        today,
        &plant,
        recommendation.as_ref(),
    ))
}

// ============================================================================
// Forms
// ============================================================================

/// Validate a plant form; returns the error message, or `undefined` when valid
#[wasm_bindgen]
pub fn validate_plant_form(form_json: &str) -> Option<String> {
    match serde_json::from_str::<PlantForm>(form_json) {
        Ok(form) => shared::validate_plant_form(&form).err().map(str::to_string),
        Err(_) => Some("Invalid plant form".to_string()),
    }
}

/// Validate an irrigation form; returns the error message, or `undefined` when valid
#[wasm_bindgen]
pub fn validate_irrigation_form(form_json: &str) -> Option<String> {
    match serde_json::from_str::<IrrigationLog>(form_json) {
        Ok(log) => shared::validate_irrigation_log(&log).err().map(str::to_string),
        Err(_) => Some("Invalid irrigation form".to_string()),
    }
}

/// Validate a fertilization form; returns the error message, or `undefined` when valid
#[wasm_bindgen]
pub fn validate_fertilization_form(form_json: &str) -> Option<String> {
    match serde_json::from_str::<FertilizationLog>(form_json) {
        Ok(log) => shared::validate_fertilization_log(&log).err().map(str::to_string),
        Err(_) => Some("Invalid fertilization form".to_string()),
    }
}

/// Today's UTC calendar day, the reference the rain trend is split on
#[wasm_bindgen]
pub fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_today_iso_is_a_calendar_day() {
        assert!(shared::validate_iso_day(&today_iso()).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_malformed_weather_is_an_error() {
        assert!(derive_metrics_json("{", "2024-05-10").is_err());
        assert!(build_dashboard_json("[1]", "2024-05-10", None, None).is_err());
    }
}
