//! Weather data models
//!
//! Field names follow the JSON produced by the weather endpoint, so a sample
//! can be deserialized straight from the response body.

use serde::{Deserialize, Serialize};

use crate::types::Location;

/// A weather reading for a plant's location, as returned by the weather service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeatherSample {
    #[serde(default)]
    pub location: Option<Location>,
    /// Air temperature in °C
    #[serde(default, rename = "temp")]
    pub temperature_c: Option<f64>,
    /// Relative humidity in %
    #[serde(default, rename = "humidity")]
    pub humidity_pct: Option<f64>,
    /// Wind speed in km/h
    #[serde(default, rename = "wind")]
    pub wind_kmh: Option<f64>,
    /// Reference evapotranspiration in mm
    #[serde(default, rename = "et0")]
    pub et0_mm: Option<f64>,
    /// Solar radiation in W/m²
    #[serde(default, rename = "solarRadiation", alias = "solar_rad")]
    pub solar_radiation_wm2: Option<f64>,
    /// Forecast rain for the next 24 hours in mm
    #[serde(default, rename = "rainNext24h")]
    pub rain_next_24h_mm: Option<f64>,
    /// Daily rain totals, past days and forecast days mixed
    #[serde(default, rename = "rain_trend", alias = "rain")]
    pub rain_trend: Vec<RainDay>,
}

/// Rain total for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainDay {
    /// ISO calendar day (`YYYY-MM-DD`)
    pub date: String,
    #[serde(default)]
    pub rain: Option<f64>,
}

impl RainDay {
    pub fn new(date: impl Into<String>, rain: f64) -> Self {
        Self {
            date: date.into(),
            rain: Some(rain),
        }
    }

    /// Rain in mm, with a missing or non-numeric value counted as zero
    pub fn rain_mm(&self) -> f64 {
        self.rain.filter(|r| r.is_finite()).unwrap_or(0.0)
    }
}
