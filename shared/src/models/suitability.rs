//! Location suitability models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site indices computed by the pipeline service, both on a 0-100 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SuitabilityIndices {
    pub climate_comfort_index: f64,
    pub water_stress_index: f64,
}

impl SuitabilityIndices {
    /// Missing or non-numeric indices default to 0, the worst comfort score
    pub fn new(climate_comfort_index: Option<f64>, water_stress_index: Option<f64>) -> Self {
        let or_zero = |v: Option<f64>| v.filter(|x| x.is_finite()).unwrap_or(0.0);
        Self {
            climate_comfort_index: or_zero(climate_comfort_index),
            water_stress_index: or_zero(water_stress_index),
        }
    }

    /// Read `details.features.*` from a pipeline result of any shape
    pub fn from_pipeline_result(result: &Value) -> Self {
        let features = result.get("details").and_then(|d| d.get("features"));
        let index = |key: &str| features.and_then(|f| f.get(key)).and_then(Value::as_f64);
        Self::new(index("climate_comfort_index"), index("water_stress_index"))
    }
}

/// Suitability badge of a candidate growing location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityRating {
    Ideal,
    Good,
    Acceptable,
    NotRecommended,
}

impl SuitabilityRating {
    pub fn style_tag(&self) -> &'static str {
        match self {
            SuitabilityRating::Ideal => "success",
            SuitabilityRating::Good => "info",
            SuitabilityRating::Acceptable => "warning",
            SuitabilityRating::NotRecommended => "danger",
        }
    }
}

impl std::fmt::Display for SuitabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitabilityRating::Ideal => write!(f, "Ideal location"),
            SuitabilityRating::Good => write!(f, "Good"),
            SuitabilityRating::Acceptable => write!(f, "Acceptable"),
            SuitabilityRating::NotRecommended => write!(f, "Not recommended"),
        }
    }
}

/// Rating plus the indices it was computed from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityBadge {
    pub rating: SuitabilityRating,
    pub label: String,
    pub style_tag: String,
    pub indices: SuitabilityIndices,
}
