//! Plant context consumed by the dashboard

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::DEFAULT_STAGE_LABEL;

/// The subset of a stored plant record the agronomy panel reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlantContext {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub lifecycle_stage: Option<String>,
    /// Last recommendation stored alongside the plant, in whatever shape the AI service produced
    #[serde(default)]
    pub ai_analysis_report: Option<Value>,
}

impl PlantContext {
    /// Stage label to display: `stage`, then `lifecycle_stage`, then the generic label
    pub fn stage_label(&self) -> &str {
        [self.stage.as_deref(), self.lifecycle_stage.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STAGE_LABEL)
    }
}

/// Plant creation and edit form
///
/// The photo is either a newly selected file or the image already stored
/// with the plant being edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlantForm {
    #[serde(default)]
    pub name: String,
    /// Species id picked from the supported list, e.g. "tomato"
    #[serde(default)]
    pub species: String,
    /// Free-text place, as typed or picked from autocomplete
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub soil: Option<String>,
    #[serde(default)]
    pub geo_lat: Option<f64>,
    #[serde(default)]
    pub geo_lng: Option<f64>,
    #[serde(default)]
    pub place_id: Option<String>,
    /// Name of a newly selected photo file
    #[serde(default)]
    pub photo_file_name: Option<String>,
    /// Preview URL of the photo already stored
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl PlantForm {
    pub fn has_photo(&self) -> bool {
        [self.photo_file_name.as_deref(), self.photo_url.as_deref()]
            .into_iter()
            .flatten()
            .any(|p| !p.is_empty())
    }
}

/// Position of a plant along its lifecycle bar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageProgress {
    pub label: String,
    pub percent: u8,
}
