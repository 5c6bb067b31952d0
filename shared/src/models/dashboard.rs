//! Agronomy dashboard model

use serde::{Deserialize, Serialize};

use super::metrics::{ComfortReadings, DerivedMetrics, WaterBalance};
use super::plant::StageProgress;
use super::recommendation::Pill;
use super::trend::TrendDay;

/// Everything the plant card and its details drawer display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgronomyDashboard {
    pub location_name: Option<String>,
    pub metrics: DerivedMetrics,
    pub comfort: ComfortReadings,
    pub water_balance: WaterBalance,
    pub past_days: Vec<TrendDay>,
    pub future_days: Vec<TrendDay>,
    pub stage: StageProgress,
    /// Absent until a recommendation exists, either fresh or stored with the plant
    pub pill: Option<Pill>,
    /// Cleaned AI analysis, empty when there is none
    pub analysis_text: String,
}
