//! Derived agronomic indicator models

use serde::{Deserialize, Serialize};

/// Transpiration regime implied by the vapor-pressure deficit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VpdStatus {
    /// VPD below 0.4 kPa
    LowRiskMold,
    /// VPD between 0.4 and 1.6 kPa inclusive
    OptimalTranspiration,
    /// VPD above 1.6 kPa
    HighWaterStress,
    Unknown,
}

impl VpdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpdStatus::LowRiskMold => "low-risk-mold",
            VpdStatus::OptimalTranspiration => "optimal-transpiration",
            VpdStatus::HighWaterStress => "high-water-stress",
            VpdStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for VpdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VpdStatus::LowRiskMold => write!(f, "Mold risk (low)"),
            VpdStatus::OptimalTranspiration => write!(f, "Optimal transpiration"),
            VpdStatus::HighWaterStress => write!(f, "Water stress (high)"),
            VpdStatus::Unknown => write!(f, "N/A"),
        }
    }
}

/// Vapor-pressure deficit with its status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VpdReading {
    /// kPa, rounded to two decimals
    #[serde(rename = "vpdKPa")]
    pub vpd_kpa: Option<f64>,
    pub status: VpdStatus,
}

/// Fungal pathogen risk from air humidity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathogenRisk {
    High,
    Low,
}

impl PathogenRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathogenRisk::High => "HIGH",
            PathogenRisk::Low => "LOW",
        }
    }
}

/// Comfort band of a single raw reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComfortStatus {
    Good,
    Warning,
    Bad,
    /// No reading available
    Neutral,
}

impl ComfortStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortStatus::Good => "good",
            ComfortStatus::Warning => "warning",
            ComfortStatus::Bad => "bad",
            ComfortStatus::Neutral => "neutral",
        }
    }
}

/// Comfort band per raw metric shown on the microclimate gauges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComfortReadings {
    pub temperature: ComfortStatus,
    pub humidity: ComfortStatus,
    pub wind: ComfortStatus,
}

/// Classification of the rain fallen over the recent past window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RainAccumulationStatus {
    /// More than 10 mm
    Saturated,
    /// More than 2 mm, up to 10 mm
    Moderate,
    /// 2 mm or less
    Dry,
}

impl RainAccumulationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RainAccumulationStatus::Saturated => "Natural irrigation",
            RainAccumulationStatus::Moderate => "Scarce rain",
            RainAccumulationStatus::Dry => "No rainfall",
        }
    }

    pub fn style_tag(&self) -> &'static str {
        match self {
            RainAccumulationStatus::Saturated => "success",
            RainAccumulationStatus::Moderate => "warning",
            RainAccumulationStatus::Dry => "danger",
        }
    }
}

/// Rain accumulation with its display label and description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RainAccumulation {
    pub status: RainAccumulationStatus,
    pub total_mm: f64,
    pub label: String,
    pub description: String,
    pub style_tag: String,
}

impl RainAccumulation {
    pub fn new(status: RainAccumulationStatus, total_mm: f64) -> Self {
        let description = match status {
            RainAccumulationStatus::Saturated => format!("Received {:.1}mm of rain.", total_mm),
            RainAccumulationStatus::Moderate => format!("Only {:.1}mm fell.", total_mm),
            RainAccumulationStatus::Dry => "No recent rain.".to_string(),
        };

        Self {
            status,
            total_mm,
            label: status.label().to_string(),
            description,
            style_tag: status.style_tag().to_string(),
        }
    }
}

/// Secondary indicators computed from a weather sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    #[serde(rename = "vpdKPa")]
    pub vpd_kpa: Option<f64>,
    pub vpd_status: VpdStatus,
    pub pathogen_risk: PathogenRisk,
    /// `None` when there is no past rain data; not the same as dry
    pub rain_accumulation: Option<RainAccumulation>,
}

/// Bar widths of the water-balance gauge, in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterBalance {
    pub rain_percent: f64,
    pub evapotranspiration_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vpd_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&VpdStatus::LowRiskMold).unwrap(),
            "\"low-risk-mold\""
        );
        assert_eq!(
            serde_json::to_string(&VpdStatus::OptimalTranspiration).unwrap(),
            format!("\"{}\"", VpdStatus::OptimalTranspiration.as_str())
        );
    }

    #[test]
    fn test_rain_accumulation_descriptions() {
        let saturated = RainAccumulation::new(RainAccumulationStatus::Saturated, 12.34);
        assert_eq!(saturated.description, "Received 12.3mm of rain.");
        assert_eq!(saturated.label, "Natural irrigation");

        let moderate = RainAccumulation::new(RainAccumulationStatus::Moderate, 4.0);
        assert_eq!(moderate.description, "Only 4.0mm fell.");

        let dry = RainAccumulation::new(RainAccumulationStatus::Dry, 0.5);
        assert_eq!(dry.description, "No recent rain.");
    }

    #[test]
    fn test_derived_metrics_json_shape() {
        let metrics = DerivedMetrics {
            vpd_kpa: Some(1.17),
            vpd_status: VpdStatus::OptimalTranspiration,
            pathogen_risk: PathogenRisk::Low,
            rain_accumulation: None,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["vpdKPa"], 1.17);
        assert_eq!(json["vpdStatus"], "optimal-transpiration");
        assert_eq!(json["pathogenRisk"], "LOW");
        assert!(json["rainAccumulation"].is_null());
    }
}
