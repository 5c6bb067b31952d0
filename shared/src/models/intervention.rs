//! Care intervention models
//!
//! Forms the user fills in to log an irrigation or a fertilization. They are
//! validated on the client before being posted to the plant service.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of care intervention, with the wire values the plant service expects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InterventionKind {
    #[serde(rename = "irrigazione")]
    Irrigation,
    #[serde(rename = "concimazione")]
    Fertilization,
}

/// Irrigation logging form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationLog {
    /// Water given, in liters
    pub liters: f64,
    /// Local datetime as entered (`YYYY-MM-DDTHH:MM`) or RFC 3339
    pub executed_at: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub notes: String,
}

/// Fertilization logging form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FertilizationLog {
    /// Product name, e.g. "NPK 20-20-20"
    #[validate(length(max = 100))]
    pub fertilizer_type: String,
    /// Free-form dose, e.g. "10ml"
    #[validate(length(max = 50))]
    pub dose: String,
    pub executed_at: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub notes: String,
}

impl IrrigationLog {
    pub fn kind(&self) -> InterventionKind {
        InterventionKind::Irrigation
    }
}

impl FertilizationLog {
    pub fn kind(&self) -> InterventionKind {
        InterventionKind::Fertilization
    }
}
