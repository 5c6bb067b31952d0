//! Common types used across the workspace

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used when a plant carries no lifecycle stage at all
pub const DEFAULT_STAGE_LABEL: &str = "Generico";

/// Resolved place attached to a weather reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Format a calendar day the way the weather trend series does (`YYYY-MM-DD`)
pub fn iso_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Drop NaN and infinities so they behave like a missing reading
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
