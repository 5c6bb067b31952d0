//! Rain trend window models

use serde::{Deserialize, Serialize};

use super::weather::RainDay;

/// Rain series split around "today"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrendSplit {
    /// At most the five most recent days strictly before today, oldest first
    pub past: Vec<RainDay>,
    /// At most the first five days from today onwards, oldest first
    pub future: Vec<RainDay>,
}

impl TrendSplit {
    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.future.is_empty()
    }
}

/// One tile of the rain trend strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendDay {
    pub date: String,
    pub rain_mm: f64,
    pub is_past: bool,
    pub is_today: bool,
    /// More than 2 mm; drives the rain/sun icon
    pub is_rainy: bool,
}
