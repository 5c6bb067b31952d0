//! Assembly of the plant card dashboard

use serde_json::Value;

use crate::models::{
    is_truthy, AgronomyDashboard, PlantContext, RecommendationResult, WeatherSample,
};

use super::classify::{classify_pill, plant_stage_progress};
use super::metrics::{comfort_readings, derive_sample_metrics, water_balance};
use super::text::clean_analysis_text;
use super::trend::{split_trend, trend_days};

/// The recommendation to display: a fresh one, else the one stored with the plant
pub fn effective_recommendation<'a>(
    fresh: Option<&'a Value>,
    plant: &'a PlantContext,
) -> Option<&'a Value> {
    fresh
        .filter(|v| is_truthy(v))
        .or_else(|| plant.ai_analysis_report.as_ref().filter(|v| is_truthy(v)))
}

/// Build everything the plant card shows from one weather sample
///
/// `today` is the ISO calendar day the rain trend is split on.
pub fn build_dashboard(
    weather: &WeatherSample,
    today: &str,
    plant: &PlantContext,
    fresh_recommendation: Option<&Value>,
) -> AgronomyDashboard {
    let split = split_trend(&weather.rain_trend, today);
    let (past_days, future_days) = trend_days(&split, today);

    let recommendation =
        effective_recommendation(fresh_recommendation, plant).map(RecommendationResult::from_value);

    AgronomyDashboard {
        location_name: weather.location.as_ref().and_then(|l| l.name.clone()),
        metrics: derive_sample_metrics(weather, today),
        comfort: comfort_readings(weather),
        water_balance: water_balance(weather),
        past_days,
        future_days,
        stage: plant_stage_progress(plant),
        pill: recommendation.as_ref().map(classify_pill),
        analysis_text: clean_analysis_text(
            recommendation.as_ref().and_then(RecommendationResult::analysis_text),
        ),
    }
}
