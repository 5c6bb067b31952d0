//! HTTP handlers for agronomy endpoints
//!
//! Every handler is a thin wrapper over the `shared` agronomy functions.
//! Requests carry the weather sample and plant context; nothing is stored.

use axum::{extract::Query, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::agronomy;
use shared::{
    iso_day, validate_iso_day, AgronomyDashboard, ComfortReadings, DerivedMetrics, Pill,
    PlantContext, RainAccumulation, RainDay, StageProgress, SuitabilityBadge, TrendSplit,
    VpdReading, WaterBalance, WeatherSample, DEFAULT_STAGE_LABEL,
};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Resolve the reference day: the caller's, or the server's current UTC day
pub(crate) fn resolve_today(today: Option<&str>) -> AppResult<String> {
    match today {
        Some(day) => {
            validate_iso_day(day).map_err(|msg| {
                AppError::field("today", msg, "La data deve essere un giorno ISO (AAAA-MM-GG)")
            })?;
            Ok(day.to_string())
        }
        None => Ok(iso_day(Utc::now().date_naive())),
    }
}

// ============================================================================
// VPD and metrics
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct VpdRequest {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

/// Vapor-pressure deficit for a single reading
pub async fn vpd(Json(input): Json<VpdRequest>) -> Json<VpdReading> {
    Json(agronomy::derive_metrics(input.temperature, input.humidity))
}

#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    #[serde(default)]
    pub weather: WeatherSample,
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
    pub comfort: ComfortReadings,
    pub water_balance: WaterBalance,
}

/// Derived metrics and comfort bands for a weather sample
pub async fn metrics(Json(input): Json<MetricsRequest>) -> AppResult<Json<MetricsResponse>> {
    let today = resolve_today(input.today.as_deref())?;
    let weather = &input.weather;

    tracing::debug!(
        today = %today,
        trend_days = weather.rain_trend.len(),
        "Deriving weather metrics"
    );

    Ok(Json(MetricsResponse {
        metrics: agronomy::derive_sample_metrics(weather, &today),
        comfort: agronomy::comfort_readings(weather),
        water_balance: agronomy::water_balance(weather),
    }))
}

// ============================================================================
// Rain trend
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    #[serde(default, alias = "rain")]
    pub rain_trend: Vec<RainDay>,
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    #[serde(flatten)]
    pub split: TrendSplit,
    /// Over the past window only; `null` when it is empty
    pub accumulation: Option<RainAccumulation>,
}

/// Split a rain series around today and classify the past window
pub async fn trend(Json(input): Json<TrendRequest>) -> AppResult<Json<TrendResponse>> {
    let today = resolve_today(input.today.as_deref())?;
    let split = agronomy::split_trend(&input.rain_trend, &today);
    let accumulation = agronomy::rain_accumulation(&split.past);

    Ok(Json(TrendResponse {
        split,
        accumulation,
    }))
}

// ============================================================================
// Classification
// ============================================================================

/// Recommendation pill for any JSON payload the AI service produced
pub async fn recommendation_pill(Json(payload): Json<Value>) -> Json<Pill> {
    let pill = agronomy::classify_pill_value(&payload);
    tracing::debug!(pill = %pill.kind, "Classified recommendation");
    Json(pill)
}

/// Suitability badge for a site-analysis pipeline result
pub async fn suitability(Json(result): Json<Value>) -> Json<SuitabilityBadge> {
    Json(agronomy::suitability_from_pipeline(&result))
}

#[derive(Debug, Deserialize, Validate)]
pub struct StageQuery {
    #[validate(length(max = 200))]
    pub label: Option<String>,
}

/// Lifecycle progress for a stage label
pub async fn stage(Query(query): Query<StageQuery>) -> AppResult<Json<StageProgress>> {
    query.validate().map_err(|_| {
        AppError::field(
            "label",
            "Stage label must be at most 200 characters",
            "L'etichetta della fase deve avere al massimo 200 caratteri",
        )
    })?;

    let label = query
        .label
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_STAGE_LABEL.to_string());
    let percent = agronomy::stage_progress(&label);

    Ok(Json(StageProgress { label, percent }))
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    #[serde(default)]
    pub weather: WeatherSample,
    pub today: Option<String>,
    #[serde(default)]
    pub plant: PlantContext,
    /// A fresh recommendation; falls back to the one stored with the plant
    pub recommendation: Option<Value>,
}

/// Everything the plant card shows, in one response
pub async fn dashboard(Json(input): Json<DashboardRequest>) -> AppResult<Json<AgronomyDashboard>> {
    let today = resolve_today(input.today.as_deref())?;

    let dashboard = agronomy::build_dashboard(
        &input.weather,
        &today,
        &input.plant,
        input.recommendation.as_ref(),
    );

    tracing::info!(
        plant = input.plant.name.as_deref().unwrap_or("-"),
        stage = %dashboard.stage.label,
        has_recommendation = dashboard.pill.is_some(),
        "Built agronomy dashboard"
    );

    Ok(Json(dashboard))
}
