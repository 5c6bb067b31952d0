//! Route definitions for Greenfield Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/agronomy", agronomy_routes())
        .nest("/interventions", intervention_routes())
        .nest("/plants", plant_routes())
}

/// Derived metrics, trend and classification routes
fn agronomy_routes() -> Router<AppState> {
    Router::new()
        .route("/vpd", post(handlers::vpd))
        .route("/metrics", post(handlers::metrics))
        .route("/trend", post(handlers::trend))
        .route("/recommendation-pill", post(handlers::recommendation_pill))
        .route("/suitability", post(handlers::suitability))
        .route("/stage", get(handlers::stage))
        .route("/dashboard", post(handlers::dashboard))
}

/// Intervention form validation routes
fn intervention_routes() -> Router<AppState> {
    Router::new()
        .route("/irrigation/validate", post(handlers::validate_irrigation))
        .route("/fertilization/validate", post(handlers::validate_fertilization))
}

/// Plant form validation routes
fn plant_routes() -> Router<AppState> {
    Router::new().route("/validate", post(handlers::validate_plant))
}
