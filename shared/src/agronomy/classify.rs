//! Recommendation pill, location suitability and growth-stage progress

use serde_json::Value;

use crate::models::{
    Pill, PillKind, PlantContext, RecommendationResult, StageProgress, SuitabilityBadge,
    SuitabilityIndices, SuitabilityRating, ACTION_IRRIGATE_TODAY, ACTION_IRRIGATE_TOMORROW,
    ACTION_SKIP, DECISION_IRRIGATE, DECISION_SKIP,
};

use super::rules::{Rule, RuleTable};

/// Progress shown for a stage no rule recognizes
pub const UNKNOWN_STAGE_PERCENT: u8 = 50;

static PILL_RULES: RuleTable<RecommendationResult, PillKind> = RuleTable::new(
    &[
        Rule {
            name: "irrigate",
            matches: |r: &RecommendationResult| {
                matches!(
                    r.recommendation.as_deref(),
                    Some(ACTION_IRRIGATE_TODAY) | Some(ACTION_IRRIGATE_TOMORROW)
                ) || r.decision_verdict() == Some(DECISION_IRRIGATE)
            },
            outcome: PillKind::IrrigateNow,
        },
        Rule {
            name: "skip",
            matches: |r: &RecommendationResult| {
                r.recommendation.as_deref() == Some(ACTION_SKIP)
                    || r.decision_verdict() == Some(DECISION_SKIP)
            },
            outcome: PillKind::DoNotIrrigate,
        },
        Rule {
            name: "upstream error",
            matches: |r: &RecommendationResult| r.error.is_some(),
            outcome: PillKind::Error,
        },
    ],
    PillKind::Pending,
);

static SUITABILITY_RULES: RuleTable<SuitabilityIndices, SuitabilityRating> = RuleTable::new(
    &[
        Rule {
            name: "comfortable and unstressed",
            matches: |i: &SuitabilityIndices| {
                i.climate_comfort_index >= 75.0 && i.water_stress_index < 40.0
            },
            outcome: SuitabilityRating::Ideal,
        },
        Rule {
            name: "comfort 50+",
            matches: |i: &SuitabilityIndices| i.climate_comfort_index >= 50.0,
            outcome: SuitabilityRating::Good,
        },
        Rule {
            name: "comfort 30+",
            matches: |i: &SuitabilityIndices| i.climate_comfort_index >= 30.0,
            outcome: SuitabilityRating::Acceptable,
        },
    ],
    SuitabilityRating::NotRecommended,
);

// Substrings are Italian stage names: semina, iniziale, germinazione,
// crescita, vegetativa, fioritura, fruttificazione, maturazione.
// A label can match more than one rule; the earlier stage wins.
static STAGE_RULES: RuleTable<str, u8> = RuleTable::new(
    &[
        Rule {
            name: "sowing",
            matches: |s: &str| s.contains("sem") || s.contains("ini") || s.contains("germ"),
            outcome: 15,
        },
        Rule {
            name: "vegetative",
            matches: |s: &str| s.contains("cresc") || s.contains("veg"),
            outcome: 40,
        },
        Rule {
            name: "flowering",
            matches: |s: &str| s.contains("fior"),
            outcome: 65,
        },
        Rule {
            name: "fruiting",
            matches: |s: &str| s.contains("frut") || s.contains("mat"),
            outcome: 85,
        },
    ],
    UNKNOWN_STAGE_PERCENT,
);

/// Classify a recommendation into its display pill
pub fn classify_pill(result: &RecommendationResult) -> Pill {
    Pill::from(PILL_RULES.evaluate(result))
}

/// Classify a raw recommendation payload; any shape is accepted
pub fn classify_pill_value(payload: &Value) -> Pill {
    classify_pill(&RecommendationResult::from_value(payload))
}

/// Suitability rating; missing indices count as 0
pub fn suitability_rating(
    climate_comfort_index: Option<f64>,
    water_stress_index: Option<f64>,
) -> SuitabilityRating {
    SUITABILITY_RULES.evaluate(&SuitabilityIndices::new(climate_comfort_index, water_stress_index))
}

pub fn suitability_badge(indices: SuitabilityIndices) -> SuitabilityBadge {
    let rating = SUITABILITY_RULES.evaluate(&indices);
    SuitabilityBadge {
        rating,
        label: rating.to_string(),
        style_tag: rating.style_tag().to_string(),
        indices,
    }
}

/// Badge for a pipeline result, reading `details.features`
pub fn suitability_from_pipeline(result: &Value) -> SuitabilityBadge {
    suitability_badge(SuitabilityIndices::from_pipeline_result(result))
}

/// Lifecycle progress percent for a free-text stage label, case-insensitive
pub fn stage_progress(label: &str) -> u8 {
    STAGE_RULES.evaluate(label.to_lowercase().as_str())
}

pub fn plant_stage_progress(plant: &PlantContext) -> StageProgress {
    let label = plant.stage_label();
    StageProgress {
        label: label.to_string(),
        percent: stage_progress(label),
    }
}
