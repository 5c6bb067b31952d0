//! Agronomy integration tests
//!
//! Tests for the derived metrics and classifications including:
//! - Property 1: VPD falls as humidity rises
//! - Property 2: Trend split windows
//! - Property 3: Rain accumulation bands
//! - Property 4: Recommendation pills never fail

use proptest::prelude::*;
use serde_json::{json, Value};
use shared::*;

fn day(n: u32) -> String {
    format!("2024-05-{:02}", n)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Reference reading from the agronomy panel
    #[test]
    fn test_reference_vpd() {
        let reading = derive_metrics(Some(20.0), Some(50.0));
        assert_eq!(reading.vpd_kpa, Some(1.17));
        assert_eq!(reading.status, VpdStatus::OptimalTranspiration);
    }

    /// Saturated air has no deficit and favours mold
    #[test]
    fn test_saturated_air() {
        let reading = derive_metrics(Some(25.0), Some(100.0));
        assert_eq!(reading.vpd_kpa, Some(0.0));
        assert_eq!(reading.status, VpdStatus::LowRiskMold);
    }

    /// Test the full weather payload to dashboard path
    #[test]
    fn test_dashboard_from_weather_payload() {
        let weather: WeatherSample = serde_json::from_value(json!({
            "location": {"name": "Bari"},
            "temp": 30,
            "humidity": 30,
            "wind": 25,
            "et0": 12,
            "rainNext24h": 0.5,
            "rain_trend": [
                {"date": "2024-05-06", "rain": 0.4},
                {"date": "2024-05-07", "rain": null},
                {"date": "2024-05-10", "rain": 8.0}
            ]
        }))
        .unwrap();

        let dashboard = build_dashboard(
            &weather,
            "2024-05-10",
            &PlantContext::default(),
            Some(&json!({"recommendation": "irrigate_today", "explanationLLM": "## Secco"})),
        );

        assert_eq!(dashboard.location_name.as_deref(), Some("Bari"));
        assert_eq!(dashboard.metrics.vpd_status, VpdStatus::HighWaterStress);
        assert_eq!(dashboard.metrics.pathogen_risk, PathogenRisk::Low);
        assert_eq!(
            dashboard.metrics.rain_accumulation.map(|a| a.status),
            Some(RainAccumulationStatus::Dry)
        );
        assert_eq!(dashboard.comfort.wind, ComfortStatus::Warning);
        assert_eq!(dashboard.water_balance.evapotranspiration_percent, 100.0);
        assert_eq!(dashboard.water_balance.rain_percent, 5.0);
        assert_eq!(dashboard.past_days.len(), 2);
        assert!(dashboard.future_days[0].is_today && dashboard.future_days[0].is_rainy);
        assert_eq!(dashboard.pill.map(|p| p.kind), Some(PillKind::IrrigateNow));
        assert_eq!(dashboard.analysis_text, "Secco");
    }

    /// A stored report is used only when no fresh recommendation is given
    #[test]
    fn test_fresh_recommendation_wins() {
        let plant = PlantContext {
            ai_analysis_report: Some(json!({"recommendation": "skip"})),
            ..Default::default()
        };
        let weather = WeatherSample::default();

        let stored = build_dashboard(&weather, "2024-05-10", &plant, None);
        assert_eq!(stored.pill.map(|p| p.kind), Some(PillKind::DoNotIrrigate));

        let fresh = json!({"decision": {"recommendation": "IRRIGARE"}});
        let dashboard = build_dashboard(&weather, "2024-05-10", &plant, Some(&fresh));
        assert_eq!(dashboard.pill.map(|p| p.kind), Some(PillKind::IrrigateNow));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating air temperatures
    fn temperature_strategy() -> impl Strategy<Value = f64> {
        (-200i32..=450i32).prop_map(|n| n as f64 / 10.0) // -20.0 to 45.0°C
    }

    /// Strategy for generating relative humidity
    fn humidity_strategy() -> impl Strategy<Value = f64> {
        (0i32..=1000i32).prop_map(|n| n as f64 / 10.0) // 0.0 to 100.0%
    }

    /// Strategy for generating a rain series within one month
    fn rain_series_strategy() -> impl Strategy<Value = Vec<RainDay>> {
        prop::collection::vec((1u32..=28u32, 0u32..=300u32), 0..20).prop_map(|days| {
            days.into_iter()
                .map(|(d, mm)| RainDay::new(day(d), mm as f64 / 10.0))
                .collect()
        })
    }

    /// Strategy for generating arbitrary JSON payloads
    fn payload_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-zA-Z_ ]{0,12}".prop_map(Value::from),
            Just(Value::from("IRRIGARE")),
            Just(Value::from("skip")),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                prop::collection::hash_map(
                    prop_oneof![
                        Just("recommendation".to_string()),
                        Just("decision".to_string()),
                        Just("error".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                    0..4
                )
                .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property 1: VPD never increases when humidity rises
        #[test]
        fn prop_vpd_monotonic_in_humidity(
            temp in temperature_strategy(),
            h1 in humidity_strategy(),
            h2 in humidity_strategy()
        ) {
            let (low, high) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
            let vpd_low = calculate_vpd(Some(temp), Some(low)).unwrap();
            let vpd_high = calculate_vpd(Some(temp), Some(high)).unwrap();
            prop_assert!(vpd_low >= vpd_high);
            prop_assert!(vpd_high >= 0.0);
        }

        /// Property 1: A missing reading means no VPD
        #[test]
        fn prop_missing_reading_is_unknown(temp in temperature_strategy()) {
            let reading = derive_metrics(Some(temp), None);
            prop_assert_eq!(reading.vpd_kpa, None);
            prop_assert_eq!(reading.status, VpdStatus::Unknown);
        }

        /// Property 2: Each side holds at most five days, on the correct side of today
        #[test]
        fn prop_split_windows(series in rain_series_strategy(), today in 1u32..=28u32) {
            let today = day(today);
            let split = split_trend(&series, &today);

            prop_assert!(split.past.len() <= 5);
            prop_assert!(split.future.len() <= 5);
            prop_assert!(split.past.iter().all(|d| d.date < today));
            prop_assert!(split.future.iter().all(|d| d.date >= today));
            prop_assert!(split.past.windows(2).all(|w| w[0].date <= w[1].date));
            prop_assert!(split.future.windows(2).all(|w| w[0].date <= w[1].date));
        }

        /// Property 2: Splitting an already split series changes nothing
        #[test]
        fn prop_split_idempotent(series in rain_series_strategy(), today in 1u32..=28u32) {
            let today = day(today);
            let split = split_trend(&series, &today);

            let rejoined: Vec<RainDay> = split.past.iter().chain(&split.future).cloned().collect();
            prop_assert_eq!(split_trend(&rejoined, &today), split);
        }

        /// Property 3: Accumulation status follows the past-window total
        #[test]
        fn prop_accumulation_bands(series in rain_series_strategy(), today in 1u32..=28u32) {
            let split = split_trend(&series, &day(today));

            match rain_accumulation(&split.past) {
                None => prop_assert!(split.past.is_empty()),
                Some(accumulation) => {
                    let total: f64 = split.past.iter().map(RainDay::rain_mm).sum();
                    let expected = if total > 10.0 {
                        RainAccumulationStatus::Saturated
                    } else if total > 2.0 {
                        RainAccumulationStatus::Moderate
                    } else {
                        RainAccumulationStatus::Dry
                    };
                    prop_assert_eq!(accumulation.status, expected);
                }
            }
        }

        /// Property 4: Any payload classifies, and only known shapes leave "Pending"
        #[test]
        fn prop_pill_total(payload in payload_strategy()) {
            let pill = classify_pill_value(&payload);
            if !payload.is_object() {
                prop_assert_eq!(pill.kind, PillKind::Pending);
            }
            prop_assert_eq!(pill.label, pill.kind.label());
        }

        /// Stage progress always lands on one of the lifecycle marks
        #[test]
        fn prop_stage_progress_marks(label in "\\PC{0,24}") {
            prop_assert!([15u8, 40, 50, 65, 85].contains(&stage_progress(&label)));
        }

        /// Water-balance bars stay within the gauge
        #[test]
        fn prop_water_balance_bounded(rain in 0u32..=1000u32, et0 in 0u32..=1000u32) {
            let sample = WeatherSample {
                rain_next_24h_mm: Some(rain as f64 / 10.0),
                et0_mm: Some(et0 as f64 / 10.0),
                ..Default::default()
            };
            let balance = water_balance(&sample);
            prop_assert!((0.0..=100.0).contains(&balance.rain_percent));
            prop_assert!((0.0..=100.0).contains(&balance.evapotranspiration_percent));
        }
    }
}
