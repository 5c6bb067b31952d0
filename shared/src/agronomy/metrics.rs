//! Vapor-pressure deficit, pathogen risk and per-metric comfort bands

use crate::models::{
    ComfortReadings, ComfortStatus, DerivedMetrics, PathogenRisk, VpdReading, VpdStatus,
    WaterBalance, WeatherSample,
};
use crate::types::finite;

use super::rules::{Rule, RuleTable};
use super::trend::{rain_accumulation, split_trend};

/// Relative humidity above which fungal pathogens are considered a high risk
pub const PATHOGEN_HUMIDITY_THRESHOLD: f64 = 80.0;

/// Water-balance bars grow 10% per mm and saturate at 100%
const WATER_BALANCE_PERCENT_PER_MM: f64 = 10.0;

static VPD_STATUS_RULES: RuleTable<f64, VpdStatus> = RuleTable::new(
    &[
        Rule {
            name: "below 0.4 kPa",
            matches: |vpd: &f64| *vpd < 0.4,
            outcome: VpdStatus::LowRiskMold,
        },
        Rule {
            name: "0.4 to 1.6 kPa",
            matches: |vpd: &f64| *vpd <= 1.6,
            outcome: VpdStatus::OptimalTranspiration,
        },
    ],
    VpdStatus::HighWaterStress,
);

static TEMPERATURE_COMFORT_RULES: RuleTable<f64, ComfortStatus> = RuleTable::new(
    &[Rule {
        name: "10-32 °C",
        matches: |t: &f64| *t > 10.0 && *t < 32.0,
        outcome: ComfortStatus::Good,
    }],
    ComfortStatus::Warning,
);

static HUMIDITY_COMFORT_RULES: RuleTable<f64, ComfortStatus> = RuleTable::new(
    &[Rule {
        name: "40-85 %",
        matches: |h: &f64| *h > 40.0 && *h < 85.0,
        outcome: ComfortStatus::Good,
    }],
    ComfortStatus::Bad,
);

static WIND_COMFORT_RULES: RuleTable<f64, ComfortStatus> = RuleTable::new(
    &[Rule {
        name: "below 20 km/h",
        matches: |w: &f64| *w < 20.0,
        outcome: ComfortStatus::Good,
    }],
    ComfortStatus::Warning,
);

/// Vapor-pressure deficit in kPa from the Tetens approximation, rounded to two decimals
pub fn calculate_vpd(temperature_c: Option<f64>, humidity_pct: Option<f64>) -> Option<f64> {
    let t = finite(temperature_c)?;
    let h = finite(humidity_pct)?;

    let svp = 0.6108 * (17.27 * t / (t + 237.3)).exp();
    let avp = svp * (h / 100.0);
    let vpd = ((svp - avp) * 100.0).round() / 100.0;

    // exponent overflows just below -237.3 °C
    vpd.is_finite().then_some(vpd)
}

/// Classify an already rounded VPD value
pub fn vpd_status(vpd_kpa: Option<f64>) -> VpdStatus {
    match finite(vpd_kpa) {
        Some(vpd) => VPD_STATUS_RULES.evaluate(&vpd),
        None => VpdStatus::Unknown,
    }
}

/// VPD and its status; `None`/`Unknown` when either reading is missing
pub fn derive_metrics(temperature_c: Option<f64>, humidity_pct: Option<f64>) -> VpdReading {
    let vpd_kpa = calculate_vpd(temperature_c, humidity_pct);
    VpdReading {
        vpd_kpa,
        status: vpd_status(vpd_kpa),
    }
}

/// Missing humidity counts as low risk
pub fn pathogen_risk(humidity_pct: Option<f64>) -> PathogenRisk {
    match finite(humidity_pct) {
        Some(h) if h > PATHOGEN_HUMIDITY_THRESHOLD => PathogenRisk::High,
        _ => PathogenRisk::Low,
    }
}

fn comfort(table: &RuleTable<f64, ComfortStatus>, value: Option<f64>) -> ComfortStatus {
    finite(value).map_or(ComfortStatus::Neutral, |v| table.evaluate(&v))
}

pub fn temperature_comfort(temperature_c: Option<f64>) -> ComfortStatus {
    comfort(&TEMPERATURE_COMFORT_RULES, temperature_c)
}

pub fn humidity_comfort(humidity_pct: Option<f64>) -> ComfortStatus {
    comfort(&HUMIDITY_COMFORT_RULES, humidity_pct)
}

pub fn wind_comfort(wind_kmh: Option<f64>) -> ComfortStatus {
    comfort(&WIND_COMFORT_RULES, wind_kmh)
}

pub fn comfort_readings(sample: &WeatherSample) -> ComfortReadings {
    ComfortReadings {
        temperature: temperature_comfort(sample.temperature_c),
        humidity: humidity_comfort(sample.humidity_pct),
        wind: wind_comfort(sample.wind_kmh),
    }
}

/// Bar widths comparing forecast rain against evapotranspiration
pub fn water_balance(sample: &WeatherSample) -> WaterBalance {
    let bar = |mm: Option<f64>| {
        (finite(mm).unwrap_or(0.0) * WATER_BALANCE_PERCENT_PER_MM).min(100.0)
    };
    WaterBalance {
        rain_percent: bar(sample.rain_next_24h_mm),
        evapotranspiration_percent: bar(sample.et0_mm),
    }
}

/// All derived indicators of a sample, with the rain window anchored on `today` (`YYYY-MM-DD`)
pub fn derive_sample_metrics(sample: &WeatherSample, today: &str) -> DerivedMetrics {
    let vpd = derive_metrics(sample.temperature_c, sample.humidity_pct);
    let split = split_trend(&sample.rain_trend, today);

    DerivedMetrics {
        vpd_kpa: vpd.vpd_kpa,
        vpd_status: vpd.status,
        pathogen_risk: pathogen_risk(sample.humidity_pct),
        rain_accumulation: rain_accumulation(&split.past),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RainDay;

    #[test]
    fn test_vpd_reference_value() {
        let reading = derive_metrics(Some(20.0), Some(50.0));
        assert_eq!(reading.vpd_kpa, Some(1.17));
        assert_eq!(reading.status, VpdStatus::OptimalTranspiration);
    }

    #[test]
    fn test_vpd_missing_inputs() {
        for (t, h) in [(None, Some(50.0)), (Some(20.0), None), (None, None)] {
            let reading = derive_metrics(t, h);
            assert_eq!(reading.vpd_kpa, None);
            assert_eq!(reading.status, VpdStatus::Unknown);
        }
    }

    #[test]
    fn test_vpd_non_finite_inputs() {
        assert_eq!(calculate_vpd(Some(f64::NAN), Some(50.0)), None);
        assert_eq!(calculate_vpd(Some(-237.4), Some(50.0)), None);
    }

    #[test]
    fn test_vpd_at_tetens_pole_is_zero() {
        // 17.27 * t / 0 is -inf, so saturation pressure collapses to 0
        assert_eq!(calculate_vpd(Some(-237.3), Some(50.0)), Some(0.0));
        assert_eq!(vpd_status(Some(0.0)), VpdStatus::LowRiskMold);
    }

    #[test]
    fn test_vpd_status_bands() {
        assert_eq!(vpd_status(Some(0.39)), VpdStatus::LowRiskMold);
        assert_eq!(vpd_status(Some(0.4)), VpdStatus::OptimalTranspiration);
        assert_eq!(vpd_status(Some(1.6)), VpdStatus::OptimalTranspiration);
        assert_eq!(vpd_status(Some(1.61)), VpdStatus::HighWaterStress);
        assert_eq!(vpd_status(None), VpdStatus::Unknown);
    }

    #[test]
    fn test_saturated_air_is_mold_risk() {
        let reading = derive_metrics(Some(15.0), Some(100.0));
        assert_eq!(reading.vpd_kpa, Some(0.0));
        assert_eq!(reading.status, VpdStatus::LowRiskMold);
    }

    #[test]
    fn test_hot_dry_air_is_water_stress() {
        let reading = derive_metrics(Some(35.0), Some(20.0));
        assert_eq!(reading.status, VpdStatus::HighWaterStress);
    }

    #[test]
    fn test_pathogen_risk() {
        assert_eq!(pathogen_risk(Some(81.0)), PathogenRisk::High);
        assert_eq!(pathogen_risk(Some(80.0)), PathogenRisk::Low);
        assert_eq!(pathogen_risk(None), PathogenRisk::Low);
    }

    #[test]
    fn test_temperature_comfort_open_interval() {
        assert_eq!(temperature_comfort(Some(10.0)), ComfortStatus::Warning);
        assert_eq!(temperature_comfort(Some(10.5)), ComfortStatus::Good);
        assert_eq!(temperature_comfort(Some(32.0)), ComfortStatus::Warning);
        assert_eq!(temperature_comfort(None), ComfortStatus::Neutral);
    }

    #[test]
    fn test_humidity_and_wind_comfort() {
        assert_eq!(humidity_comfort(Some(40.0)), ComfortStatus::Bad);
        assert_eq!(humidity_comfort(Some(60.0)), ComfortStatus::Good);
        assert_eq!(humidity_comfort(Some(85.0)), ComfortStatus::Bad);
        assert_eq!(wind_comfort(Some(19.9)), ComfortStatus::Good);
        assert_eq!(wind_comfort(Some(20.0)), ComfortStatus::Warning);
        assert_eq!(wind_comfort(None), ComfortStatus::Neutral);
    }

    #[test]
    fn test_water_balance_clamps() {
        let sample = WeatherSample {
            rain_next_24h_mm: Some(3.5),
            et0_mm: Some(14.0),
            ..Default::default()
        };
        let balance = water_balance(&sample);
        assert_eq!(balance.rain_percent, 35.0);
        assert_eq!(balance.evapotranspiration_percent, 100.0);

        let empty = water_balance(&WeatherSample::default());
        assert_eq!(empty.rain_percent, 0.0);
        assert_eq!(empty.evapotranspiration_percent, 0.0);
    }

    #[test]
    fn test_derive_sample_metrics() {
        let sample = WeatherSample {
            temperature_c: Some(20.0),
            humidity_pct: Some(90.0),
            rain_trend: vec![
                RainDay::new("2024-05-01", 6.0),
                RainDay::new("2024-05-02", 6.0),
                RainDay::new("2024-05-03", 50.0),
            ],
            ..Default::default()
        };
        let metrics = derive_sample_metrics(&sample, "2024-05-03");
        assert_eq!(metrics.pathogen_risk, PathogenRisk::High);
        assert_eq!(metrics.vpd_status, VpdStatus::LowRiskMold);
        let accumulation = metrics.rain_accumulation.as_ref().unwrap();
        assert_eq!(accumulation.total_mm, 12.0);

        let same = derive_sample_metrics(&sample, "2024-05-03");
        assert_eq!(metrics, same);
    }
}
