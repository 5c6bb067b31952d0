//! Rain trend windows and accumulation

use crate::models::{RainAccumulation, RainAccumulationStatus, RainDay, TrendDay, TrendSplit};

use super::rules::{Rule, RuleTable};

/// Days kept on each side of today
pub const TREND_WINDOW_DAYS: usize = 5;

/// A day is drawn as rainy above this many mm
pub const RAINY_DAY_THRESHOLD_MM: f64 = 2.0;

static RAIN_ACCUMULATION_RULES: RuleTable<f64, RainAccumulationStatus> = RuleTable::new(
    &[
        Rule {
            name: "more than 10 mm",
            matches: |total: &f64| *total > 10.0,
            outcome: RainAccumulationStatus::Saturated,
        },
        Rule {
            name: "more than 2 mm",
            matches: |total: &f64| *total > 2.0,
            outcome: RainAccumulationStatus::Moderate,
        },
    ],
    RainAccumulationStatus::Dry,
);

/// Split a rain series into the days before `today` and the days from `today` on
///
/// Dates are compared as strings, which orders ISO calendar days correctly.
/// The past side keeps the five days closest to today, the future side the
/// five nearest upcoming days.
pub fn split_trend(series: &[RainDay], today: &str) -> TrendSplit {
    let (mut past, mut future): (Vec<RainDay>, Vec<RainDay>) = series
        .iter()
        .cloned()
        .partition(|day| day.date.as_str() < today);

    past.sort_by(|a, b| a.date.cmp(&b.date));
    future.sort_by(|a, b| a.date.cmp(&b.date));

    let skip = past.len().saturating_sub(TREND_WINDOW_DAYS);
    past.drain(..skip);
    future.truncate(TREND_WINDOW_DAYS);

    TrendSplit { past, future }
}

/// Classify the rain fallen over the past window
///
/// Returns `None` for an empty window: no data is not the same as a dry spell.
pub fn rain_accumulation(past: &[RainDay]) -> Option<RainAccumulation> {
    if past.is_empty() {
        return None;
    }

    let total: f64 = past.iter().map(RainDay::rain_mm).sum();
    let status = RAIN_ACCUMULATION_RULES.evaluate(&total);
    Some(RainAccumulation::new(status, total))
}

/// Display tiles for both sides of the split
pub fn trend_days(split: &TrendSplit, today: &str) -> (Vec<TrendDay>, Vec<TrendDay>) {
    let tile = |day: &RainDay, is_past: bool| {
        let rain_mm = day.rain_mm();
        TrendDay {
            date: day.date.clone(),
            rain_mm,
            is_past,
            is_today: !is_past && day.date == today,
            is_rainy: rain_mm > RAINY_DAY_THRESHOLD_MM,
        }
    };

    (
        split.past.iter().map(|d| tile(d, true)).collect(),
        split.future.iter().map(|d| tile(d, false)).collect(),
    )
}
