//! Shared colour scale across a year's month panels

use crate::types::{MonthSeries, ScaleTick};

/// Largest real measurement across all `months`
pub fn global_max(months: &[MonthSeries]) -> Option<f64> {
    months
        .iter()
        .filter_map(MonthSeries::max_value)
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Round tick values from 0 up to `max` (at most `max_ticks` of them),
/// each paired with `value * distance_per_unit`.
///
/// Steps are 1, 2 or 5 times a power of ten. An absent or non-positive
/// maximum, or one too small for a representable step, yields a single zero
/// tick.
pub fn scale_ticks(max: Option<f64>, max_ticks: usize, distance_per_unit: f64) -> Vec<ScaleTick> {
    let tick = |value: f64| ScaleTick {
        value,
        distance: value * distance_per_unit,
    };

    let max = match max {
        Some(m) if m > 0.0 && m.is_finite() => m,
        _ => return vec![tick(0.0)],
    };
    let intervals = max_ticks.saturating_sub(1).max(1);
    let step = nice_step(max / intervals as f64);
    if !(step > 0.0 && step.is_finite()) {
        return vec![tick(0.0)];
    }

    let count = ((max / step).floor() as usize).min(intervals);
    (0..=count).map(|i| tick(i as f64 * step)).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
