//! Synthetic daily series for demos and tests

use crate::errors::{AppError, AppResult};
use crate::types::SeriesPoint;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

/// `days` consecutive dates from `start`, each with a uniform random integer
/// value in `0..max_value`
pub fn generate_series<R: Rng + ?Sized>(
    start: NaiveDate,
    days: usize,
    max_value: u32,
    rng: &mut R,
) -> AppResult<Vec<SeriesPoint>> {
    if max_value == 0 {
        return Err(AppError::InvalidData(
            "synthetic max_value must be positive".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(days);
    for offset in 0..days {
        let date = i64::try_from(offset)
            .ok()
            .and_then(|o| start.checked_add_signed(Duration::days(o)))
            .ok_or_else(|| {
                AppError::InvalidData(format!("{} days from {} is out of range", offset, start))
            })?;
        points.push(SeriesPoint::new(date, rng.gen_range(0..max_value) as f64));
    }

    debug!(start = %start, days, max_value, "generated synthetic series");
    Ok(points)
}
