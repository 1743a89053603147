//! Completes a sparse daily series into whole calendar years

use crate::errors::{AppError, AppResult};
use crate::processor::aggregate_daily;
use crate::types::{CompletedSeries, SeriesPoint};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Fill every date from 1 January of the earliest year to 31 December of the
/// latest year present in `points`.
///
/// Dates absent from the input get a missing value. Points sharing a date are
/// summed (missing + missing stays missing), so a completed series fed back in
/// comes out unchanged.
///
/// # Errors
/// * `AppError::EmptyInput` if `points` is empty
pub fn fill_gaps(points: &[SeriesPoint]) -> AppResult<CompletedSeries> {
    let by_date: BTreeMap<NaiveDate, Option<f64>> = aggregate_daily(points.iter().copied())
        .into_iter()
        .map(|p| (p.date, p.value))
        .collect();

    let (first, last) = match (by_date.keys().next(), by_date.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(AppError::EmptyInput),
    };

    let start = year_start(first.year())?;
    let end = year_end(last.year())?;

    let filled: Vec<SeriesPoint> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| SeriesPoint {
            date,
            value: by_date.get(&date).copied().flatten(),
        })
        .collect();

    debug!(
        start = %start,
        end = %end,
        input_days = by_date.len(),
        filled_days = filled.len(),
        "gap filled series"
    );

    Ok(CompletedSeries::from_points(filled))
}

fn year_start(year: i32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AppError::InvalidData(format!("year {} out of range", year)))
}

fn year_end(year: i32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| AppError::InvalidData(format!("year {} out of range", year)))
}
