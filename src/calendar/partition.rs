//! Year selection and month partitioning

use crate::types::{MonthSeries, SeriesPoint};
use chrono::Datelike;
use tracing::debug;

/// Points whose date falls in `year`, order preserved
///
/// Returns an empty vector when nothing matches; callers decide whether that
/// is fatal.
pub fn select_year(points: &[SeriesPoint], year: i32) -> Vec<SeriesPoint> {
    let selected: Vec<SeriesPoint> = points
        .iter()
        .filter(|p| p.date.year() == year)
        .copied()
        .collect();
    debug!(year, days = selected.len(), "selected year");
    selected
}

/// Split a single year's points into one `MonthSeries` per month number from
/// the smallest to the largest month present.
///
/// Months inside that range with no points yield an empty `MonthSeries`.
/// The year is taken from the first point; points from any other year are
/// ignored.
pub fn split_months(year_points: &[SeriesPoint]) -> Vec<MonthSeries> {
    let Some(year) = year_points.first().map(|p| p.date.year()) else {
        return Vec::new();
    };

    let in_year = || year_points.iter().filter(move |p| p.date.year() == year);
    let (Some(min_month), Some(max_month)) = (
        in_year().map(|p| p.date.month()).min(),
        in_year().map(|p| p.date.month()).max(),
    ) else {
        return Vec::new();
    };

    (min_month..=max_month)
        .map(|month| {
            let mut points: Vec<SeriesPoint> = in_year()
                .filter(|p| p.date.month() == month)
                .copied()
                .collect();
            points.sort_by_key(|p| p.date);
            MonthSeries {
                year,
                month,
                points,
            }
        })
        .collect()
}
