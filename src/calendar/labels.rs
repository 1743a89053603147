//! Axis labels derived from grid index arrays

use crate::types::MonthAnchor;
use crate::utils::math::median;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Column labels in index order, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated English month name for month number 1..=12
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

pub fn weekday_labels() -> Vec<String> {
    WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect()
}

/// Row position for each distinct month among `dates`
///
/// `rows` is parallel to `dates`. Each anchor sits at the median row of that
/// month's dates so the label centres on its block of rows when several
/// months share one grid.
pub fn month_anchors(dates: &[NaiveDate], rows: &[usize]) -> Vec<MonthAnchor> {
    let months: BTreeSet<u32> = dates.iter().map(|d| d.month()).collect();

    months
        .into_iter()
        .filter_map(|month| {
            let month_rows: Vec<f64> = dates
                .iter()
                .zip(rows)
                .filter(|(d, _)| d.month() == month)
                .map(|(_, r)| *r as f64)
                .collect();
            let position = median(&month_rows)?;
            Some(MonthAnchor {
                month,
                name: month_name(month)?.to_string(),
                position,
            })
        })
        .collect()
}

/// Day-of-month number for every cell addressed by a date
///
/// Shape is `row_count` x 7; unaddressed cells are `None`.
pub fn day_labels(
    row_count: usize,
    dates: &[NaiveDate],
    rows: &[usize],
    cols: &[usize],
) -> Vec<[Option<u32>; 7]> {
    let mut labels = vec![[None; 7]; row_count];
    for ((date, row), col) in dates.iter().zip(rows).zip(cols) {
        if let Some(cell) = labels.get_mut(*row).and_then(|r| r.get_mut(*col)) {
            *cell = Some(date.day());
        }
    }
    labels
}
